//! This module defines the stages which combine existing sequences into new ones.
//!
//! A stage is an immutable descriptor holding its upstream sequence(s) and a transformation, predicate or count.
//! All traversal state lives in the cursor it creates, which pulls from the upstream cursor(s) on demand.
//! Stages are usually constructed through the methods of [`Sequence`](crate::Sequence).

mod chunk;
pub use chunk::{Chunk, ChunkCursor};

mod concat;
pub use concat::{Concat, ConcatCursor};

mod filter;
pub use filter::{Filter, FilterCursor};

mod flat_map;
pub use flat_map::{FlatMap, FlatMapCursor, Flatten, FlattenCursor};

mod map;
pub use map::{Map, MapCursor, OnEach, OnEachCursor};

mod skip;
pub use skip::{Skip, SkipCursor};

mod take;
pub use take::{Take, TakeCursor};

mod zip;
pub use zip::{Zip, ZipCursor};
