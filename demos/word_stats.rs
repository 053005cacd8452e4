//&# rseq Word Statistics
//&
//&This program builds one pipeline over a text and runs it several times.
//&Nothing is computed when the pipeline is built, and each terminal operation starts a traversal of its own.
//&The text is read from the first command-line argument; without one a small default text is used.

//&```rust
use rseq::cons::List;
use rseq::observable::Observable;
use rseq::sources;
use rseq::Sequence;

use std::env;

const DEFAULT_TEXT: &str = "the quick brown fox jumps over the lazy dog and the cat sleeps";

fn main() {
    let text = env::args().nth(1).unwrap_or_else(|| DEFAULT_TEXT.to_string());

    let words = sources::from_iterable(text.split_whitespace());
    let long_words = words.by_ref().filter(|w| w.chars().count() > 3);

    println!("words: {}", words.count());
    println!("long words: {}", long_words.display());
    println!(
        "longest word: {}",
        words
            .reduce(|a, b| if b.len() > a.len() { b } else { a })
            .unwrap_or("-")
    );

    // the words in rows of three
    if let Ok(rows) = words.by_ref().chunk(3) {
        rows.foreach(|row| println!("  {}", row.join(" ")));
    }

    // runs of words with equal length
    let lengths: List<usize> = words.iter().map(str::len).collect();
    println!("runs of equal lengths: {}", lengths.group());

    // report each new maximum length as it is found
    let mut longest = Observable::new(|old: Option<&usize>, new: &usize| {
        println!("new maximum length {new} (was {old:?})");
    });
    words.foreach(|w| {
        if longest.get().map_or(true, |max| w.len() > *max) {
            longest.set(w.len());
        }
    });
}
//&```
