use rseq::sources::{self, Receive};
use rseq::Sequence;

use crossbeam::channel;

use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_concurrent_traversals() {
    const THREADS: usize = 8;

    let pulls = AtomicUsize::new(0);
    let pipeline = sources::range(0u64, 1000)
        .on_each(|_| {
            pulls.fetch_add(1, Ordering::Relaxed);
        })
        .filter(|n| n % 3 == 0)
        .map(|n| n * n);

    let sums: Vec<u64> = crossbeam::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|_| pipeline.fold(0, |acc, n| acc + n)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
    .unwrap();

    let expected = (0..1000u64).filter(|n| n % 3 == 0).map(|n| n * n).sum::<u64>();
    assert!(sums.iter().all(|sum| *sum == expected));
    assert_eq!(pulls.load(Ordering::Relaxed), THREADS * 1000);
}

#[test]
fn test_concurrent_cursors_are_independent() {
    let letters = sources::chars("abcdefghij");

    crossbeam::scope(|s| {
        for skip in 0..4 {
            let letters = &letters;
            s.spawn(move |_| {
                let rest = letters.skip(skip).to(String::new());
                assert_eq!(rest, &"abcdefghij"[skip..]);
            });
        }
    })
    .unwrap();
}

#[test]
fn test_receive_from_producers() {
    const PRODUCERS: usize = 4;
    const MESSAGES: usize = 250;

    let (tx, messages) = Receive::unbounded();

    crossbeam::scope(|s| {
        for p in 0..PRODUCERS {
            let tx = tx.clone();
            s.spawn(move |_| {
                for m in 0..MESSAGES {
                    tx.send(p * MESSAGES + m).unwrap();
                }
            });
        }
    })
    .unwrap();

    let evens = messages.by_ref().filter(|n| n % 2 == 0);
    assert_eq!(evens.count(), PRODUCERS * MESSAGES / 2);

    // the first traversal drained the channel
    assert_eq!(messages.count(), 0);
}

#[test]
fn test_receive_while_producing() {
    let (tx, rx) = channel::bounded(16);
    let messages = sources::from_receiver(rx);

    let total = crossbeam::scope(|s| {
        s.spawn(move |_| {
            for n in 1..=100u32 {
                tx.send(n).unwrap();
            }
        });

        let mut total = 0;
        let mut received = 0;
        while received < 100 {
            let batch = messages.to(Vec::new());
            received += batch.len();
            total += batch.into_iter().sum::<u32>();
            std::thread::yield_now();
        }
        total
    })
    .unwrap();

    assert_eq!(total, 5050);
}
