//! Integration tests for the word/time index

use readalong::sync::{LookupStrategy, SeparatorMode, SyncError, WordTimeIndex};

#[test]
fn hello_world_example() {
    let index = WordTimeIndex::build(["Hello", "world"]);

    let offsets: Vec<_> = index
        .tokens()
        .iter()
        .map(|t| (t.text.as_str(), t.start, t.end))
        .collect();
    assert_eq!(offsets, vec![("Hello", 0, 5), ("world", 6, 11)]);
    assert_eq!(index.total_chars(), 11);

    assert_eq!(index.locate_word_at(0.0), Some(0));
    assert_eq!(index.locate_word_at(0.5), None);
    assert_eq!(index.locate_word_at(0.6), Some(1));
    assert_eq!(index.locate_word_at(1.0), None);

    let time = index.time_for_word_start(1, 100.0).unwrap();
    assert!((time - 600.0 / 11.0).abs() < 1e-9);
}

#[test]
fn round_trip_over_generated_documents() {
    // Deterministic word lengths 1..=12 in a scrambled order
    let words: Vec<String> = (0..500)
        .map(|i| "x".repeat((i * 7 + 3) % 12 + 1))
        .collect();

    for mode in [SeparatorMode::Between, SeparatorMode::Trailing] {
        for strategy in [LookupStrategy::Linear, LookupStrategy::Binary] {
            let index = WordTimeIndex::build_with(&words, mode).with_strategy(strategy);
            assert_eq!(index.len(), 500);

            for duration in [1.0, 42.5, 1234.567] {
                for i in 0..index.len() {
                    let time = index.time_for_word_start(i, duration).unwrap();
                    assert_eq!(index.locate_word_at(time / duration), Some(i));
                    assert_eq!(index.locate_word_at_time(time, duration), Some(i));
                }
            }
        }
    }
}

#[test]
fn total_chars_and_gaps_for_generated_documents() {
    for n in 1..40 {
        let words: Vec<String> = (0..n).map(|i| "ab".repeat(i % 5 + 1)).collect();
        let index = WordTimeIndex::build(&words);

        let letters: usize = words.iter().map(|w| w.len()).sum();
        assert_eq!(index.total_chars(), letters + n - 1);

        for pair in index.tokens().windows(2) {
            assert!(pair[0].start < pair[0].end);
            assert_eq!(pair[1].start, pair[0].end + 1);
        }
    }
}

#[test]
fn every_offset_maps_to_its_word_or_a_gap() {
    let index = WordTimeIndex::build(["one", "three", "five"]);
    let total = index.total_chars() as f64;
    let expected = [
        Some(0),
        Some(0),
        Some(0),
        None,
        Some(1),
        Some(1),
        Some(1),
        Some(1),
        Some(1),
        None,
        Some(2),
        Some(2),
        Some(2),
        Some(2),
    ];
    assert_eq!(index.total_chars(), expected.len());

    for (offset, want) in expected.iter().enumerate() {
        // Middle of each character cell
        let progress = (offset as f64 + 0.5) / total;
        assert_eq!(index.locate_word_at(progress), *want, "offset {}", offset);
    }
}

#[test]
fn errors_are_reported_not_panicked() {
    let empty = WordTimeIndex::build(Vec::<&str>::new());
    assert_eq!(empty.time_for_word_start(0, 1.0), Err(SyncError::EmptyIndex));
    assert_eq!(empty.locate_word_at_time(0.5, 1.0), None);

    let index = WordTimeIndex::build(["solo"]);
    let err = index.time_for_word_start(3, 1.0).unwrap_err();
    assert_eq!(err.to_string(), "Word 3 is out of range (index has 1 words)");
}
