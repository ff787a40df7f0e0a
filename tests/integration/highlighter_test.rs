//! Integration tests for playback-driven highlighting

use std::sync::mpsc;
use std::thread;

use readalong::highlighter::run_highlighter;
use readalong::{render_document, HighlightEffect, Highlighter, PlayerEvent, WordTimeIndex};

fn time_update(current_time: f64, duration: f64) -> PlayerEvent {
    PlayerEvent::TimeUpdate {
        current_time,
        duration,
    }
}

#[test]
fn continuous_playback_visits_every_word_once() {
    let document = render_document("Reading *along* with `code` and audio is fun.");
    let index = document.index();
    let word_count = index.len();
    let duration = 30.0;

    let (event_tx, event_rx) = mpsc::channel();
    let (effect_tx, effect_rx) = mpsc::channel();
    let worker = thread::spawn(move || run_highlighter(Highlighter::new(index), event_rx, effect_tx));

    let steps = 3000;
    for step in 0..=steps {
        let time = duration * step as f64 / steps as f64;
        event_tx.send(time_update(time, duration)).unwrap();
    }
    drop(event_tx);
    let highlighter = worker.join().unwrap();

    let effects: Vec<_> = effect_rx.iter().collect();
    let visited: Vec<usize> = effects
        .iter()
        .map(|effect| match effect {
            HighlightEffect::Highlight { current, .. } => *current,
            other => panic!("unexpected effect {:?}", other),
        })
        .collect();
    assert_eq!(visited, (0..word_count).collect::<Vec<_>>());

    // Each highlight hands over from the one before it
    for (i, effect) in effects.iter().enumerate() {
        let expected_previous = i.checked_sub(1);
        assert_eq!(
            *effect,
            HighlightEffect::Highlight {
                previous: expected_previous,
                current: i
            }
        );
    }

    // The end of playback is past the last word; the highlight stays on it
    assert_eq!(highlighter.current_word(), Some(word_count - 1));
}

#[test]
fn click_seeks_back_and_highlight_follows() {
    let index = WordTimeIndex::build(["alpha", "beta", "gamma", "delta"]);
    let mut highlighter = Highlighter::new(index);
    let duration = 20.0;

    highlighter.handle_event(time_update(19.0, duration));
    assert_eq!(highlighter.current_word(), Some(3));

    let seek = highlighter.handle_event(PlayerEvent::WordClicked { index: 1 });
    let Some(HighlightEffect::Seek { time }) = seek else {
        panic!("expected seek, got {:?}", seek);
    };

    assert_eq!(
        highlighter.handle_event(time_update(time, duration)),
        Some(HighlightEffect::Highlight {
            previous: Some(3),
            current: 1
        })
    );
}

#[test]
fn loading_media_then_playing() {
    let mut highlighter = Highlighter::new(WordTimeIndex::build(["one", "two"]));

    // Metadata not loaded yet: duration is NaN
    assert_eq!(highlighter.handle_event(time_update(0.0, f64::NAN)), None);
    assert_eq!(
        highlighter.handle_event(PlayerEvent::WordClicked { index: 1 }),
        None
    );

    highlighter.handle_event(PlayerEvent::DurationChanged { duration: 7.0 });
    match highlighter.handle_event(PlayerEvent::WordClicked { index: 1 }) {
        Some(HighlightEffect::Seek { time }) => assert!((time - 4.0).abs() < 1e-9),
        other => panic!("expected seek, got {:?}", other),
    }
}
