//! Integration tests for SharedSequencer and EventQueue

mod common;
use common::*;

use indicator_sequencer::{
    EventQueue, IndicatorColor, LightEvent, LightSequencer, Mode, QueueError, SequencerError,
    SharedSequencer,
};

static SEQUENCER: SharedSequencer<MockIndicator> = SharedSequencer::new();

#[test_log::test]
fn static_sequencer_is_driven_through_entry_points() {
    assert_eq!(SEQUENCER.on_tick(), Err(SequencerError::NotInstalled));

    SEQUENCER.install(LightSequencer::new(MockIndicator::new()));
    SEQUENCER.on_button_edge().unwrap();
    for _ in 0..5000 {
        SEQUENCER.on_tick().unwrap();
    }
    assert_eq!(SEQUENCER.state().map(|s| s.mode), Some(Mode::Cycling));

    let sequencer = SEQUENCER.take().unwrap();
    assert_eq!(
        sequencer.indicator().last(),
        Some(Command::Set(IndicatorColor::Red))
    );
}

#[test_log::test]
fn concurrent_sources_never_observe_half_done_transitions() {
    let shared = SharedSequencer::new();
    shared.install(LightSequencer::new(MockIndicator::new()));

    std::thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..20_000 {
                shared.on_tick().unwrap();
            }
        });
        s.spawn(|| {
            for _ in 0..200 {
                shared.on_button_edge().unwrap();
                std::thread::yield_now();
            }
        });
        s.spawn(|| {
            for _ in 0..5_000 {
                let consistent = shared
                    .with(|sequencer| {
                        let state = sequencer.state();
                        let last = sequencer.indicator().last();
                        match state.mode {
                            Mode::Idle => state.elapsed_ms == 0 && last == Some(Command::Off),
                            Mode::HoldOn => last == Some(Command::Set(IndicatorColor::Red)),
                            Mode::Cycling => state.cycle_index < 3,
                        }
                    })
                    .unwrap();
                assert!(consistent);
            }
        });
    });

    // An even number of edges leaves the sequencer idle.
    let sequencer = shared.take().unwrap();
    assert_eq!(sequencer.mode(), Mode::Idle);
    assert_eq!(sequencer.indicator().last(), Some(Command::Off));
}

#[test]
fn concurrent_ticks_are_all_counted() {
    let shared = SharedSequencer::new();
    shared.install(LightSequencer::new(MockIndicator::new()));
    shared.on_button_edge().unwrap();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..1000 {
                    shared.on_tick().unwrap();
                }
            });
        }
    });

    let state = shared.state().unwrap();
    assert_eq!(state.mode, Mode::HoldOn);
    assert_eq!(state.elapsed_ms, 4000);
}

#[test]
fn queue_defers_events_to_main_loop() {
    let queue = EventQueue::<16>::new();
    let mut sequencer = LightSequencer::new(MockIndicator::new());

    queue.post(LightEvent::ButtonEdge).unwrap();
    for _ in 0..10 {
        queue.post(LightEvent::Tick).unwrap();
    }
    assert_eq!(sequencer.mode(), Mode::Idle);

    assert_eq!(queue.dispatch(&mut sequencer), 11);
    assert!(queue.is_empty());
    assert_eq!(sequencer.mode(), Mode::HoldOn);
    assert_eq!(sequencer.state().elapsed_ms, 10);
}

#[test]
fn queue_preserves_order_between_edges_and_ticks() {
    let queue = EventQueue::<8>::new();
    let mut sequencer = LightSequencer::new(MockIndicator::new());

    // Tick before the edge is an idle tick and must not count.
    queue.post(LightEvent::Tick).unwrap();
    queue.post(LightEvent::ButtonEdge).unwrap();
    queue.post(LightEvent::Tick).unwrap();
    queue.dispatch(&mut sequencer);

    assert_eq!(sequencer.state().elapsed_ms, 1);
}

#[test]
fn queue_overflow_reports_dropped_events() {
    let queue = EventQueue::<4>::new();
    for _ in 0..4 {
        queue.post(LightEvent::Tick).unwrap();
    }
    assert_eq!(
        queue.post(LightEvent::Tick),
        Err(QueueError::Full(LightEvent::Tick))
    );
    assert!(queue.post(LightEvent::ButtonEdge).is_err());
    assert_eq!(queue.dropped(), 2);

    let mut sequencer = LightSequencer::new(MockIndicator::new());
    assert_eq!(queue.dispatch(&mut sequencer), 4);
    assert_eq!(sequencer.mode(), Mode::Idle);
}

#[test]
fn queue_accepts_posts_from_other_threads() {
    let queue = EventQueue::<256>::new();
    let mut sequencer = LightSequencer::new(MockIndicator::new());
    queue.post(LightEvent::ButtonEdge).unwrap();
    queue.dispatch(&mut sequencer);

    std::thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..100 {
                queue.post(LightEvent::Tick).unwrap();
            }
        });
    });

    assert_eq!(queue.len(), 100);
    queue.dispatch(&mut sequencer);
    assert_eq!(sequencer.state().elapsed_ms, 100);
}
