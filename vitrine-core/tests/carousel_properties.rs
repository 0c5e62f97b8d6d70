//! Property tests for carousel invariants.
//!
//! Uses proptest to verify:
//! 1. Index bounds — the active index never leaves 0..count under any
//!    input sequence
//! 2. Single flight — at most one transition animates at a time, and a
//!    started transition always completes after its fixed duration
//! 3. Visual sanity — opacities stay in 0..=1 and exactly one slide is
//!    marked active
//! 4. Drag thresholds — sub-threshold drags never change the index

use proptest::prelude::*;
use vitrine_core::carousel::{Carousel, CarouselEvent, DRAG_THRESHOLD, TRANSITION_MS};

/// One user-level input to replay against the controller.
#[derive(Debug, Clone)]
enum Op {
    Next,
    Prev,
    Select(usize),
    Drag(f64),
    Wait(u64),
    Resize,
}

fn arb_op(count: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        (0..count).prop_map(Op::Select),
        (-120.0..120.0_f64).prop_map(Op::Drag),
        (0..800_u64).prop_map(Op::Wait),
        Just(Op::Resize),
    ]
}

fn apply(carousel: &mut Carousel, now: &mut u64, op: &Op) -> Vec<CarouselEvent> {
    match op {
        Op::Next => {
            carousel.next(*now);
        }
        Op::Prev => {
            carousel.prev(*now);
        }
        Op::Select(i) => {
            carousel.select(*now, *i);
        }
        Op::Drag(dx) => {
            carousel.drag_start(0.0);
            carousel.drag_move(*dx);
            carousel.drag_end(*now);
        }
        Op::Wait(ms) => {
            *now += ms;
        }
        Op::Resize => carousel.on_resize(),
    }
    carousel.advance(*now)
}

proptest! {
    /// The active index stays in bounds under arbitrary input sequences.
    #[test]
    fn index_never_leaves_bounds(
        count in 1..8_usize,
        ops in prop::collection::vec(arb_op(8), 0..60),
    ) {
        let mut carousel = Carousel::new(0, count).unwrap();
        let mut now = 0_u64;
        for op in &ops {
            apply(&mut carousel, &mut now, op);
            prop_assert!(carousel.current() < count);
        }
    }

    /// Every started transition finishes exactly once, and never before
    /// its fixed duration elapses.
    #[test]
    fn transitions_always_complete(
        count in 2..8_usize,
        ops in prop::collection::vec(arb_op(8), 1..60),
    ) {
        let mut carousel = Carousel::new(0, count).unwrap();
        let mut now = 0_u64;
        let mut started = 0_usize;
        let mut finished = 0_usize;
        for op in &ops {
            let was_animating = carousel.is_animating();
            let events = apply(&mut carousel, &mut now, op);
            if !was_animating && carousel.is_animating() {
                started += 1;
            }
            finished += events
                .iter()
                .filter(|e| matches!(e, CarouselEvent::TransitionFinished { .. }))
                .count();
            prop_assert!(finished <= started);
        }
        // Drain whatever is still in flight.
        now += TRANSITION_MS + 1;
        finished += carousel
            .advance(now)
            .iter()
            .filter(|e| matches!(e, CarouselEvent::TransitionFinished { .. }))
            .count();
        prop_assert_eq!(started, finished);
        prop_assert!(!carousel.is_animating());
    }

    /// Visual state stays well formed at every instant.
    #[test]
    fn visuals_stay_sane(
        count in 1..8_usize,
        ops in prop::collection::vec(arb_op(8), 0..40),
        probe in 0..700_u64,
    ) {
        let mut carousel = Carousel::new(0, count).unwrap();
        let mut now = 0_u64;
        for op in &ops {
            apply(&mut carousel, &mut now, op);
        }
        let visual = carousel.visual_state(now + probe);
        prop_assert_eq!(visual.slides.len(), count);
        prop_assert_eq!(
            visual.slides.iter().filter(|s| s.active).count(),
            1,
            "exactly one indicator is active"
        );
        for slide in &visual.slides {
            prop_assert!((0.0..=1.0).contains(&slide.opacity));
        }
        prop_assert!(visual.track_height >= 100.0);
    }

    /// Drags below the threshold never move the carousel.
    #[test]
    fn small_drags_are_ignored(
        count in 2..8_usize,
        dx in -49.9..49.9_f64,
    ) {
        let mut carousel = Carousel::new(0, count).unwrap();
        let before = carousel.current();
        carousel.drag_start(200.0);
        carousel.drag_move(200.0 + dx);
        carousel.drag_end(0);
        carousel.advance(0);
        prop_assert_eq!(carousel.current(), before);
        prop_assert!(dx.abs() < DRAG_THRESHOLD);
    }
}

#[test]
fn replayed_session_lands_where_expected() {
    // A deterministic end-to-end session: advance twice, wrap backward
    // from 0, then jump straight to the last slide.
    let mut carousel = Carousel::new(0, 4).unwrap();
    let mut now = 0_u64;

    carousel.next(now);
    now += TRANSITION_MS;
    carousel.advance(now);
    assert_eq!(carousel.current(), 1);

    carousel.next(now);
    now += TRANSITION_MS;
    carousel.advance(now);
    assert_eq!(carousel.current(), 2);

    carousel.select(now, 0);
    now += TRANSITION_MS;
    carousel.advance(now);
    carousel.prev(now);
    now += TRANSITION_MS;
    carousel.advance(now);
    assert_eq!(carousel.current(), 3, "prev from 0 wraps to the last slide");

    carousel.select(now, 3);
    assert!(!carousel.is_animating(), "selecting the current slide is a no-op");
}
