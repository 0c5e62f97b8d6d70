//! Easing curves shared by the animation controllers.
//!
//! `ease_out_quart`: 1 - (1 - t)^4 — the counter ramp.
//! `ease_out_cubic`: 1 - (1 - t)^3 — a close stand-in for the
//! `cubic-bezier(0.16, 1, 0.3, 1)` curve the reveal/slide animations use.
//! Inputs are clamped to [0, 1], so outputs are too.

pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear progress of `elapsed_ms` across `duration_ms`, clamped to [0, 1].
pub fn progress(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed_ms as f64 / duration_ms as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(ease_out_quart(-2.0), 0.0);
        assert_eq!(ease_out_quart(3.0), 1.0);
    }

    #[test]
    fn monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_out_quart(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn progress_clamps_and_guards_zero() {
        assert_eq!(progress(0, 550), 0.0);
        assert_eq!(progress(275, 550), 0.5);
        assert_eq!(progress(9999, 550), 1.0);
        assert_eq!(progress(0, 0), 1.0);
    }
}
