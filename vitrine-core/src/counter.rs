//! Animated number counters, armed once when their section scrolls into
//! view and ramped with an ease-out-quart curve.

use crate::content::Stat;
use crate::easing;

/// Intersection ratio at which the bank arms.
pub const ARM_THRESHOLD: f64 = 0.3;
/// Delay between successive counters starting.
pub const STAGGER_MS: u64 = 350;
/// Ramp duration for large targets (> 1000).
pub const SLOW_MS: u64 = 2_500;
/// Ramp duration for small targets.
pub const FAST_MS: u64 = 1_800;

#[derive(Debug, Clone)]
struct Counter {
    target: u64,
    suffix: String,
}

#[derive(Debug)]
pub struct CounterBank {
    counters: Vec<Counter>,
    armed_at: Option<u64>,
}

impl CounterBank {
    pub fn new(stats: &[Stat]) -> Self {
        Self {
            counters: stats
                .iter()
                .map(|s| Counter {
                    target: s.target,
                    suffix: s.suffix.clone(),
                })
                .collect(),
            armed_at: None,
        }
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// One-shot: the first call starts the ramps, later calls are no-ops.
    pub fn arm(&mut self, now_ms: u64) -> bool {
        if self.armed_at.is_some() {
            return false;
        }
        self.armed_at = Some(now_ms);
        true
    }

    fn duration_for(target: u64) -> u64 {
        if target > 1_000 {
            SLOW_MS
        } else {
            FAST_MS
        }
    }

    /// Current value of counter `index`: zero until its staggered start,
    /// eased while ramping, exactly the target afterward.
    pub fn value(&self, now_ms: u64, index: usize) -> u64 {
        let counter = &self.counters[index];
        let Some(armed_at) = self.armed_at else {
            return 0;
        };
        let start = armed_at + index as u64 * STAGGER_MS;
        let elapsed = now_ms.saturating_sub(start);
        if now_ms < start {
            return 0;
        }
        let duration = Self::duration_for(counter.target);
        if elapsed >= duration {
            return counter.target;
        }
        let eased = easing::ease_out_quart(easing::progress(elapsed, duration));
        (eased * counter.target as f64).round() as u64
    }

    /// Rendered value with thousands separators and suffix.
    pub fn display(&self, now_ms: u64, index: usize) -> String {
        format!(
            "{}{}",
            format_number(self.value(now_ms, index)),
            self.counters[index].suffix
        )
    }

    /// True once every counter has landed on its target.
    pub fn settled(&self, now_ms: u64) -> bool {
        self.armed_at.is_some()
            && (0..self.counters.len()).all(|i| self.value(now_ms, i) == self.counters[i].target)
    }
}

/// Comma thousands separators, e.g. 12400 -> "12,400".
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Vec<Stat> {
        vec![
            Stat { label: "Projects".into(), target: 120, suffix: "+".into() },
            Stat { label: "Clients".into(), target: 48, suffix: String::new() },
            Stat { label: "Coffee".into(), target: 12_400, suffix: "+".into() },
        ]
    }

    #[test]
    fn unarmed_counters_read_zero() {
        let bank = CounterBank::new(&stats());
        assert_eq!(bank.value(5_000, 0), 0);
        assert_eq!(bank.display(5_000, 2), "0+");
    }

    #[test]
    fn arming_is_one_shot() {
        let mut bank = CounterBank::new(&stats());
        assert!(bank.arm(1_000));
        assert!(!bank.arm(9_000));
        // The second arm must not restart the ramp.
        assert_eq!(bank.value(1_000 + FAST_MS, 0), 120);
    }

    #[test]
    fn counters_start_staggered() {
        let mut bank = CounterBank::new(&stats());
        bank.arm(1_000);
        assert_eq!(bank.value(1_000, 1), 0);
        assert_eq!(bank.value(1_000 + STAGGER_MS - 1, 1), 0);
        assert!(bank.value(1_000 + STAGGER_MS + 200, 1) > 0);
    }

    #[test]
    fn large_targets_ramp_longer() {
        assert_eq!(CounterBank::duration_for(120), FAST_MS);
        assert_eq!(CounterBank::duration_for(1_000), FAST_MS);
        assert_eq!(CounterBank::duration_for(12_400), SLOW_MS);
    }

    #[test]
    fn lands_exactly_on_target() {
        let mut bank = CounterBank::new(&stats());
        bank.arm(0);
        let end = 2 * STAGGER_MS + SLOW_MS;
        assert_eq!(bank.value(end, 2), 12_400);
        assert_eq!(bank.display(end, 2), "12,400+");
        assert!(bank.settled(end));
    }

    #[test]
    fn ramp_is_monotonic() {
        let mut bank = CounterBank::new(&stats());
        bank.arm(0);
        let mut prev = 0;
        for t in (0..FAST_MS).step_by(50) {
            let v = bank.value(t, 0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(12_400), "12,400");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}
