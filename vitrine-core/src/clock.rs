//! Explicit deferred-completion timers.
//!
//! Every "do this after a fixed delay" in the system is a deadline owned by
//! its controller: `due` drains expired deadlines on each tick, and dropping
//! the owner drops its pending timers with it, so teardown cancels them.

/// Opaque handle for a scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A set of one-shot monotonic deadlines.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<(TimerId, u64)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot deadline `delay_ms` from `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, now_ms.saturating_add(delay_ms)));
        id
    }

    /// Cancel a pending deadline. Returns false if it already fired.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(t, _)| *t != id);
        self.pending.len() != before
    }

    /// Drain every deadline at or before `now_ms`, earliest first.
    pub fn due(&mut self, now_ms: u64) -> Vec<TimerId> {
        let mut fired: Vec<(TimerId, u64)> = Vec::new();
        self.pending.retain(|&(id, deadline)| {
            if deadline <= now_ms {
                fired.push((id, deadline));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|&(_, deadline)| deadline);
        fired.into_iter().map(|(id, _)| id).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut sched = Scheduler::new();
        let late = sched.schedule(0, 500);
        let early = sched.schedule(0, 100);
        assert!(sched.due(50).is_empty());
        assert_eq!(sched.due(600), vec![early, late]);
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn fires_exactly_once() {
        let mut sched = Scheduler::new();
        let id = sched.schedule(0, 100);
        assert_eq!(sched.due(100), vec![id]);
        assert!(sched.due(100).is_empty());
    }

    #[test]
    fn cancel_before_fire() {
        let mut sched = Scheduler::new();
        let id = sched.schedule(0, 100);
        assert!(sched.cancel(id));
        assert!(sched.due(1000).is_empty());
        assert!(!sched.cancel(id));
    }
}
