//! Virtual-time timer queue.
//!
//! The companion never sleeps on its own. Callers schedule payloads against
//! a virtual clock and whoever owns real time (a tokio loop, or a test)
//! advances it. Cancelling a timer removes it outright, so a cancelled
//! callback can never fire against torn-down state.

use std::time::Duration;

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    due: Duration,
    payload: T,
}

/// Pending timers ordered by due time, ties broken by scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Virtual time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            payload,
        });
        id
    }

    /// Returns whether the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Cancel every pending timer whose payload matches; returns how many.
    pub fn cancel_matching(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !pred(&p.payload));
        before - self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn any_pending(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.pending.iter().any(|p| pred(&p.payload))
    }

    /// Time from now until the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due.saturating_sub(self.now))
            .min()
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;
        let timer = self.pending.swap_remove(idx);
        self.now = self.now.max(timer.due);
        Some((timer.id, timer.payload))
    }

    /// Move the clock forward without firing anything.
    pub fn advance_clock_to(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_pop_due_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(300), "c");
        q.schedule(ms(100), "a");
        q.schedule(ms(200), "b");

        let fired: Vec<_> = std::iter::from_fn(|| q.pop_due(ms(1000)).map(|(_, p)| p)).collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
        assert_eq!(q.now(), ms(300));
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(50), 1);
        q.schedule(ms(50), 2);
        assert_eq!(q.pop_due(ms(50)).map(|(_, p)| p), Some(1));
        assert_eq!(q.pop_due(ms(50)).map(|(_, p)| p), Some(2));
    }

    #[test]
    fn test_not_yet_due_is_kept() {
        let mut q = TimerQueue::new();
        q.schedule(ms(500), ());
        assert!(q.pop_due(ms(499)).is_none());
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_due(), Some(ms(500)));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut q = TimerQueue::new();
        let id = q.schedule(ms(10), "gone");
        assert!(q.cancel(id));
        assert!(!q.cancel(id));
        assert!(q.pop_due(ms(100)).is_none());
    }

    #[test]
    fn test_cancel_matching() {
        let mut q = TimerQueue::new();
        q.schedule(ms(10), 1);
        q.schedule(ms(20), 2);
        q.schedule(ms(30), 3);
        assert_eq!(q.cancel_matching(|v| *v % 2 == 1), 2);
        assert!(q.any_pending(|v| *v == 2));
        assert!(!q.any_pending(|v| *v == 1));
    }

    #[test]
    fn test_next_due_is_relative_to_now() {
        let mut q = TimerQueue::new();
        q.advance_clock_to(ms(1000));
        q.schedule(ms(250), ());
        assert_eq!(q.next_due(), Some(ms(250)));
        q.advance_clock_to(ms(1200));
        assert_eq!(q.next_due(), Some(ms(50)));
    }
}
