//! Timer injection.
//!
//! The engine never touches a real clock. It asks a [`DwellScheduler`] to
//! start and cancel one-shot timers, and the host reports fires back through
//! [`SwipeEngine::timer_fired`](crate::engine::SwipeEngine::timer_fired).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

use super::controller::DwellToken;

/// A scheduled dwell timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DwellTimer {
    pub card: CardId,
    pub token: DwellToken,
    pub armed_at_ms: u64,
    pub delay_ms: u64,
}

impl DwellTimer {
    /// Instant the timer fires.
    #[must_use]
    pub fn deadline_ms(&self) -> u64 {
        self.armed_at_ms.saturating_add(self.delay_ms)
    }
}

/// Timers expiring in one poll. Usually zero or one.
pub type DueTimers = SmallVec<[DwellTimer; 4]>;

/// One-shot timer service keyed by card.
///
/// Implementations must cancel synchronously: once `cancel` returns, the
/// timer must never be reported as fired.
pub trait DwellScheduler {
    /// Start a timer.
    fn schedule(&mut self, timer: DwellTimer);

    /// Cancel a timer. Unknown timers are ignored.
    fn cancel(&mut self, card: CardId, token: DwellToken);
}

/// A scheduler the engine can poll for expired timers.
pub trait PollScheduler: DwellScheduler {
    /// Remove and return every timer with `deadline <= now_ms`, earliest first.
    fn take_due(&mut self, now_ms: u64) -> DueTimers;

    /// Number of timers still pending.
    fn pending(&self) -> usize;

    /// Whether `card` has a pending timer.
    fn is_pending(&self, card: CardId) -> bool;
}

/// Deterministic, manually advanced scheduler.
///
/// Holds at most one timer per card: the dwell controller always cancels
/// before it starts, so a second entry for a card would be a bug.
///
/// ```
/// use rust_swipe::core::CardId;
/// use rust_swipe::dwell::{DwellTimer, DwellToken, DwellScheduler, PollScheduler, VirtualScheduler};
///
/// let mut scheduler = VirtualScheduler::new();
/// scheduler.schedule(DwellTimer {
///     card: CardId::new(1),
///     token: DwellToken(0),
///     armed_at_ms: 0,
///     delay_ms: 300,
/// });
///
/// assert!(scheduler.take_due(299).is_empty());
/// assert_eq!(scheduler.take_due(300).len(), 1);
/// assert_eq!(scheduler.pending(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VirtualScheduler {
    timers: FxHashMap<CardId, DwellTimer>,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending timer for `card`, if any.
    #[must_use]
    pub fn timer_for(&self, card: CardId) -> Option<&DwellTimer> {
        self.timers.get(&card)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.values().map(DwellTimer::deadline_ms).min()
    }
}

impl DwellScheduler for VirtualScheduler {
    fn schedule(&mut self, timer: DwellTimer) {
        let previous = self.timers.insert(timer.card, timer);
        debug_assert!(
            previous.is_none(),
            "{} already had a pending dwell timer {:?}",
            timer.card,
            previous
        );
    }

    fn cancel(&mut self, card: CardId, token: DwellToken) {
        if self.timers.get(&card).is_some_and(|t| t.token == token) {
            self.timers.remove(&card);
        }
    }
}

impl PollScheduler for VirtualScheduler {
    fn take_due(&mut self, now_ms: u64) -> DueTimers {
        let mut due: DueTimers = self
            .timers
            .values()
            .filter(|t| t.deadline_ms() <= now_ms)
            .copied()
            .collect();

        due.sort_by_key(|t| (t.deadline_ms(), t.card));
        for timer in &due {
            self.timers.remove(&timer.card);
        }
        due
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }

    fn is_pending(&self, card: CardId) -> bool {
        self.timers.contains_key(&card)
    }
}

/// Scheduler that drops every timer. Dwell never commits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScheduler;

impl DwellScheduler for NullScheduler {
    fn schedule(&mut self, _timer: DwellTimer) {}

    fn cancel(&mut self, _card: CardId, _token: DwellToken) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(card: u32, token: u64, armed_at_ms: u64) -> DwellTimer {
        DwellTimer {
            card: CardId(card),
            token: DwellToken(token),
            armed_at_ms,
            delay_ms: 300,
        }
    }

    #[test]
    fn test_due_in_deadline_order() {
        let mut s = VirtualScheduler::new();
        s.schedule(timer(1, 0, 50));
        s.schedule(timer(2, 0, 0));
        s.schedule(timer(3, 0, 500));

        let due = s.take_due(400);
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].card, CardId(2));
        assert_eq!(due[1].card, CardId(1));
        assert_eq!(s.pending(), 1);
        assert_eq!(s.next_deadline(), Some(800));
    }

    #[test]
    fn test_cancel_removes_matching_token() {
        let mut s = VirtualScheduler::new();
        s.schedule(timer(1, 4, 0));

        s.cancel(CardId(1), DwellToken(3));
        assert!(s.is_pending(CardId(1)));

        s.cancel(CardId(1), DwellToken(4));
        assert!(!s.is_pending(CardId(1)));
        assert!(s.take_due(1_000).is_empty());
    }

    #[test]
    fn test_deadline_saturates() {
        let t = DwellTimer {
            card: CardId(1),
            token: DwellToken(0),
            armed_at_ms: u64::MAX - 1,
            delay_ms: 300,
        };
        assert_eq!(t.deadline_ms(), u64::MAX);
    }

    #[test]
    fn test_null_scheduler_is_inert() {
        let mut s = NullScheduler;
        s.schedule(timer(1, 0, 0));
        s.cancel(CardId(1), DwellToken(0));
    }
}
