//! Dwell state machine.
//!
//! `Idle → Armed(zone) → Committed | Cancelled`. The controller does not own
//! a timer. Each transition returns the [`DwellCommand`]s the caller must
//! apply to its scheduler, so the machine can be tested without any clock.
//!
//! Every arm draws a fresh [`DwellToken`] from a [`DwellTokens`] issuer
//! shared by all controllers of an engine. A timer fire only commits when it
//! carries the token of the current arm, so a fire that raced a cancel is
//! rejected instead of committing against a reset or remounted card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Zone;

use super::progress::DwellProgress;

/// Identifies one arming of one controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DwellToken(pub u64);

impl std::fmt::Display for DwellToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dwell({})", self.0)
    }
}

/// Monotonic token issuer.
///
/// Tokens are unique per issuer, not per controller: a card id that is
/// unmounted and mounted again never sees a token from its earlier life.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DwellTokens {
    next: u64,
}

impl DwellTokens {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next token.
    pub fn issue(&mut self) -> DwellToken {
        let token = DwellToken(self.next);
        self.next += 1;
        token
    }
}

/// Current dwell state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DwellState {
    #[default]
    Idle,
    Armed {
        zone: Zone,
        token: DwellToken,
        started_at_ms: u64,
    },
}

/// Side effects a transition asks for, in the order they must be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DwellCommand {
    /// Cancel the timer for `token` and clear `zone`'s progress indicator.
    Cancel { zone: Zone, token: DwellToken },
    /// Start a one-shot timer and a 0→100 % progress indicator on `zone`.
    Start {
        zone: Zone,
        token: DwellToken,
        delay_ms: u64,
    },
}

/// Commands produced by one transition. At most a cancel and a start.
pub type DwellCommands = SmallVec<[DwellCommand; 2]>;

/// Per-card dwell controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DwellController {
    dwell_time_ms: u64,
    state: DwellState,
}

impl DwellController {
    #[must_use]
    pub fn new(dwell_time_ms: u64) -> Self {
        Self {
            dwell_time_ms,
            state: DwellState::Idle,
        }
    }

    #[must_use]
    pub fn dwell_time_ms(&self) -> u64 {
        self.dwell_time_ms
    }

    #[must_use]
    pub fn state(&self) -> DwellState {
        self.state
    }

    /// Zone currently armed, if any.
    #[must_use]
    pub fn armed_zone(&self) -> Option<Zone> {
        match self.state {
            DwellState::Armed { zone, .. } => Some(zone),
            DwellState::Idle => None,
        }
    }

    /// Token of the pending timer, if any.
    #[must_use]
    pub fn armed_token(&self) -> Option<DwellToken> {
        match self.state {
            DwellState::Armed { token, .. } => Some(token),
            DwellState::Idle => None,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, DwellState::Armed { .. })
    }

    /// Zone-change notification from the classifier.
    ///
    /// No-op when `zone` is already armed (or `None` while idle). Otherwise
    /// cancels the current arm and, for an action zone, starts a new one.
    pub fn on_zone(&mut self, zone: Zone, now_ms: u64, tokens: &mut DwellTokens) -> DwellCommands {
        let current = self.armed_zone().unwrap_or(Zone::None);
        if current == zone {
            return DwellCommands::new();
        }
        self.rearm(zone, now_ms, tokens)
    }

    /// Cancel-then-maybe-start, unconditionally.
    ///
    /// Used when a card settles at a resting stop: the dwell restarts even
    /// if the same zone was armed during the drag.
    pub fn rearm(&mut self, zone: Zone, now_ms: u64, tokens: &mut DwellTokens) -> DwellCommands {
        let mut commands = self.cancel();

        if zone.is_action() {
            let token = tokens.issue();
            self.state = DwellState::Armed {
                zone,
                token,
                started_at_ms: now_ms,
            };
            commands.push(DwellCommand::Start {
                zone,
                token,
                delay_ms: self.dwell_time_ms,
            });
        }

        commands
    }

    /// Drop the current arm without committing.
    pub fn cancel(&mut self) -> DwellCommands {
        let mut commands = DwellCommands::new();
        if let DwellState::Armed { zone, token, .. } = self.state {
            commands.push(DwellCommand::Cancel { zone, token });
        }
        self.state = DwellState::Idle;
        commands
    }

    /// Timer callback.
    ///
    /// Returns the committed zone when `token` matches the current arm and
    /// returns to `Idle`. Any other token is stale and changes nothing.
    pub fn fire(&mut self, token: DwellToken) -> Option<Zone> {
        match self.state {
            DwellState::Armed {
                zone, token: armed, ..
            } if armed == token => {
                self.state = DwellState::Idle;
                Some(zone)
            }
            _ => None,
        }
    }

    /// Progress of the current arm at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> Option<DwellProgress> {
        match self.state {
            DwellState::Armed {
                zone,
                started_at_ms,
                ..
            } => Some(DwellProgress::new(zone, started_at_ms, self.dwell_time_ms).at(now_ms)),
            DwellState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let dwell = DwellController::new(300);
        assert_eq!(dwell.state(), DwellState::Idle);
        assert!(dwell.progress(0).is_none());
    }

    #[test]
    fn test_entering_zone_arms() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        let commands = dwell.on_zone(Zone::Teil, 10, &mut tokens);

        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            DwellCommand::Start {
                zone: Zone::Teil,
                delay_ms: 300,
                ..
            }
        ));
        assert_eq!(dwell.armed_zone(), Some(Zone::Teil));
    }

    #[test]
    fn test_same_zone_is_noop() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        dwell.on_zone(Zone::Teil, 0, &mut tokens);
        let token = dwell.armed_token();

        assert!(dwell.on_zone(Zone::Teil, 50, &mut tokens).is_empty());
        assert_eq!(dwell.armed_token(), token);
        assert!(DwellController::new(300)
            .on_zone(Zone::None, 0, &mut tokens)
            .is_empty());
    }

    #[test]
    fn test_zone_change_cancels_before_start() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        dwell.on_zone(Zone::Teil, 0, &mut tokens);
        let first = dwell.armed_token().unwrap();

        let commands = dwell.on_zone(Zone::Alles, 100, &mut tokens);
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0],
            DwellCommand::Cancel {
                zone: Zone::Teil,
                token: first
            }
        );
        assert!(matches!(
            commands[1],
            DwellCommand::Start { zone: Zone::Alles, .. }
        ));
        assert_ne!(dwell.armed_token(), Some(first));
    }

    #[test]
    fn test_leaving_to_none_cancels() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        dwell.on_zone(Zone::Edit, 0, &mut tokens);
        let commands = dwell.on_zone(Zone::None, 20, &mut tokens);

        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], DwellCommand::Cancel { zone: Zone::Edit, .. }));
        assert!(!dwell.is_armed());
    }

    #[test]
    fn test_rearm_same_zone_restarts() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        dwell.on_zone(Zone::Teil, 0, &mut tokens);
        let first = dwell.armed_token().unwrap();

        let commands = dwell.rearm(Zone::Teil, 120, &mut tokens);
        assert_eq!(commands.len(), 2);
        assert_ne!(dwell.armed_token(), Some(first));
        assert_eq!(dwell.progress(120).unwrap().fraction, 0.0);
    }

    #[test]
    fn test_fire_commits_current_token() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        dwell.on_zone(Zone::Alles, 0, &mut tokens);
        let token = dwell.armed_token().unwrap();

        assert_eq!(dwell.fire(token), Some(Zone::Alles));
        assert!(!dwell.is_armed());
        // A second fire with the same token is stale
        assert_eq!(dwell.fire(token), None);
    }

    #[test]
    fn test_stale_fire_is_ignored() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        dwell.on_zone(Zone::Teil, 0, &mut tokens);
        let stale = dwell.armed_token().unwrap();
        dwell.on_zone(Zone::Alles, 10, &mut tokens);

        assert_eq!(dwell.fire(stale), None);
        assert_eq!(dwell.armed_zone(), Some(Zone::Alles));
    }

    #[test]
    fn test_fire_after_cancel_is_ignored() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        dwell.on_zone(Zone::Teil, 0, &mut tokens);
        let token = dwell.armed_token().unwrap();
        dwell.cancel();

        assert_eq!(dwell.fire(token), None);
    }

    #[test]
    fn test_tokens_never_repeat() {
        let mut tokens = DwellTokens::new();
        let mut dwell = DwellController::new(300);
        let mut seen = Vec::new();
        for i in 0..10 {
            let zone = if i % 2 == 0 { Zone::Teil } else { Zone::Edit };
            dwell.on_zone(zone, i, &mut tokens);
            seen.push(dwell.armed_token().unwrap());
        }
        let mut unique = seen.clone();
        unique.dedup();
        assert_eq!(seen, unique);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_shared_issuer_never_reuses_tokens() {
        let mut tokens = DwellTokens::new();
        let mut first = DwellController::new(300);
        first.on_zone(Zone::Teil, 0, &mut tokens);
        let old = first.armed_token().unwrap();

        // A fresh controller for the same card draws from the same issuer
        let mut second = DwellController::new(300);
        second.on_zone(Zone::Teil, 10, &mut tokens);

        assert_ne!(second.armed_token(), Some(old));
        assert_eq!(second.fire(old), None);
        assert!(second.is_armed());
    }
}
