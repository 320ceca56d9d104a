//! # rust-swipe
//!
//! A gesture engine for swipe-to-act list cards.
//!
//! Swiping a card left reveals `teil` (partial withdrawal) and then `alles`
//! (withdraw everything), swiping right reveals `edit`. An action commits
//! when the user holds a zone for the dwell time, swipes through past the
//! outer stop, or taps the revealed action element directly.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: No DOM, real timers or threads. The host feeds
//!    normalized pointer events and timestamps and reads events back.
//!
//! 2. **Clock-Free State Machines**: The dwell controller returns timer
//!    commands instead of calling a timer, and every fire carries a token.
//!    A stale fire can never commit.
//!
//! 3. **Injected Policies**: The timer service and the single-open-card
//!    registry are injected, so tests swap in a virtual clock or switch
//!    exclusivity off.
//!
//! ## Modules
//!
//! - `core`: Card ids, zones, configuration, errors
//! - `geometry`: Threshold calculator and zone classifier
//! - `gesture`: Input normalization, drag tracking, swipe-through and snap
//! - `dwell`: Dwell state machine, scheduler trait, progress
//! - `exclusivity`: Single-open-card registry
//! - `engine`: Card runtime, action dispatch and the `SwipeEngine` facade

pub mod core;
pub mod dwell;
pub mod engine;
pub mod exclusivity;
pub mod geometry;
pub mod gesture;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CardConfig, CardId, ConfigError, SwipeError, Zone, ZonePolicy};

pub use crate::geometry::{classify, Thresholds};

pub use crate::gesture::{DragTracker, PointerEvent, PointerPhase, RawInput, Snap};

pub use crate::dwell::{
    DwellCommand, DwellController, DwellProgress, DwellScheduler, DwellTimer, DwellToken,
    DwellTokens, NullScheduler, PollScheduler, VirtualScheduler,
};

pub use crate::exclusivity::{NoExclusivity, OpenCardRegistry, SingleOpenRegistry};

pub use crate::engine::{
    ActionHandlers, ActionRouter, CardView, CommitSource, SwipeCard, SwipeEngine, SwipeEvent,
};
