//! Dwell-to-commit: holding a card inside an action zone for the configured
//! dwell time commits that action without a release.
//!
//! ## Key Components
//!
//! - [`DwellController`]: per-card `Idle → Armed → Committed | Cancelled`
//!   machine, clock-free
//! - [`DwellCommand`]: timer and progress side effects of a transition
//! - [`DwellTokens`]: engine-wide token issuer
//! - [`DwellScheduler`]: injected one-shot timer service
//! - [`VirtualScheduler`]: deterministic scheduler for tests and frame-driven hosts
//! - [`DwellProgress`]: linear 0→1 progress for the ring indicator
//!
//! ## Example
//!
//! ```
//! use rust_swipe::core::Zone;
//! use rust_swipe::dwell::{DwellCommand, DwellController, DwellTokens};
//!
//! let mut tokens = DwellTokens::new();
//! let mut dwell = DwellController::new(300);
//!
//! let commands = dwell.on_zone(Zone::Alles, 0, &mut tokens);
//! let token = match commands[0] {
//!     DwellCommand::Start { token, .. } => token,
//!     DwellCommand::Cancel { .. } => unreachable!(),
//! };
//!
//! assert_eq!(dwell.progress(150).unwrap().fraction, 0.5);
//! assert_eq!(dwell.fire(token), Some(Zone::Alles));
//! ```

mod controller;
mod progress;
mod scheduler;

pub use controller::{
    DwellCommand, DwellCommands, DwellController, DwellState, DwellToken, DwellTokens,
};
pub use progress::DwellProgress;
pub use scheduler::{DueTimers, DwellScheduler, DwellTimer, NullScheduler, PollScheduler, VirtualScheduler};
