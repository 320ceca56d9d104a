//! Card runtime, action dispatch and the engine facade.
//!
//! ## Key Components
//!
//! - [`SwipeEngine`]: owns all mounted cards, the injected scheduler and
//!   the exclusivity registry, and sequences drag → classify → dwell →
//!   release → swipe-through | snap
//! - [`SwipeCard`]: the runtime state of one card
//! - [`SwipeEvent`]: the outbox entries; `Action` is the host's `onAction`
//! - [`ActionHandlers`] / [`ActionRouter`]: optional per-card callbacks
//!
//! Every commit, whatever its source, goes through one dispatch path that
//! emits the action and then resets the card to closed.

mod card;
mod dispatch;
mod runtime;

pub use card::{CardView, SwipeCard};
pub use dispatch::{ActionHandlers, ActionRouter, CommitSource, SwipeEvent};
pub use runtime::SwipeEngine;
