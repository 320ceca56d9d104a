//! Gesture interpretation: input normalization, drag tracking and the
//! two release-time decisions.
//!
//! On release the swipe-through detector runs first. Only when it declines
//! does the snap controller pick a resting position.
//!
//! ```
//! use rust_swipe::core::{CardConfig, Zone};
//! use rust_swipe::geometry::Thresholds;
//! use rust_swipe::gesture::{snap, swipe_through, DragTracker};
//!
//! let config = CardConfig::default();
//! let thresholds = Thresholds::compute(300.0, &config);
//!
//! let mut drag = DragTracker::new();
//! drag.start(300.0);
//! let offset = drag.offset_for(220.0, &thresholds).unwrap();
//! let release = drag.finish(220.0).unwrap();
//!
//! assert_eq!(swipe_through::detect(offset, release.velocity, &thresholds, &config.policy), None);
//! assert_eq!(snap::snap(offset, &thresholds, &config.policy).zone, Zone::Teil);
//! ```

pub mod drag;
pub mod pointer;
pub mod snap;
pub mod swipe_through;

pub use drag::{DragTracker, Release};
pub use pointer::{MouseKind, PointerEvent, PointerPhase, PointerSource, RawInput, TouchKind};
pub use snap::Snap;
