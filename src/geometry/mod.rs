//! Pixel-space geometry: thresholds and zone classification.
//!
//! Everything here is a pure function of the card width and its
//! [`CardConfig`](crate::core::CardConfig). Offsets are signed: negative
//! values are left of rest, positive values right of rest.
//!
//! ## Example
//!
//! ```
//! use rust_swipe::core::{CardConfig, Zone};
//! use rust_swipe::geometry::{classify, Thresholds};
//!
//! let config = CardConfig::default();
//! let thresholds = Thresholds::compute(300.0, &config);
//!
//! assert_eq!(thresholds.teil_px, 75.0);
//! assert_eq!(thresholds.alles_px, 150.0);
//! assert_eq!(classify(-160.0, &thresholds, &config.policy), Zone::Alles);
//! assert_eq!(classify(0.0, &thresholds, &config.policy), Zone::None);
//! ```

mod classify;
mod thresholds;

pub use classify::classify;
pub use thresholds::Thresholds;
