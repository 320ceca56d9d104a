//! Core types: card ids, zones, configuration and errors.
//!
//! Everything else in the crate builds on these. None of them carry
//! behavior beyond validation and naming.

pub mod config;
pub mod error;
pub mod id;
pub mod zone;

pub use config::{CardConfig, ZonePolicy};
pub use error::{ConfigError, Result, SwipeError};
pub use id::CardId;
pub use zone::Zone;
