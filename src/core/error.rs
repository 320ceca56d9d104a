//! Error types.
//!
//! The gesture engine itself has no recoverable failures: stale timers and
//! double-open cards are prevented structurally. What remains are
//! developer-facing mistakes (bad configuration, unknown card ids) and
//! they fail fast.

use thiserror::Error;

use super::id::CardId;
use super::zone::Zone;

/// Invalid [`CardConfig`](super::CardConfig) or [`ZonePolicy`](super::ZonePolicy).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A ratio is outside the open interval (0, 1) or not finite.
    #[error("{field} must be within (0, 1), got {value}")]
    RatioOutOfRange { field: &'static str, value: f32 },

    /// The partial stop would sit at or beyond the full stop.
    #[error("left_partial_ratio ({partial}) must be below left_full_ratio ({full})")]
    PartialNotBelowFull { partial: f32, full: f32 },

    /// Swipe-through bounds must lie beyond the action stops.
    #[error("swipe_through_multiplier must be greater than 1, got {0}")]
    MultiplierTooSmall(f32),

    /// A dwell time of zero would commit on entry.
    #[error("dwell_time_ms must be greater than 0")]
    ZeroDwell,

    /// A policy factor is outside (0, 1] or not finite.
    #[error("{field} must be within (0, 1], got {value}")]
    FactorOutOfRange { field: &'static str, value: f32 },

    /// The flick velocity threshold is negative or not finite.
    #[error("flick_velocity_px must be finite and non-negative, got {0}")]
    InvalidVelocity(f32),

    /// TOML could not be parsed into a config.
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors returned by [`SwipeEngine`](crate::engine::SwipeEngine) operations.
#[derive(Debug, Error)]
pub enum SwipeError {
    #[error("{0} is not mounted")]
    UnknownCard(CardId),

    #[error("{0} is already mounted")]
    DuplicateCard(CardId),

    /// Only `teil`, `alles` and `edit` can be dispatched.
    #[error("zone `{0}` does not carry an action")]
    NotAnAction(Zone),

    #[error("unknown zone name `{0}`")]
    UnknownZone(String),

    #[error("invalid config for {card}: {source}")]
    Config {
        card: CardId,
        #[source]
        source: ConfigError,
    },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, SwipeError>;
