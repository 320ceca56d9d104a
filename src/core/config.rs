//! Card configuration.
//!
//! Hosts configure each card once, at mount time:
//! - `CardConfig`: stop ratios, dwell time and swipe-through multiplier
//! - `ZonePolicy`: the tuning constants for zone entry, snapping and flicks
//!
//! Ratios are fractions of the card width measured at gesture start, so a
//! config stays valid across resizes and rotations.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default fraction of the card width for the `teil` stop.
pub const DEFAULT_LEFT_PARTIAL_RATIO: f32 = 0.25;
/// Default fraction of the card width for the `alles` stop.
pub const DEFAULT_LEFT_FULL_RATIO: f32 = 0.50;
/// Default fraction of the card width for the `edit` stop.
pub const DEFAULT_RIGHT_RATIO: f32 = 0.25;
/// Default dwell time before a held zone commits.
pub const DEFAULT_DWELL_TIME_MS: u64 = 300;
/// Default factor from action stop to swipe-through bound.
pub const DEFAULT_SWIPE_THROUGH_MULTIPLIER: f32 = 1.2;

/// Zone entry factor used while dragging.
pub const ZONE_ENTRY_FACTOR: f32 = 0.75;
/// Zone commitment factor used when snapping after release.
pub const SNAP_FACTOR: f32 = 0.6;
/// Release displacement above which a swipe counts as a flick.
pub const FLICK_VELOCITY_PX: f32 = 50.0;

/// Boundary tuning shared by classifier, snap controller and swipe-through.
///
/// `entry_factor` and `snap_factor` are separate knobs: a zone
/// lights up earlier during the drag (0.75 of its stop) than the card will
/// settle into it on release (0.6 of its stop).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZonePolicy {
    /// Fraction of a stop an offset must pass to enter that zone while dragging.
    pub entry_factor: f32,

    /// Fraction of a stop an offset must pass to rest at that stop on release.
    pub snap_factor: f32,

    /// Minimum release displacement (px) for the velocity swipe-through branch.
    pub flick_velocity_px: f32,
}

impl Default for ZonePolicy {
    fn default() -> Self {
        Self {
            entry_factor: ZONE_ENTRY_FACTOR,
            snap_factor: SNAP_FACTOR,
            flick_velocity_px: FLICK_VELOCITY_PX,
        }
    }
}

impl ZonePolicy {
    /// Set the live classification factor.
    #[must_use]
    pub fn with_entry_factor(mut self, factor: f32) -> Self {
        self.entry_factor = factor;
        self
    }

    /// Set the release snap factor.
    #[must_use]
    pub fn with_snap_factor(mut self, factor: f32) -> Self {
        self.snap_factor = factor;
        self
    }

    /// Set the flick threshold.
    #[must_use]
    pub fn with_flick_velocity(mut self, px: f32) -> Self {
        self.flick_velocity_px = px;
        self
    }

    /// Check every factor is within (0, 1] and the velocity is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("entry_factor", self.entry_factor),
            ("snap_factor", self.snap_factor),
        ] {
            if !(value.is_finite() && value > 0.0 && value <= 1.0) {
                return Err(ConfigError::FactorOutOfRange { field, value });
            }
        }
        if !(self.flick_velocity_px.is_finite() && self.flick_velocity_px >= 0.0) {
            return Err(ConfigError::InvalidVelocity(self.flick_velocity_px));
        }
        Ok(())
    }
}

/// Per-card configuration, immutable once mounted.
///
/// ## Example
///
/// ```
/// use rust_swipe::core::CardConfig;
///
/// let config = CardConfig::default()
///     .with_dwell_time_ms(500)
///     .with_right_ratio(0.3);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.dwell_time_ms, 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Fraction of card width where the `teil` stop sits (left).
    pub left_partial_ratio: f32,

    /// Fraction of card width where the `alles` stop sits (left).
    pub left_full_ratio: f32,

    /// Fraction of card width where the `edit` stop sits (right).
    pub right_ratio: f32,

    /// How long a zone must be held before it commits.
    pub dwell_time_ms: u64,

    /// Swipe-through bound relative to the outer stop on each side.
    /// Also bounds drag travel.
    pub swipe_through_multiplier: f32,

    /// Boundary tuning constants.
    pub policy: ZonePolicy,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            left_partial_ratio: DEFAULT_LEFT_PARTIAL_RATIO,
            left_full_ratio: DEFAULT_LEFT_FULL_RATIO,
            right_ratio: DEFAULT_RIGHT_RATIO,
            dwell_time_ms: DEFAULT_DWELL_TIME_MS,
            swipe_through_multiplier: DEFAULT_SWIPE_THROUGH_MULTIPLIER,
            policy: ZonePolicy::default(),
        }
    }
}

impl CardConfig {
    /// Set the partial (`teil`) stop ratio.
    #[must_use]
    pub fn with_left_partial_ratio(mut self, ratio: f32) -> Self {
        self.left_partial_ratio = ratio;
        self
    }

    /// Set the full (`alles`) stop ratio.
    #[must_use]
    pub fn with_left_full_ratio(mut self, ratio: f32) -> Self {
        self.left_full_ratio = ratio;
        self
    }

    /// Set the `edit` stop ratio.
    #[must_use]
    pub fn with_right_ratio(mut self, ratio: f32) -> Self {
        self.right_ratio = ratio;
        self
    }

    /// Set the dwell time.
    #[must_use]
    pub fn with_dwell_time_ms(mut self, ms: u64) -> Self {
        self.dwell_time_ms = ms;
        self
    }

    /// Set the swipe-through multiplier.
    #[must_use]
    pub fn with_swipe_through_multiplier(mut self, multiplier: f32) -> Self {
        self.swipe_through_multiplier = multiplier;
        self
    }

    /// Replace the boundary policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ZonePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the config invariants.
    ///
    /// Ratios must be in (0, 1) with the partial stop before the full one,
    /// the multiplier must exceed 1 and the dwell time must be non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("left_partial_ratio", self.left_partial_ratio),
            ("left_full_ratio", self.left_full_ratio),
            ("right_ratio", self.right_ratio),
        ] {
            if !(value.is_finite() && value > 0.0 && value < 1.0) {
                return Err(ConfigError::RatioOutOfRange { field, value });
            }
        }

        if self.left_partial_ratio >= self.left_full_ratio {
            return Err(ConfigError::PartialNotBelowFull {
                partial: self.left_partial_ratio,
                full: self.left_full_ratio,
            });
        }

        if !(self.swipe_through_multiplier.is_finite() && self.swipe_through_multiplier > 1.0) {
            return Err(ConfigError::MultiplierTooSmall(self.swipe_through_multiplier));
        }

        if self.dwell_time_ms == 0 {
            return Err(ConfigError::ZeroDwell);
        }

        self.policy.validate()
    }

    /// Parse a config from TOML and validate it.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// ```
    /// use rust_swipe::core::CardConfig;
    ///
    /// let config = CardConfig::from_toml_str(r#"
    ///     dwell_time_ms = 500
    ///
    ///     [policy]
    ///     snap_factor = 0.5
    /// "#).unwrap();
    ///
    /// assert_eq!(config.dwell_time_ms, 500);
    /// assert_eq!(config.policy.snap_factor, 0.5);
    /// assert_eq!(config.policy.entry_factor, 0.75);
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: CardConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}
