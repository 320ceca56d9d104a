//! Threshold calculator.

use serde::{Deserialize, Serialize};

use crate::core::{CardConfig, Zone};

/// Pixel boundaries for one gesture, derived from a measured card width.
///
/// All values are positive magnitudes; the left-side ones are compared
/// against negated offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// `teil` stop (left).
    pub teil_px: f32,
    /// `alles` stop (left).
    pub alles_px: f32,
    /// `edit` stop (right).
    pub edit_px: f32,
    /// Left swipe-through bound, also the maximum left travel.
    pub left_swipe_through_px: f32,
    /// Right swipe-through bound, also the maximum right travel.
    pub right_swipe_through_px: f32,
}

impl Thresholds {
    /// Compute thresholds for a card of `width_px`.
    ///
    /// Negative or non-finite widths are treated as zero, which yields
    /// all-zero thresholds and an inert card.
    #[must_use]
    pub fn compute(width_px: f32, config: &CardConfig) -> Self {
        let width = if width_px.is_finite() { width_px.max(0.0) } else { 0.0 };
        let teil_px = config.left_partial_ratio * width;
        let alles_px = config.left_full_ratio * width;
        let edit_px = config.right_ratio * width;

        Self {
            teil_px,
            alles_px,
            edit_px,
            left_swipe_through_px: alles_px * config.swipe_through_multiplier,
            right_swipe_through_px: edit_px * config.swipe_through_multiplier,
        }
    }

    /// Maximum leftward travel (magnitude).
    #[must_use]
    pub fn max_left_px(&self) -> f32 {
        self.left_swipe_through_px
    }

    /// Maximum rightward travel.
    #[must_use]
    pub fn max_right_px(&self) -> f32 {
        self.right_swipe_through_px
    }

    /// Offset of the stop for `zone`. `Zone::None` is the closed position.
    #[must_use]
    pub fn stop_px(&self, zone: Zone) -> f32 {
        match zone {
            Zone::None => 0.0,
            Zone::Teil => -self.teil_px,
            Zone::Alles => -self.alles_px,
            Zone::Edit => self.edit_px,
        }
    }

    /// Clamp a raw displacement to the allowed travel.
    ///
    /// Negative or NaN bounds, which only an unvalidated config produces,
    /// collapse to zero travel on that side.
    #[must_use]
    pub fn clamp(&self, offset_px: f32) -> f32 {
        if offset_px.is_nan() {
            return 0.0;
        }
        let left = self.max_left_px().max(0.0);
        let right = self.max_right_px().max(0.0);
        offset_px.clamp(-left, right)
    }

    /// True when every threshold collapsed to zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.alles_px == 0.0 && self.edit_px == 0.0
    }
}
