//! Drag tracking.
//!
//! Converts absolute pointer positions into a clamped horizontal offset.

use serde::{Deserialize, Serialize};

use crate::geometry::Thresholds;

/// What the tracker reports when a drag ends.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// `release_x - start_x`. A displacement proxy, not a true velocity.
    pub velocity: f32,
}

/// Grab-and-drag state for one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DragTracker {
    /// Whether a drag is in progress.
    pub is_dragging: bool,

    /// Client x where the drag started.
    pub start_x: Option<f32>,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `x`.
    pub fn start(&mut self, x: f32) {
        self.is_dragging = true;
        self.start_x = Some(x);
    }

    /// Offset the card should take for a pointer at `x`.
    ///
    /// Returns `None` when no drag is active.
    #[must_use]
    pub fn offset_for(&self, x: f32, thresholds: &Thresholds) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let start = self.start_x?;
        Some(thresholds.clamp(x - start))
    }

    /// End the drag at `x`.
    pub fn finish(&mut self, x: f32) -> Option<Release> {
        if !self.is_dragging {
            return None;
        }
        let start = self.start_x?;
        self.stop();
        Some(Release { velocity: x - start })
    }

    /// Drop the drag without a release.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_x = None;
    }
}
