//! Per-card runtime state.

use serde::{Deserialize, Serialize};

use crate::core::{CardConfig, CardId, Zone};
use crate::dwell::{DwellCommands, DwellController, DwellProgress};
use crate::geometry::{classify, Thresholds};
use crate::gesture::{DragTracker, Release};

/// Runtime state of one mounted card, owned by the engine.
///
/// Baseline is `offset_px == 0`, no resting zone, no drag, dwell idle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeCard {
    id: CardId,
    config: CardConfig,

    /// Last width reported by the host.
    width_px: f32,

    /// Thresholds measured at the start of the current gesture.
    thresholds: Thresholds,

    offset_px: f32,

    /// Whether the current offset should be reached with a transition.
    animated: bool,

    /// Stop the card rests at after a snap.
    resting: Zone,

    drag: DragTracker,
    dwell: DwellController,
}

impl SwipeCard {
    /// Create a card at baseline. `config` is expected to be validated.
    #[must_use]
    pub fn new(id: CardId, config: CardConfig) -> Self {
        Self {
            id,
            config,
            width_px: 0.0,
            thresholds: Thresholds::default(),
            offset_px: 0.0,
            animated: true,
            resting: Zone::None,
            drag: DragTracker::new(),
            dwell: DwellController::new(config.dwell_time_ms),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    #[must_use]
    pub fn offset_px(&self) -> f32 {
        self.offset_px
    }

    #[must_use]
    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    #[must_use]
    pub fn resting(&self) -> Zone {
        self.resting
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn dwell(&self) -> &DwellController {
        &self.dwell
    }

    /// Zone of the current offset under the live classification rule.
    #[must_use]
    pub fn live_zone(&self) -> Zone {
        classify(self.offset_px, &self.thresholds, &self.config.policy)
    }

    /// Open means displaced, dragging or resting at a stop.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.offset_px != 0.0 || self.resting.is_action() || self.drag.is_dragging
    }

    pub(crate) fn set_width(&mut self, width_px: f32) {
        self.width_px = width_px;
    }

    pub(crate) fn dwell_mut(&mut self) -> &mut DwellController {
        &mut self.dwell
    }

    /// Gesture start: re-measure, drop any armed dwell, track 1:1.
    ///
    /// A card resting at a stop moves to that stop under the new measurement,
    /// so the offset stays within the travel bounds after a resize.
    pub(crate) fn begin_drag(&mut self, x: f32) -> DwellCommands {
        self.thresholds = Thresholds::compute(self.width_px, &self.config);
        let base = if self.resting.is_action() {
            self.thresholds.stop_px(self.resting)
        } else {
            self.offset_px
        };
        self.offset_px = self.thresholds.clamp(base);
        self.animated = false;
        self.drag.start(x);
        self.dwell.cancel()
    }

    /// Apply a move. Returns the new offset when the card is being dragged.
    pub(crate) fn drag_to(&mut self, x: f32) -> Option<f32> {
        let offset = self.drag.offset_for(x, &self.thresholds)?;
        self.offset_px = offset;
        Some(offset)
    }

    pub(crate) fn end_drag(&mut self, x: f32) -> Option<Release> {
        self.drag.finish(x)
    }

    /// Settle at `offset_px` with an animated transition.
    pub(crate) fn settle(&mut self, offset_px: f32, zone: Zone) {
        self.offset_px = offset_px;
        self.resting = zone;
        self.animated = true;
    }

    /// Back to baseline. Returns the dwell cancellation to apply.
    pub(crate) fn reset(&mut self) -> DwellCommands {
        self.drag.stop();
        self.settle(0.0, Zone::None);
        self.dwell.cancel()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self, now_ms: u64) -> CardView {
        CardView {
            card: self.id,
            offset_px: self.offset_px,
            animated: self.animated,
            resting: self.resting,
            dragging: self.drag.is_dragging,
            live_zone: self.live_zone(),
            progress: self.dwell.progress(now_ms),
        }
    }
}

/// What a host needs to draw one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub card: CardId,

    /// Horizontal translation of the content layer.
    pub offset_px: f32,

    /// Use a transition to reach `offset_px` (false while tracking a finger).
    pub animated: bool,

    pub resting: Zone,
    pub dragging: bool,

    /// Zone highlighted by the current offset.
    pub live_zone: Zone,

    /// Dwell ring to draw on the armed zone's action element.
    pub progress: Option<DwellProgress>,
}
