//! Snap controller: resting position after a release.

use serde::{Deserialize, Serialize};

use crate::core::{Zone, ZonePolicy};
use crate::geometry::Thresholds;

/// Where a released card comes to rest.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snap {
    /// Resting offset: `0`, `-teil`, `-alles` or `edit`.
    pub offset_px: f32,
    /// Zone the card rests in. `Zone::None` means closed.
    pub zone: Zone,
}

impl Snap {
    /// The closed resting position.
    pub const CLOSED: Snap = Snap {
        offset_px: 0.0,
        zone: Zone::None,
    };

    /// True when the card settles back to rest.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.zone == Zone::None
    }
}

/// Pick the resting position for a released offset.
///
/// Uses `policy.snap_factor` (0.6 by default), a separate constant from the
/// classifier's entry factor.
#[must_use]
pub fn snap(offset_px: f32, thresholds: &Thresholds, policy: &ZonePolicy) -> Snap {
    let f = policy.snap_factor;

    if offset_px < -thresholds.alles_px * f {
        Snap {
            offset_px: -thresholds.alles_px,
            zone: Zone::Alles,
        }
    } else if offset_px < -thresholds.teil_px * f {
        Snap {
            offset_px: -thresholds.teil_px,
            zone: Zone::Teil,
        }
    } else if offset_px > thresholds.edit_px * f {
        Snap {
            offset_px: thresholds.edit_px,
            zone: Zone::Edit,
        }
    } else {
        Snap::CLOSED
    }
}
