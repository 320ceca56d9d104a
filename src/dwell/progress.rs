//! Dwell progress indicator.

use serde::{Deserialize, Serialize};

use crate::core::Zone;

/// Linear progress of an armed dwell, for the ring drawn on the zone's
/// action element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DwellProgress {
    pub zone: Zone,
    pub started_at_ms: u64,
    pub duration_ms: u64,
    /// 0.0 at arm time, 1.0 once the dwell time has elapsed.
    pub fraction: f32,
}

impl DwellProgress {
    /// Progress at arm time.
    #[must_use]
    pub fn new(zone: Zone, started_at_ms: u64, duration_ms: u64) -> Self {
        Self {
            zone,
            started_at_ms,
            duration_ms,
            fraction: 0.0,
        }
    }

    /// Same arm, evaluated at `now_ms`.
    #[must_use]
    pub fn at(mut self, now_ms: u64) -> Self {
        self.fraction = fraction(self.started_at_ms, self.duration_ms, now_ms);
        self
    }

    /// Progress as a whole percentage.
    #[must_use]
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).round() as u8
    }

    /// Remaining time before the dwell commits.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.started_at_ms
            .saturating_add(self.duration_ms)
            .saturating_sub(now_ms)
    }
}

fn fraction(started_at_ms: u64, duration_ms: u64, now_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now_ms.saturating_sub(started_at_ms);
    (elapsed as f64 / duration_ms as f64).clamp(0.0, 1.0) as f32
}
