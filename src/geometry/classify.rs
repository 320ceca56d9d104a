//! Zone classifier for live drags.

use crate::core::{Zone, ZonePolicy};

use super::Thresholds;

/// Map an offset to the zone it is currently in.
///
/// Uses `policy.entry_factor` (0.75 by default), which is looser than the
/// snap factor applied on release. Left zones are checked outermost first.
#[must_use]
pub fn classify(offset_px: f32, thresholds: &Thresholds, policy: &ZonePolicy) -> Zone {
    let f = policy.entry_factor;

    if offset_px < -thresholds.alles_px * f {
        Zone::Alles
    } else if offset_px < -thresholds.teil_px * f {
        Zone::Teil
    } else if offset_px > thresholds.edit_px * f {
        Zone::Edit
    } else {
        Zone::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardConfig;

    fn default_300() -> (Thresholds, ZonePolicy) {
        let config = CardConfig::default();
        (Thresholds::compute(300.0, &config), config.policy)
    }

    #[test]
    fn test_center_is_none() {
        let (t, p) = default_300();
        assert_eq!(classify(0.0, &t, &p), Zone::None);
    }

    #[test]
    fn test_entry_boundaries() {
        let (t, p) = default_300();
        // teil enters past -56.25, alles past -112.5, edit past 56.25
        assert_eq!(classify(-56.0, &t, &p), Zone::None);
        assert_eq!(classify(-57.0, &t, &p), Zone::Teil);
        assert_eq!(classify(-112.0, &t, &p), Zone::Teil);
        assert_eq!(classify(-113.0, &t, &p), Zone::Alles);
        assert_eq!(classify(56.0, &t, &p), Zone::None);
        assert_eq!(classify(57.0, &t, &p), Zone::Edit);
    }

    #[test]
    fn test_exact_boundary_is_not_inside() {
        let (t, p) = default_300();
        assert_eq!(classify(-56.25, &t, &p), Zone::None);
        assert_eq!(classify(-112.5, &t, &p), Zone::Teil);
        assert_eq!(classify(56.25, &t, &p), Zone::None);
    }

    #[test]
    fn test_degenerate_thresholds_always_none() {
        let t = Thresholds::default();
        let p = ZonePolicy::default();
        assert_eq!(classify(0.0, &t, &p), Zone::None);
        assert_eq!(classify(-0.0, &t, &p), Zone::None);
    }

    #[test]
    fn test_custom_entry_factor() {
        let (t, _) = default_300();
        let p = ZonePolicy::default().with_entry_factor(1.0);
        assert_eq!(classify(-70.0, &t, &p), Zone::None);
        assert_eq!(classify(-76.0, &t, &p), Zone::Teil);
    }
}
