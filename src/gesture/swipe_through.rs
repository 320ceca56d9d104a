//! Swipe-through detection at release.

use crate::core::{Zone, ZonePolicy};
use crate::geometry::Thresholds;

/// Decide whether a release fires an action immediately.
///
/// The left fast path always escalates to `Alles`, never `Teil`. A release
/// fires when the offset is past the swipe-through bound, or past the outer
/// stop with a flick (`velocity` beyond `policy.flick_velocity_px`). The left
/// flick accepts either velocity sign; the right one needs a rightward flick.
///
/// Returns `None` when the card should snap instead.
#[must_use]
pub fn detect(
    offset_px: f32,
    velocity: f32,
    thresholds: &Thresholds,
    policy: &ZonePolicy,
) -> Option<Zone> {
    let flick = policy.flick_velocity_px;

    if offset_px < -thresholds.left_swipe_through_px
        || (offset_px < -thresholds.alles_px && velocity.abs() > flick)
    {
        return Some(Zone::Alles);
    }

    if offset_px > thresholds.right_swipe_through_px
        || (offset_px > thresholds.edit_px && velocity > flick)
    {
        return Some(Zone::Edit);
    }

    None
}
