//! Validity rules: pure predicates deciding which layouts are legal.

use super::{HoseDiameter, SegmentKey};

/// Returns `true` if a Wye may be placed at the end of a main line of this size.
#[must_use]
pub fn can_enable_wye(main_diameter: HoseDiameter) -> bool {
    main_diameter == HoseDiameter::TwoAndHalf
}

/// Returns `true` if branch lines may be edited.
///
/// Both conditions are checked together, so a main line that is no longer
/// 2.5″ disables branch editing even if a Wye flag was left behind.
#[must_use]
pub fn can_edit_branch(wye_enabled: bool, main_diameter: HoseDiameter) -> bool {
    wye_enabled && can_enable_wye(main_diameter)
}

/// Returns `true` if branch controls should be shown.
///
/// Currently the same rule as [`can_edit_branch`]; kept separate so viewing
/// and editing can diverge.
#[must_use]
pub fn should_show_branch_controls(wye_enabled: bool, main_diameter: HoseDiameter) -> bool {
    wye_enabled && can_enable_wye(main_diameter)
}

/// The only diameter a branch line behind a Wye may have.
#[must_use]
pub const fn forced_branch_diameter() -> HoseDiameter {
    HoseDiameter::OneAndThreeQuarter
}

/// Maps a free-form label onto a segment, falling back to [`SegmentKey::Main`].
///
/// Unrecognized labels are silently treated as `main`. Use
/// `label.parse::<SegmentKey>()` to reject them instead.
#[must_use]
pub fn normalize_segment_key(label: &str) -> SegmentKey {
    label.parse().unwrap_or_default()
}
