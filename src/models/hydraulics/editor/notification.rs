use crate::models::hydraulics::hose_lay::{
    Configuration, EditError, PressureResults, SegmentKey, should_show_branch_controls,
};

/// Everything a view needs to render the current hose lay.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub configuration: Configuration,
    pub active: SegmentKey,
    pub results: PressureResults,
    pub branch_controls_visible: bool,
}

impl Snapshot {
    pub(super) fn new(
        configuration: Configuration,
        active: SegmentKey,
        results: PressureResults,
    ) -> Self {
        let branch_controls_visible = should_show_branch_controls(
            configuration.wye_enabled(),
            configuration.main().diameter(),
        );
        Self {
            configuration,
            active,
            results,
            branch_controls_visible,
        }
    }
}

/// Sent to every subscriber after each event.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The event was applied and pressures were recomputed.
    Recalculated(Snapshot),

    /// The event was refused; the configuration is unchanged.
    Rejected {
        event: &'static str,
        error: EditError,
    },
}
