//! Hose-lay hydraulics model.
//!
//! [`HoseLay`] is the [`twine_core::Model`] for a hose lay: given a
//! [`Configuration`] it returns the [`PressureResults`] a pump operator needs.
//! The computational core is in the internal `core` module; its types and
//! functions are re-exported here.

mod core;

pub use self::core::{
    BranchLoss, Configuration, EditError, EditState, FieldName, FieldValue, HoseDiameter,
    IllegalConfiguration, InvalidInput, LayState, LineSegment, MAX_ELEVATION_FT, MAX_FLOW_GPM,
    MAX_LENGTH_FT, MAX_NOZZLE_PSI, Nozzle, PressureResults, SegmentKey, Wye, can_edit_branch,
    can_enable_wye, elevation_pressure, forced_branch_diameter, friction_loss,
    normalize_segment_key, should_show_branch_controls, total_friction_loss, total_length,
};

pub(crate) use self::core::{flow_rate_from_gpm, pressure_from_psi};

use std::convert::Infallible;

use twine_core::Model;

/// Friction loss, elevation pressure and pump pressure for a hose lay.
///
/// Configurations can only be built through checked constructors and
/// transitions, so evaluating one cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoseLay;

impl Model for HoseLay {
    type Input = Configuration;
    type Output = PressureResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(PressureResults::compute(input))
    }
}
