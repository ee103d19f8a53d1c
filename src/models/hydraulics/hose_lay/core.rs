//! Hose-lay hydraulics and configuration rules.
//!
//! A hose lay is a single main line from the pump, optionally ending in a Wye
//! that splits it into two 1.75″ branch lines. This module holds the pure
//! parts of the calculator:
//!
//! - validity rules deciding which layouts are legal,
//! - the friction and elevation pressure engine,
//! - the configuration and the transitions that edit it.

mod configuration;
mod error;
mod friction;
mod results;
mod rules;
mod segment;
mod transition;

#[cfg(test)]
mod test_support;

pub use configuration::{Configuration, LayState, MAX_ELEVATION_FT, SegmentKey, Wye};
pub use error::{EditError, FieldName, IllegalConfiguration, InvalidInput};
pub use friction::{elevation_pressure, friction_loss, total_friction_loss, total_length};
pub use results::{BranchLoss, PressureResults};
pub use rules::{
    can_edit_branch, can_enable_wye, forced_branch_diameter, normalize_segment_key,
    should_show_branch_controls,
};
pub use segment::{
    HoseDiameter, LineSegment, MAX_FLOW_GPM, MAX_LENGTH_FT, MAX_NOZZLE_PSI, Nozzle,
};
pub use transition::{EditState, FieldValue};

pub(crate) use segment::{flow_rate_from_gpm, pressure_from_psi};
