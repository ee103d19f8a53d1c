use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::{HoseDiameter, SegmentKey};

/// Numeric fields that accept user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    FlowRate,
    Length,
    Elevation,
    NozzlePressure,
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FlowRate => "flow rate",
            Self::Length => "length",
            Self::Elevation => "elevation",
            Self::NozzlePressure => "nozzle pressure",
        })
    }
}

/// A value supplied by the caller could not be accepted.
///
/// Invalid input is rejected before it reaches the hydraulics, which are only
/// ever evaluated on checked values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// A numeric field was negative, infinite or `NaN`.
    #[error("invalid {field}: {source}")]
    Field {
        field: FieldName,
        #[source]
        source: ConstraintError,
    },

    /// A segment label did not name `main`, `A` or `B`.
    #[error("unknown segment `{label}`")]
    UnknownSegment { label: String },

    /// A diameter tag did not name a supported hose size.
    #[error("unknown hose diameter `{tag}`")]
    UnknownDiameter { tag: String },

    /// A nozzle id is not present in the catalog.
    #[error("unknown nozzle `{id}`")]
    UnknownNozzle { id: String },

    /// Two catalog entries share an id.
    #[error("duplicate nozzle `{id}` in catalog")]
    DuplicateNozzle { id: String },
}

impl InvalidInput {
    pub(crate) fn field(field: FieldName) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Field { field, source }
    }
}

/// A requested transition would break a hose-lay invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalConfiguration {
    /// A Wye can only be placed at the end of a 2.5″ main line.
    #[error("a wye requires a 2.5\" main line, not {main}")]
    WyeRequiresTwoAndHalfMain { main: HoseDiameter },

    /// Branch lines behind a Wye are always 1.75″.
    #[error("branch lines are fixed at {forced}, cannot set {requested}")]
    BranchDiameterForced {
        requested: HoseDiameter,
        forced: HoseDiameter,
    },

    /// The addressed branch does not exist or cannot be edited.
    #[error("branch {segment} is not available without a wye")]
    BranchUnavailable { segment: SegmentKey },

    /// With a Wye in place the main line has no nozzle.
    #[error("the main line feeds a wye and cannot carry a nozzle")]
    NozzleOnWyeMain,
}

/// The condition reported by a rejected edit.
///
/// A rejected edit never changes the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("illegal configuration: {0}")]
    IllegalConfiguration(#[from] IllegalConfiguration),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}
