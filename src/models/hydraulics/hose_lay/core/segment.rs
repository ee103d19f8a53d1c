//! Hose sizes, nozzles and the line segment they make up.

use std::{fmt, str::FromStr};

use uom::si::{
    f64::{Length, Pressure, VolumeRate},
    length::foot,
    pressure::pound_force_per_square_inch,
    volume_rate::gallon_per_minute,
};

use crate::support::constraint::{Constrained, ConstraintError, Finite, NonNegative};

use super::{FieldName, InvalidInput};

/// Nominal hose size.
///
/// Sizes are a closed set; each one carries its own friction coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoseDiameter {
    /// 1.75″ attack line.
    OneAndThreeQuarter,
    /// 2.5″ attack or supply line. The only size that can feed a Wye.
    TwoAndHalf,
    /// 3″ supply line.
    Three,
    /// 4″ large-diameter supply hose.
    Four,
    /// 5″ large-diameter supply hose.
    Five,
}

impl HoseDiameter {
    /// Every supported size, smallest first.
    pub const ALL: [Self; 5] = [
        Self::OneAndThreeQuarter,
        Self::TwoAndHalf,
        Self::Three,
        Self::Four,
        Self::Five,
    ];

    /// Friction loss coefficient `C` for this size.
    ///
    /// Loss in psi is `C × (Q / 100)² × (L / 100)` with `Q` in gpm and `L` in feet.
    #[must_use]
    pub const fn friction_coefficient(self) -> f64 {
        match self {
            Self::OneAndThreeQuarter => 15.5,
            Self::TwoAndHalf => 2.0,
            Self::Three => 0.8,
            Self::Four => 0.2,
            Self::Five => 0.08,
        }
    }

    /// The tag this size is written as, e.g. `"1.75"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::OneAndThreeQuarter => "1.75",
            Self::TwoAndHalf => "2.5",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
        }
    }
}

impl fmt::Display for HoseDiameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.tag())
    }
}

/// Parses a diameter tag such as `"2.5"`, `"2.5\""` or `"2.5in"`.
impl FromStr for HoseDiameter {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix('"')
            .or_else(|| trimmed.strip_suffix("in"))
            .unwrap_or(trimmed)
            .trim();

        Self::ALL
            .into_iter()
            .find(|size| size.tag() == number)
            .ok_or_else(|| InvalidInput::UnknownDiameter { tag: s.to_owned() })
    }
}

/// A nozzle taken from the injected catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Nozzle {
    pub id: String,
    pub label: String,

    /// Rated flow, which becomes the flow of the line it is attached to.
    pub flow_rate: Constrained<VolumeRate, NonNegative>,

    /// Pressure the nozzle needs at its inlet.
    pub pressure: Constrained<Pressure, NonNegative>,
}

/// One physical hose run.
///
/// Flow rate and length are always finite and non-negative. A discharge line
/// may also carry the nozzle it ends in.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    flow_rate: Constrained<VolumeRate, NonNegative>,
    diameter: HoseDiameter,
    length: Constrained<Length, NonNegative>,
    nozzle: Option<Nozzle>,
}

impl LineSegment {
    /// Constructs a segment from pre-validated quantities.
    #[must_use]
    pub fn new(
        flow_rate: Constrained<VolumeRate, NonNegative>,
        diameter: HoseDiameter,
        length: Constrained<Length, NonNegative>,
    ) -> Self {
        Self {
            flow_rate,
            diameter,
            length,
            nozzle: None,
        }
    }

    /// Constructs a segment from field units: gallons per minute and feet.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Field`] if either value is negative, not finite
    /// or above [`MAX_FLOW_GPM`] / [`MAX_LENGTH_FT`].
    pub fn from_field_units(
        flow_gpm: f64,
        diameter: HoseDiameter,
        length_ft: f64,
    ) -> Result<Self, InvalidInput> {
        Ok(Self::new(
            flow_rate_from_gpm(flow_gpm)?,
            diameter,
            length_from_feet(length_ft)?,
        ))
    }

    /// Constructs an empty segment with no flow and no length.
    #[must_use]
    pub fn empty(diameter: HoseDiameter) -> Self {
        Self::new(NonNegative::zero(), diameter, NonNegative::zero())
    }

    #[must_use]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate.into_inner()
    }

    #[must_use]
    pub fn diameter(&self) -> HoseDiameter {
        self.diameter
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length.into_inner()
    }

    /// Length with its non-negativity carried in the type, for summing.
    #[must_use]
    pub fn checked_length(&self) -> Constrained<Length, NonNegative> {
        self.length
    }

    #[must_use]
    pub fn nozzle(&self) -> Option<&Nozzle> {
        self.nozzle.as_ref()
    }

    /// Sets the flow rate. A manually entered flow detaches any nozzle.
    pub(super) fn set_flow_rate(&mut self, flow_rate: Constrained<VolumeRate, NonNegative>) {
        self.flow_rate = flow_rate;
        self.nozzle = None;
    }

    pub(super) fn set_length(&mut self, length: Constrained<Length, NonNegative>) {
        self.length = length;
    }

    pub(super) fn set_diameter(&mut self, diameter: HoseDiameter) {
        self.diameter = diameter;
    }

    /// Attaches a nozzle and takes on its rated flow, or detaches the current one.
    pub(super) fn set_nozzle(&mut self, nozzle: Option<Nozzle>) {
        if let Some(nozzle) = &nozzle {
            self.flow_rate = nozzle.flow_rate;
        }
        self.nozzle = nozzle;
    }
}

/// Largest flow rate accepted for a line, in gallons per minute.
///
/// Well above any pump or master stream, and small enough that friction loss
/// stays finite for every hose size and length.
pub const MAX_FLOW_GPM: f64 = 100_000.0;

/// Longest line accepted, in feet.
pub const MAX_LENGTH_FT: f64 = 100_000.0;

/// Highest nozzle pressure accepted, in psi.
pub const MAX_NOZZLE_PSI: f64 = 10_000.0;

/// Checks a finite value against `-limit..=limit`.
pub(super) fn within_limit(value: f64, limit: f64) -> Result<f64, ConstraintError> {
    let value = Finite::new(value)?.into_inner();
    if value > limit {
        Err(ConstraintError::AboveMaximum)
    } else if value < -limit {
        Err(ConstraintError::BelowMinimum)
    } else {
        Ok(value)
    }
}

/// Checks a finite, non-negative value against `0..=limit`.
fn non_negative_within(value: f64, limit: f64) -> Result<f64, ConstraintError> {
    let value = NonNegative::new(Finite::new(value)?.into_inner())?.into_inner();
    within_limit(value, limit)
}

/// Checks a flow rate given in gallons per minute.
pub(crate) fn flow_rate_from_gpm(
    gpm: f64,
) -> Result<Constrained<VolumeRate, NonNegative>, InvalidInput> {
    non_negative_within(gpm, MAX_FLOW_GPM)
        .and_then(|gpm| NonNegative::new(VolumeRate::new::<gallon_per_minute>(gpm)))
        .map_err(InvalidInput::field(FieldName::FlowRate))
}

/// Checks a hose length given in feet.
pub(crate) fn length_from_feet(
    feet: f64,
) -> Result<Constrained<Length, NonNegative>, InvalidInput> {
    non_negative_within(feet, MAX_LENGTH_FT)
        .and_then(|feet| NonNegative::new(Length::new::<foot>(feet)))
        .map_err(InvalidInput::field(FieldName::Length))
}

/// Checks a nozzle pressure given in psi.
pub(crate) fn pressure_from_psi(
    psi: f64,
) -> Result<Constrained<Pressure, NonNegative>, InvalidInput> {
    non_negative_within(psi, MAX_NOZZLE_PSI)
        .and_then(|psi| NonNegative::new(Pressure::new::<pound_force_per_square_inch>(psi)))
        .map_err(InvalidInput::field(FieldName::NozzlePressure))
}
