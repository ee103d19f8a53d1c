//! Friction loss and elevation pressure.
//!
//! Friction loss uses the fire-service approximation
//! `FL = C × (Q / 100)² × (L / 100)` per segment, with `Q` in gpm, `L` in feet
//! and `C` from [`HoseDiameter::friction_coefficient`](super::HoseDiameter::friction_coefficient).
//! Loss is always computed segment by segment; summing lengths first would
//! give the wrong answer for lays with more than one segment.

use uom::{
    ConstZero,
    si::{
        f64::{Length, Pressure},
        length::foot,
        pressure::pound_force_per_square_inch,
        volume_rate::gallon_per_minute,
    },
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::water_specific_weight,
};

use super::{Configuration, LineSegment};

/// Friction loss over one segment.
///
/// Zero flow or zero length yields exactly zero. Segments are capped at
/// [`MAX_FLOW_GPM`](super::MAX_FLOW_GPM) and [`MAX_LENGTH_FT`](super::MAX_LENGTH_FT),
/// so the loss is always finite.
#[must_use]
pub fn friction_loss(segment: &LineSegment) -> Pressure {
    let gpm = segment.flow_rate().get::<gallon_per_minute>();
    let feet = segment.length().get::<foot>();
    if gpm == 0.0 || feet == 0.0 {
        return Pressure::ZERO;
    }

    let hundreds_gpm = gpm / 100.0;
    let hundreds_ft = feet / 100.0;
    let c = segment.diameter().friction_coefficient();

    Pressure::new::<pound_force_per_square_inch>(c * hundreds_gpm * hundreds_gpm * hundreds_ft)
}

/// Friction loss the pump has to overcome.
///
/// Without a Wye this is the main line alone. With a Wye it is the main line
/// plus the governing branch, the one with the higher loss.
#[must_use]
pub fn total_friction_loss(configuration: &Configuration) -> Pressure {
    let main = friction_loss(configuration.main());
    match configuration.wye() {
        None => main,
        Some(wye) => main + friction_loss(wye.a()).max(friction_loss(wye.b())),
    }
}

/// Pressure change from elevation: 0.434 psi per foot.
///
/// Negative for a drop, which reduces the required pump pressure.
#[must_use]
pub fn elevation_pressure(elevation: Length) -> Pressure {
    water_specific_weight() * elevation
}

/// Total hose length of the given segments, for reporting.
pub fn total_length<'a>(
    segments: impl IntoIterator<Item = &'a LineSegment>,
) -> Constrained<Length, NonNegative> {
    segments.into_iter().map(LineSegment::checked_length).sum()
}
