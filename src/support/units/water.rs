use uom::si::{
    f64::{Length, Pressure},
    length::foot,
    pressure::pound_force_per_square_inch,
};

use super::SpecificWeight;

/// Head pressure of fresh water, in psi per foot of elevation.
pub const PSI_PER_FOOT_OF_WATER: f64 = 0.434;

/// Returns the specific weight of water used for elevation corrections.
#[must_use]
pub fn water_specific_weight() -> SpecificWeight {
    Pressure::new::<pound_force_per_square_inch>(PSI_PER_FOOT_OF_WATER) / Length::new::<foot>(1.0)
}
