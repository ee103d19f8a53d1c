use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, Z0},
};

/// Specific weight (weight per unit volume), N/m³ in SI.
///
/// Dimensionally a pressure per unit length.
pub type SpecificWeight = Quantity<ISQ<N2, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
