//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities: flow rates as
//! [`VolumeRate`](uom::si::f64::VolumeRate), hose lengths and elevation as
//! [`Length`](uom::si::f64::Length), and pressures as
//! [`Pressure`](uom::si::f64::Pressure). Fire-ground values are conventionally
//! quoted in gallons per minute, feet and psi, so those are the units used at
//! the edges of the crate.
//!
//! ## Head pressure
//!
//! A column of water exerts a pressure proportional to its height. The
//! [`SpecificWeight`] quantity carries that ratio, and [`water_specific_weight`]
//! returns the fire-service rule-of-thumb value of 0.434 psi per foot:
//!
//! ```
//! use uom::si::{f64::Length, length::foot, pressure::pound_force_per_square_inch};
//! use hoselay_models::support::units::water_specific_weight;
//!
//! let head = water_specific_weight() * Length::new::<foot>(10.0);
//! assert!((head.get::<pound_force_per_square_inch>() - 4.34).abs() < 1e-9);
//! ```

mod quantities;
mod water;

pub use quantities::SpecificWeight;
pub use water::{PSI_PER_FOOT_OF_WATER, water_specific_weight};
