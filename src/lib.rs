//! # Hose-lay models
//!
//! Hydraulic models and a validated line-configuration editor for
//! fire-ground hose lays: one main line, optionally split by a Wye into two
//! branch lines.
//!
//! ## Crate layout
//!
//! - [`models`]: Hose-lay hydraulics and the editor that drives them.
//!   [`models::hydraulics::hose_lay::HoseLay`] is a [`twine_core::Model`].
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use hoselay_models::models::hydraulics::hose_lay::{
//!     Configuration, HoseDiameter, LineSegment, PressureResults,
//! };
//! use uom::si::pressure::pound_force_per_square_inch as psi;
//!
//! let main = LineSegment::from_field_units(150.0, HoseDiameter::OneAndThreeQuarter, 200.0)
//!     .unwrap();
//! let results = PressureResults::compute(&Configuration::new(main));
//!
//! assert!((results.total.get::<psi>() - 69.75).abs() < 1e-9);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
