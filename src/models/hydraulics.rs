//! Fire-ground hydraulics.
//!
//! - [`hose_lay`]: Friction loss, elevation pressure and the rules that decide
//!   which main/Wye/branch layouts are legal.
//! - [`editor`]: Event-driven coordinator that applies user edits to a hose
//!   lay and publishes recomputed pressures over a channel.

pub mod editor;
pub mod hose_lay;
