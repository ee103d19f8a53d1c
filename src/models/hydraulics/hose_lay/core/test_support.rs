use uom::si::{f64::Pressure, pressure::pound_force_per_square_inch};

use super::{
    Configuration, EditState, HoseDiameter, LineSegment, Nozzle, SegmentKey, Wye,
    segment::{flow_rate_from_gpm, length_from_feet, pressure_from_psi},
};

pub(super) fn segment(flow_gpm: f64, diameter: HoseDiameter, length_ft: f64) -> LineSegment {
    LineSegment::from_field_units(flow_gpm, diameter, length_ft).unwrap()
}

pub(super) fn psi(pressure: Pressure) -> f64 {
    pressure.get::<pound_force_per_square_inch>()
}

pub(super) fn nozzle(id: &str, flow_gpm: f64, pressure_psi: f64) -> Nozzle {
    Nozzle {
        id: id.to_owned(),
        label: id.to_owned(),
        flow_rate: flow_rate_from_gpm(flow_gpm).unwrap(),
        pressure: pressure_from_psi(pressure_psi).unwrap(),
    }
}

/// A configuration with a Wye and the given `(gpm, ft)` on each branch.
pub(super) fn with_branches(main: LineSegment, a: (f64, f64), b: (f64, f64)) -> Configuration {
    let mut config = Configuration::new(main);
    config.set_wye(Some(Wye::new()));
    for (key, (flow_gpm, length_ft)) in [(SegmentKey::A, a), (SegmentKey::B, b)] {
        let branch = config.segment_mut(key).unwrap();
        branch.set_flow_rate(flow_rate_from_gpm(flow_gpm).unwrap());
        branch.set_length(length_from_feet(length_ft).unwrap());
    }
    config
}

pub(super) fn editing(flow_gpm: f64, diameter: HoseDiameter, length_ft: f64) -> EditState {
    EditState::new(Configuration::new(segment(flow_gpm, diameter, length_ft)))
}

/// A 300 gpm, 200 ft, 2.5″ main with an empty Wye behind it.
pub(super) fn wye_ready() -> EditState {
    editing(300.0, HoseDiameter::TwoAndHalf, 200.0)
        .toggle_wye(true)
        .unwrap()
}
