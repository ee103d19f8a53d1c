//! Pressures derived from a configuration.

use uom::si::f64::{Length, Pressure};

use super::{
    Configuration, LineSegment, SegmentKey,
    friction::{elevation_pressure, friction_loss, total_friction_loss, total_length},
};

/// Friction loss in each branch behind a Wye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchLoss {
    pub a: Pressure,
    pub b: Pressure,
}

impl BranchLoss {
    /// The branch that sets the pump pressure. Ties go to `A`.
    #[must_use]
    pub fn governing(&self) -> SegmentKey {
        if self.b > self.a {
            SegmentKey::B
        } else {
            SegmentKey::A
        }
    }

    /// Loss in the governing branch.
    #[must_use]
    pub fn governing_loss(&self) -> Pressure {
        match self.governing() {
            SegmentKey::B => self.b,
            _ => self.a,
        }
    }
}

/// Recomputed pressures for one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureResults {
    /// Friction loss in the main line.
    pub main_loss: Pressure,

    /// Branch losses, present only with a Wye.
    pub branch_loss: Option<BranchLoss>,

    /// Main loss plus the governing branch loss.
    pub friction_loss: Pressure,

    /// Elevation correction, negative for a drop.
    pub elevation: Pressure,

    /// Friction loss plus elevation pressure.
    pub total: Pressure,

    /// Total plus nozzle pressure on the governing line.
    ///
    /// Present only when every discharge line ends in a nozzle. With a Wye the
    /// governing line is the branch needing the most pressure once its nozzle
    /// is counted, which may differ from [`BranchLoss::governing`].
    pub pump_discharge: Option<Pressure>,

    /// Hose laid across every segment.
    pub total_length: Length,
}

impl PressureResults {
    /// Computes every derived pressure for a configuration.
    #[must_use]
    pub fn compute(configuration: &Configuration) -> Self {
        let main_loss = friction_loss(configuration.main());
        let branch_loss = configuration.wye().map(|wye| BranchLoss {
            a: friction_loss(wye.a()),
            b: friction_loss(wye.b()),
        });
        let friction = total_friction_loss(configuration);
        let elevation = elevation_pressure(configuration.elevation());

        let pump_discharge = match configuration.wye() {
            None => nozzle_pressure(configuration.main()).map(|nozzle| main_loss + nozzle),
            Some(wye) => {
                let a = nozzle_pressure(wye.a()).map(|nozzle| friction_loss(wye.a()) + nozzle);
                let b = nozzle_pressure(wye.b()).map(|nozzle| friction_loss(wye.b()) + nozzle);
                a.zip(b).map(|(a, b)| main_loss + a.max(b))
            }
        }
        .map(|discharge| discharge + elevation);

        Self {
            main_loss,
            branch_loss,
            friction_loss: friction,
            elevation,
            total: friction + elevation,
            pump_discharge,
            total_length: total_length(configuration.segments()).into_inner(),
        }
    }
}

fn nozzle_pressure(segment: &LineSegment) -> Option<Pressure> {
    segment.nozzle().map(|nozzle| nozzle.pressure.into_inner())
}
