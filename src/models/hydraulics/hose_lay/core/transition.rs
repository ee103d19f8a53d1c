//! Configuration transitions.
//!
//! Every transition takes the current [`EditState`] by reference and either
//! returns a new state or reports why it was refused. The current state is
//! never touched, so a refused edit cannot leave anything half applied.

use super::{
    Configuration, EditError, HoseDiameter, IllegalConfiguration, LayState, LineSegment, Nozzle,
    SegmentKey, Wye,
    rules::{can_edit_branch, can_enable_wye, forced_branch_diameter},
    segment::{flow_rate_from_gpm, length_from_feet},
};

/// A new value for one field of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Flow rate in gallons per minute.
    FlowRate(f64),
    /// Length in feet.
    Length(f64),
    Diameter(HoseDiameter),
}

/// A configuration together with the segment the user is focused on.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    configuration: Configuration,
    active: SegmentKey,
}

impl EditState {
    /// Starts editing a configuration with the main line focused.
    ///
    /// Any branches in the configuration are kept; the focus always starts on
    /// the main line.
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            active: SegmentKey::Main,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn active(&self) -> SegmentKey {
        self.active
    }

    #[must_use]
    pub fn into_configuration(self) -> Configuration {
        self.configuration
    }

    /// Sets one field of one segment.
    ///
    /// Changing the main line to anything but 2.5″ while a Wye is in place
    /// removes the Wye and its branches. Branch diameters are fixed, so
    /// setting one is only accepted when it matches the forced diameter.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidInput`] for a negative or non-finite value
    /// and [`EditError::IllegalConfiguration`] for an unavailable branch or a
    /// branch diameter other than the forced one.
    pub fn set_field(&self, segment: SegmentKey, value: FieldValue) -> Result<Self, EditError> {
        if segment.is_branch() {
            self.check_branch_editable(segment)?;
        }

        let mut next = self.clone();
        match (segment, value) {
            (SegmentKey::Main, FieldValue::Diameter(diameter)) => {
                next.configuration.main_mut().set_diameter(diameter);
                if next.configuration.wye_enabled() && !can_enable_wye(diameter) {
                    next.drop_wye();
                }
            }
            (_, FieldValue::Diameter(requested)) => {
                let forced = forced_branch_diameter();
                if requested != forced {
                    return Err(
                        IllegalConfiguration::BranchDiameterForced { requested, forced }.into(),
                    );
                }
            }
            (_, FieldValue::FlowRate(gpm)) => {
                let flow_rate = flow_rate_from_gpm(gpm)?;
                next.segment_mut(segment)?.set_flow_rate(flow_rate);
            }
            (_, FieldValue::Length(feet)) => {
                let length = length_from_feet(feet)?;
                next.segment_mut(segment)?.set_length(length);
            }
        }
        Ok(next)
    }

    /// Enables or removes the Wye.
    ///
    /// Enabling creates two empty branches at the forced diameter and removes
    /// any nozzle from the main line, which now feeds the Wye. Enabling an
    /// existing Wye leaves it as it is.
    ///
    /// Removing the Wye discards both branches and returns focus to the main
    /// line. It is always allowed.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalConfiguration::WyeRequiresTwoAndHalfMain`] when enabling
    /// on any main line other than 2.5″.
    pub fn toggle_wye(&self, enabled: bool) -> Result<Self, EditError> {
        let mut next = self.clone();
        match (enabled, self.configuration.state()) {
            (true, LayState::WyeReady) | (false, LayState::NoWye) => {}
            (true, LayState::NoWye) => {
                let main = self.configuration.main().diameter();
                if !can_enable_wye(main) {
                    return Err(IllegalConfiguration::WyeRequiresTwoAndHalfMain { main }.into());
                }
                next.configuration.main_mut().set_nozzle(None);
                next.configuration.set_wye(Some(Wye::new()));
            }
            (false, LayState::WyeReady) => next.drop_wye(),
        }
        Ok(next)
    }

    /// Moves the focus to another segment without changing any values.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalConfiguration::BranchUnavailable`] for a branch that
    /// cannot be edited.
    pub fn select_active_segment(&self, segment: SegmentKey) -> Result<Self, EditError> {
        if segment.is_branch() {
            self.check_branch_editable(segment)?;
        }
        Ok(Self {
            configuration: self.configuration.clone(),
            active: segment,
        })
    }

    /// Sets the elevation change in feet; negative is downhill.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidInput`] for a non-finite elevation.
    pub fn set_elevation(&self, feet: f64) -> Result<Self, EditError> {
        Ok(Self {
            configuration: self.configuration.clone().with_elevation_ft(feet)?,
            active: self.active,
        })
    }

    /// Attaches a nozzle to a discharge line, or removes it with `None`.
    ///
    /// The line takes on the nozzle's rated flow.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalConfiguration::NozzleOnWyeMain`] for the main line
    /// while a Wye is in place, and [`IllegalConfiguration::BranchUnavailable`]
    /// for a branch that cannot be edited.
    pub fn assign_nozzle(
        &self,
        segment: SegmentKey,
        nozzle: Option<Nozzle>,
    ) -> Result<Self, EditError> {
        if segment.is_branch() {
            self.check_branch_editable(segment)?;
        } else if self.configuration.wye_enabled() {
            return Err(IllegalConfiguration::NozzleOnWyeMain.into());
        }

        let mut next = self.clone();
        next.segment_mut(segment)?.set_nozzle(nozzle);
        Ok(next)
    }

    fn check_branch_editable(&self, segment: SegmentKey) -> Result<(), IllegalConfiguration> {
        let configuration = &self.configuration;
        if can_edit_branch(configuration.wye_enabled(), configuration.main().diameter()) {
            Ok(())
        } else {
            Err(IllegalConfiguration::BranchUnavailable { segment })
        }
    }

    fn segment_mut(
        &mut self,
        segment: SegmentKey,
    ) -> Result<&mut LineSegment, IllegalConfiguration> {
        self.configuration
            .segment_mut(segment)
            .ok_or(IllegalConfiguration::BranchUnavailable { segment })
    }

    fn drop_wye(&mut self) {
        self.configuration.set_wye(None);
        if self.active.is_branch() {
            self.active = SegmentKey::Main;
        }
    }
}
