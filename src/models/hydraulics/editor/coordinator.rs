use crossbeam_channel::{Receiver, Sender, TrySendError};
use tracing::{debug, trace, warn};
use twine_core::Model;
use uom::si::pressure::pound_force_per_square_inch;

use crate::models::hydraulics::hose_lay::{
    Configuration, EditError, EditState, HoseLay, InvalidInput, PressureResults,
};

use super::{EditorConfig, EditorEvent, Notification, NozzleCatalog, Snapshot};

const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Applies editor events to a hose lay and publishes the results.
///
/// The coordinator is the single writer of its configuration. Share it across
/// threads behind a lock, or feed it from a channel with
/// [`run`](Self::run).
#[derive(Debug)]
pub struct EditorCoordinator {
    state: EditState,
    initial: EditState,
    catalog: NozzleCatalog,
    model: HoseLay,
    subscribers: Vec<Sender<Notification>>,
    channel_capacity: usize,
}

impl EditorCoordinator {
    /// Creates a coordinator editing `initial`, with nozzles from `catalog`.
    #[must_use]
    pub fn new(initial: Configuration, catalog: NozzleCatalog) -> Self {
        let initial = EditState::new(initial);
        Self {
            state: initial.clone(),
            initial,
            catalog,
            model: HoseLay,
            subscribers: Vec::new(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Creates a coordinator from editor settings.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInput`] if the default main line, elevation or any
    /// nozzle in the settings is invalid.
    pub fn from_config(config: &EditorConfig) -> Result<Self, InvalidInput> {
        let initial = config.initial_state()?;
        let catalog = config.catalog()?;
        debug!(
            nozzles = catalog.len(),
            channel_capacity = config.channel_capacity,
            "editor configured"
        );

        Ok(Self::new(initial.into_configuration(), catalog)
            .with_channel_capacity(config.channel_capacity))
    }

    /// Sets the capacity of channels handed out by [`subscribe`](Self::subscribe).
    ///
    /// A capacity of zero is raised to one so the current snapshot can always
    /// be delivered.
    #[must_use]
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    #[must_use]
    pub fn state(&self) -> &EditState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &NozzleCatalog {
        &self.catalog
    }

    /// Pressures for the current configuration.
    #[must_use]
    pub fn results(&self) -> PressureResults {
        match self.model.call(self.state.configuration()) {
            Ok(results) => results,
            Err(never) => match never {},
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.state.configuration().clone(),
            self.state.active(),
            self.results(),
        )
    }

    /// Opens a notification channel, primed with the current snapshot.
    pub fn subscribe(&mut self) -> Receiver<Notification> {
        let (tx, rx) = crossbeam_channel::bounded(self.channel_capacity);
        if tx
            .try_send(Notification::Recalculated(self.snapshot()))
            .is_ok()
        {
            self.subscribers.push(tx);
        }
        rx
    }

    /// Applies one event and notifies subscribers of the outcome.
    ///
    /// # Errors
    ///
    /// Returns the [`EditError`] that refused the event. The configuration is
    /// left exactly as it was.
    pub fn dispatch(&mut self, event: EditorEvent) -> Result<Snapshot, EditError> {
        let name = event.name();
        match self.apply(event) {
            Ok(next) => {
                self.state = next;
                let snapshot = self.snapshot();
                debug!(
                    event = name,
                    active = %snapshot.active,
                    wye = snapshot.configuration.wye_enabled(),
                    total_psi = snapshot.results.total.get::<pound_force_per_square_inch>(),
                    "applied editor event"
                );
                self.publish(&Notification::Recalculated(snapshot.clone()));
                Ok(snapshot)
            }
            Err(error) => {
                warn!(event = name, %error, "rejected editor event");
                self.publish(&Notification::Rejected {
                    event: name,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    /// Applies every event already waiting on `events` and returns how many
    /// were handled. Rejections are reported to subscribers, not returned.
    pub fn drain(&mut self, events: &Receiver<EditorEvent>) -> usize {
        events
            .try_iter()
            .map(|event| {
                let _ = self.dispatch(event);
            })
            .count()
    }

    /// Applies events until every sender of `events` has been dropped.
    pub fn run(&mut self, events: &Receiver<EditorEvent>) {
        for event in events {
            let _ = self.dispatch(event);
        }
        debug!("editor event channel closed");
    }

    fn apply(&self, event: EditorEvent) -> Result<EditState, EditError> {
        let state = &self.state;
        match event {
            EditorEvent::SetField { segment, value } => state.set_field(segment, value),
            EditorEvent::ToggleWye { enabled } => state.toggle_wye(enabled),
            EditorEvent::SelectActiveSegment { segment } => state.select_active_segment(segment),
            EditorEvent::SetElevation { feet } => state.set_elevation(feet),
            EditorEvent::AssignNozzle { segment, nozzle_id } => {
                let nozzle = nozzle_id
                    .map(|id| self.catalog.resolve(&id))
                    .transpose()?;
                state.assign_nozzle(segment, nozzle)
            }
            EditorEvent::Reset => Ok(self.initial.clone()),
        }
    }

    fn publish(&mut self, notification: &Notification) {
        self.subscribers
            .retain(|tx| match tx.try_send(notification.clone()) {
                Ok(()) => true,
                Err(TrySendError::Full(_)) => {
                    warn!("subscriber queue is full; dropping notification");
                    true
                }
                Err(TrySendError::Disconnected(_)) => {
                    trace!("subscriber disconnected");
                    false
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::foot, volume_rate::gallon_per_minute};

    use crate::models::hydraulics::{
        editor::NozzleConfig,
        hose_lay::{
            FieldValue, HoseDiameter, IllegalConfiguration, LayState, SegmentKey,
            forced_branch_diameter,
        },
    };

    fn psi(pressure: uom::si::f64::Pressure) -> f64 {
        pressure.get::<pound_force_per_square_inch>()
    }

    fn config_with_nozzles() -> EditorConfig {
        EditorConfig {
            nozzles: vec![
                NozzleConfig {
                    id: "fog-150".into(),
                    label: "Fog 150 gpm @ 100 psi".into(),
                    flow_gpm: 150.0,
                    pressure_psi: 100.0,
                },
                NozzleConfig {
                    id: "smooth-7/8".into(),
                    label: "7/8\" smoothbore".into(),
                    flow_gpm: 160.0,
                    pressure_psi: 50.0,
                },
            ],
            ..EditorConfig::default()
        }
    }

    fn recalculated(notification: Notification) -> Snapshot {
        match notification {
            Notification::Recalculated(snapshot) => snapshot,
            Notification::Rejected { event, error } => {
                panic!("expected a recalculation, {event} was rejected: {error}")
            }
        }
    }

    fn wye_editor() -> EditorCoordinator {
        let mut editor = EditorCoordinator::from_config(&config_with_nozzles()).unwrap();
        editor
            .dispatch(EditorEvent::SetField {
                segment: SegmentKey::Main,
                value: FieldValue::Diameter(HoseDiameter::TwoAndHalf),
            })
            .unwrap();
        editor
            .dispatch(EditorEvent::ToggleWye { enabled: true })
            .unwrap();
        editor
    }

    #[test]
    fn default_config_matches_attack_line_scenario() {
        let editor = EditorCoordinator::from_config(&EditorConfig::default()).unwrap();
        let snapshot = editor.snapshot();

        assert_eq!(snapshot.active, SegmentKey::Main);
        assert!(!snapshot.branch_controls_visible);
        assert_relative_eq!(psi(snapshot.results.total), 69.75, epsilon = 1e-9);
    }

    #[test]
    fn subscribers_get_current_state_then_updates() {
        let mut editor = EditorCoordinator::from_config(&EditorConfig::default()).unwrap();
        let updates = editor.subscribe();

        let first = recalculated(updates.try_recv().unwrap());
        assert_eq!(first, editor.snapshot());

        editor
            .dispatch(EditorEvent::SetElevation { feet: -20.0 })
            .unwrap();
        let second = recalculated(updates.try_recv().unwrap());
        assert_relative_eq!(psi(second.results.elevation), -8.68, epsilon = 1e-9);
        assert_relative_eq!(psi(second.results.total), 69.75 - 8.68, epsilon = 1e-9);
        assert!(updates.try_recv().is_err());
    }

    #[test]
    fn rejected_wye_is_reported_and_changes_nothing() {
        let mut editor = EditorCoordinator::from_config(&EditorConfig::default()).unwrap();
        let updates = editor.subscribe();
        let _ = updates.try_recv();
        let before = editor.state().clone();

        let err = editor
            .dispatch(EditorEvent::ToggleWye { enabled: true })
            .unwrap_err();

        let expected = EditError::IllegalConfiguration(
            IllegalConfiguration::WyeRequiresTwoAndHalfMain {
                main: HoseDiameter::OneAndThreeQuarter,
            },
        );
        assert_eq!(err, expected);
        assert_eq!(editor.state(), &before);
        assert_eq!(
            updates.try_recv().unwrap(),
            Notification::Rejected {
                event: "toggle_wye",
                error: expected,
            }
        );
    }

    #[test]
    fn wye_shows_branch_controls_with_forced_diameter() {
        let editor = wye_editor();
        let snapshot = editor.snapshot();

        assert!(snapshot.branch_controls_visible);
        assert_eq!(snapshot.configuration.state(), LayState::WyeReady);
        for key in [SegmentKey::A, SegmentKey::B] {
            let branch = snapshot.configuration.segment(key).unwrap();
            assert_eq!(branch.diameter(), forced_branch_diameter());
            assert_eq!(branch.flow_rate().get::<gallon_per_minute>(), 0.0);
            assert_eq!(branch.length().get::<foot>(), 0.0);
        }
        let branches = snapshot.results.branch_loss.unwrap();
        assert_eq!(psi(branches.a), 0.0);
        assert_eq!(psi(branches.b), 0.0);
    }

    #[test]
    fn shrinking_main_hides_branch_controls() {
        let mut editor = wye_editor();
        editor
            .dispatch(EditorEvent::SelectActiveSegment {
                segment: SegmentKey::A,
            })
            .unwrap();

        let snapshot = editor
            .dispatch(EditorEvent::SetField {
                segment: SegmentKey::Main,
                value: FieldValue::Diameter(HoseDiameter::Five),
            })
            .unwrap();

        assert!(!snapshot.branch_controls_visible);
        assert_eq!(snapshot.active, SegmentKey::Main);
        assert_eq!(snapshot.results.branch_loss, None);
        assert!(
            editor
                .dispatch(EditorEvent::SelectActiveSegment {
                    segment: SegmentKey::B,
                })
                .is_err()
        );
    }

    #[test]
    fn nozzles_come_from_the_injected_catalog() {
        let mut editor = wye_editor();

        let err = editor
            .dispatch(EditorEvent::AssignNozzle {
                segment: SegmentKey::A,
                nozzle_id: Some("piercing".into()),
            })
            .unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidInput(InvalidInput::UnknownNozzle {
                id: "piercing".into()
            })
        );

        for (segment, id) in [(SegmentKey::A, "fog-150"), (SegmentKey::B, "smooth-7/8")] {
            editor
                .dispatch(EditorEvent::AssignNozzle {
                    segment,
                    nozzle_id: Some(id.into()),
                })
                .unwrap();
        }

        // Branches have no length yet, so the 100 psi fog governs over the
        // 50 psi smoothbore. Main: 2.0 × 1.5² × 2 = 9 psi.
        let results = editor.results();
        assert_relative_eq!(psi(results.main_loss), 9.0, epsilon = 1e-9);
        assert_relative_eq!(
            psi(results.pump_discharge.unwrap()),
            109.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn reset_restores_configured_start() {
        let mut editor = wye_editor();
        editor
            .dispatch(EditorEvent::SetElevation { feet: 40.0 })
            .unwrap();

        let snapshot = editor.dispatch(EditorEvent::Reset).unwrap();

        let fresh = EditorCoordinator::from_config(&config_with_nozzles()).unwrap();
        assert_eq!(snapshot, fresh.snapshot());
    }

    #[test]
    fn drain_and_run_consume_channel_events() {
        let mut editor = EditorCoordinator::from_config(&EditorConfig::default()).unwrap();
        let updates = editor.subscribe();
        let (events_tx, events_rx) = crossbeam_channel::unbounded();

        events_tx
            .send(EditorEvent::SetField {
                segment: SegmentKey::Main,
                value: FieldValue::Length(100.0),
            })
            .unwrap();
        events_tx
            .send(EditorEvent::SetField {
                segment: SegmentKey::B,
                value: FieldValue::Length(100.0),
            })
            .unwrap();
        assert_eq!(editor.drain(&events_rx), 2);

        events_tx
            .send(EditorEvent::SetField {
                segment: SegmentKey::Main,
                value: FieldValue::FlowRate(200.0),
            })
            .unwrap();
        drop(events_tx);
        editor.run(&events_rx);

        let notifications: Vec<_> = updates.try_iter().collect();
        assert_eq!(notifications.len(), 4);
        assert!(matches!(
            notifications[2],
            Notification::Rejected {
                event: "set_field",
                ..
            }
        ));

        // 200 gpm through 100 ft of 1.75": 15.5 × 2² × 1
        let last = recalculated(notifications[3].clone());
        assert_relative_eq!(psi(last.results.total), 62.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_capacity_still_delivers_the_current_snapshot() {
        let mut editor = EditorCoordinator::from_config(&EditorConfig {
            channel_capacity: 0,
            ..EditorConfig::default()
        })
        .unwrap();
        let updates = editor.subscribe();

        assert_eq!(
            updates.try_recv().unwrap(),
            Notification::Recalculated(editor.snapshot())
        );
        assert_eq!(editor.subscribers.len(), 1);

        editor
            .dispatch(EditorEvent::SetElevation { feet: 10.0 })
            .unwrap();
        assert!(matches!(
            updates.try_recv().unwrap(),
            Notification::Recalculated(_)
        ));
    }

    #[test]
    fn full_or_closed_subscribers_do_not_block_edits() {
        let mut editor = EditorCoordinator::from_config(&EditorConfig::default())
            .unwrap()
            .with_channel_capacity(1);
        let full = editor.subscribe();
        let closed = editor.subscribe();
        drop(closed);

        editor
            .dispatch(EditorEvent::SetElevation { feet: 10.0 })
            .unwrap();
        editor
            .dispatch(EditorEvent::SetElevation { feet: 20.0 })
            .unwrap();

        assert_eq!(full.try_iter().count(), 1);
        assert_eq!(editor.subscribers.len(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EditorConfig {
            default_main: crate::models::hydraulics::editor::MainLineConfig {
                diameter: "1.5".into(),
                ..Default::default()
            },
            ..EditorConfig::default()
        };
        assert_eq!(
            EditorCoordinator::from_config(&config).unwrap_err(),
            InvalidInput::UnknownDiameter { tag: "1.5".into() }
        );
    }
}
