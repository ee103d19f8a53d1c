//! Event-driven editor for a hose lay.
//!
//! The [`EditorCoordinator`] owns the configuration being edited. Callers feed
//! it [`EditorEvent`]s, either directly through
//! [`dispatch`](EditorCoordinator::dispatch) or over a channel, and subscribers
//! receive a [`Notification`] for every event: either the recomputed
//! pressures or the reason the edit was refused.
//!
//! ```
//! use hoselay_models::models::hydraulics::{
//!     editor::{EditorConfig, EditorCoordinator, EditorEvent, Notification},
//!     hose_lay::{FieldValue, HoseDiameter, SegmentKey},
//! };
//!
//! let mut editor = EditorCoordinator::from_config(&EditorConfig::default()).unwrap();
//! let updates = editor.subscribe();
//!
//! editor
//!     .dispatch(EditorEvent::SetField {
//!         segment: SegmentKey::Main,
//!         value: FieldValue::Diameter(HoseDiameter::TwoAndHalf),
//!     })
//!     .unwrap();
//! editor.dispatch(EditorEvent::ToggleWye { enabled: true }).unwrap();
//!
//! let last = updates.try_iter().last().unwrap();
//! assert!(matches!(
//!     last,
//!     Notification::Recalculated(snapshot) if snapshot.results.branch_loss.is_some()
//! ));
//! ```

mod catalog;
mod config;
mod coordinator;
mod event;
mod notification;

pub use catalog::NozzleCatalog;
pub use config::{ConfigError, EditorConfig, MainLineConfig, NozzleConfig};
pub use coordinator::EditorCoordinator;
pub use event::EditorEvent;
pub use notification::{Notification, Snapshot};
