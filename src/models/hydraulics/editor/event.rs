use crate::models::hydraulics::hose_lay::{FieldValue, SegmentKey};

/// A user action sent to the editor.
///
/// Events carry plain values; checking them is the coordinator's job.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    SetField {
        segment: SegmentKey,
        value: FieldValue,
    },
    ToggleWye {
        enabled: bool,
    },
    SelectActiveSegment {
        segment: SegmentKey,
    },
    SetElevation {
        feet: f64,
    },
    /// Attach the catalog nozzle with this id, or detach with `None`.
    AssignNozzle {
        segment: SegmentKey,
        nozzle_id: Option<String>,
    },
    /// Return to the configured starting layout.
    Reset,
}

impl EditorEvent {
    /// Short name used in logs and rejection notices.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetField { .. } => "set_field",
            Self::ToggleWye { .. } => "toggle_wye",
            Self::SelectActiveSegment { .. } => "select_active_segment",
            Self::SetElevation { .. } => "set_elevation",
            Self::AssignNozzle { .. } => "assign_nozzle",
            Self::Reset => "reset",
        }
    }
}
