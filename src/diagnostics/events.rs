// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for intake activity.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// What happened inside an intake widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Interaction state changed.
    StateChanged { from: String, to: String },
    /// The host file picker was requested.
    PickerOpened,
    /// The picker closed without a file.
    PickerCancelled,
    /// A candidate file was refused.
    FileRejected { reason: String },
    /// A preview resource was created.
    PreviewCreated { preview_id: u64 },
    /// A preview resource was released.
    PreviewReleased { preview_id: u64 },
    /// Preview creation failed (the selection still stands).
    PreviewFailed { message: String },
    /// The selection sink was notified.
    SelectionNotified { media_type: String, size_bytes: u64 },
}

impl DiagnosticEventKind {
    /// Short snake_case label, matching the serialized `type` tag.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticEventKind::StateChanged { .. } => "state_changed",
            DiagnosticEventKind::PickerOpened => "picker_opened",
            DiagnosticEventKind::PickerCancelled => "picker_cancelled",
            DiagnosticEventKind::FileRejected { .. } => "file_rejected",
            DiagnosticEventKind::PreviewCreated { .. } => "preview_created",
            DiagnosticEventKind::PreviewReleased { .. } => "preview_released",
            DiagnosticEventKind::PreviewFailed { .. } => "preview_failed",
            DiagnosticEventKind::SelectionNotified { .. } => "selection_notified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_with_type_tag() {
        let kind = DiagnosticEventKind::PreviewCreated { preview_id: 3 };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert_eq!(json, r#"{"type":"preview_created","preview_id":3}"#);
    }

    #[test]
    fn kind_round_trips() {
        let kind = DiagnosticEventKind::SelectionNotified {
            media_type: "image/png".into(),
            size_bytes: 10,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        let back: DiagnosticEventKind =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, kind);
    }

    #[test]
    fn label_matches_serialized_tag() {
        let kind = DiagnosticEventKind::PickerCancelled;
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains(kind.label()));
    }
}
