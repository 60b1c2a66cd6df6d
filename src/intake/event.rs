// SPDX-License-Identifier: MPL-2.0
//! Input events and per-event outcomes.

use super::file::RawFile;
use super::preview::PreviewId;
use super::state::WidgetState;
use super::validator::RejectReason;

/// Raw input fed to the intake widget.
///
/// Drag events are assumed to be scoped to the widget already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    DragEnter,
    DragOver,
    DragLeave,
    /// Files released over the widget. May be empty.
    Drop(Vec<RawFile>),
    /// Explicit press on the click target.
    Click,
    /// The file picker closed. `None` means the user cancelled.
    PickerClosed(Option<Vec<RawFile>>),
}

impl InputEvent {
    /// Convenience for a single dropped path.
    pub fn drop_path(path: impl Into<std::path::PathBuf>) -> Self {
        InputEvent::Drop(vec![RawFile::from_path(path)])
    }
}

/// Preview status of an accepted selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewStatus {
    Ready(PreviewId),
    /// Creation failed; the selection stands regardless.
    Failed(String),
}

impl PreviewStatus {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, PreviewStatus::Ready(_))
    }
}

/// What handling one [`InputEvent`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// Only the interaction state changed.
    Transitioned { from: WidgetState, to: WidgetState },
    /// The host should open its file picker and report back with
    /// [`InputEvent::PickerClosed`].
    PickerRequested,
    /// A drop or pick carried no file.
    Empty,
    /// The first file was refused.
    Rejected(RejectReason),
    /// A file was accepted and the sink notified.
    Selected { name: String, preview: PreviewStatus },
}

impl Outcome {
    #[must_use]
    pub fn is_selection(&self) -> bool {
        matches!(self, Outcome::Selected { .. })
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&RejectReason> {
        match self {
            Outcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}
