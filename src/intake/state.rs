// SPDX-License-Identifier: MPL-2.0
//! Widget interaction state.

use std::fmt;

/// The single active interaction state of an intake widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Nothing loaded, no drag in progress.
    #[default]
    Idle,
    /// Files are being dragged over the widget.
    DragActive,
    /// A file has been accepted and is being previewed.
    FileLoaded,
}

impl WidgetState {
    /// Returns true when the preview (rather than the prompt) is rendered.
    ///
    /// A drag over a held file shows the prompt until it leaves or drops.
    #[must_use]
    pub fn shows_preview(self) -> bool {
        matches!(self, WidgetState::FileLoaded)
    }

    /// Returns true while a drag gesture hovers the widget.
    #[must_use]
    pub fn is_drag_active(self) -> bool {
        matches!(self, WidgetState::DragActive)
    }

    /// Resting state for a widget that does or does not hold a file.
    ///
    /// Drag-leave, empty drops and rejected drops all fall back here.
    #[must_use]
    pub fn resting(has_file: bool) -> Self {
        if has_file {
            WidgetState::FileLoaded
        } else {
            WidgetState::Idle
        }
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WidgetState::Idle => "idle",
            WidgetState::DragActive => "drag-active",
            WidgetState::FileLoaded => "file-loaded",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(WidgetState::default(), WidgetState::Idle);
    }

    #[test]
    fn only_file_loaded_shows_preview() {
        assert!(WidgetState::FileLoaded.shows_preview());
        assert!(!WidgetState::Idle.shows_preview());
        assert!(!WidgetState::DragActive.shows_preview());
    }

    #[test]
    fn resting_state_depends_on_held_file() {
        assert_eq!(WidgetState::resting(false), WidgetState::Idle);
        assert_eq!(WidgetState::resting(true), WidgetState::FileLoaded);
    }

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(WidgetState::DragActive.to_string(), "drag-active");
    }
}
