// SPDX-License-Identifier: MPL-2.0
//! Drop zone state, messages and update logic.

use super::preview::ImagePreviews;
use super::view;
use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::fluent::I18n;
use crate::intake::{
    AcceptFile, InputEvent, Intake, Outbox, Outcome, PreviewStatus, RawFile, RejectReason,
    SelectedFile,
};
use iced::{Element, Task};

/// Fallback key when the factory recorded no specific failure.
const PREVIEW_ERROR_KEY: &str = "notification-preview-error-decode";

#[derive(Debug, Clone)]
pub enum Message {
    /// Input translated by the drop target, or a picker result.
    Input(InputEvent),
}

/// Side effects the host has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the native file picker and answer with
    /// [`InputEvent::PickerClosed`].
    OpenFilePicker,
    /// A dropped or picked file was refused.
    Rejected { name: String, reason: RejectReason },
    /// The file was selected but has no preview.
    PreviewFailed { name: String, key: &'static str },
}

/// Drop zone component state.
///
/// `M` is the host message produced for each accepted selection.
#[derive(Debug)]
pub struct State<M> {
    intake: Intake<ImagePreviews, Outbox<M>>,
}

impl<M: Send + 'static> State<M> {
    /// Binds the selection mapping for the component's whole lifetime.
    #[must_use]
    pub fn new(on_selection: fn(SelectedFile) -> M) -> Self {
        Self {
            intake: Intake::new(ImagePreviews::new(), Outbox::new(on_selection)),
        }
    }

    #[must_use]
    pub fn with_diagnostics(self, handle: DiagnosticsHandle) -> Self {
        let Self { intake } = self;
        Self {
            intake: intake.with_diagnostics(handle),
        }
    }

    pub fn set_acceptance(&mut self, accept: impl AcceptFile + 'static) {
        self.intake.set_acceptance(accept);
    }

    #[must_use]
    pub fn intake(&self) -> &Intake<ImagePreviews, Outbox<M>> {
        &self.intake
    }

    /// Releases the preview and forgets the file.
    pub fn teardown(&mut self) {
        self.intake.teardown();
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<M>) {
        let Message::Input(event) = message;

        let first_name = match &event {
            InputEvent::Drop(files) | InputEvent::PickerClosed(Some(files)) => {
                files.first().map(RawFile::display_name)
            }
            _ => None,
        };

        let effect = match self.intake.handle(event) {
            Outcome::PickerRequested => Effect::OpenFilePicker,
            Outcome::Rejected(reason) => Effect::Rejected {
                name: first_name.unwrap_or_default(),
                reason,
            },
            Outcome::Selected {
                name,
                preview: PreviewStatus::Failed(_),
            } => Effect::PreviewFailed {
                name,
                key: self
                    .intake
                    .factory()
                    .last_error_key()
                    .unwrap_or(PREVIEW_ERROR_KEY),
            },
            _ => Effect::None,
        };

        let selections = self.intake.sink_mut().drain();
        let task = if selections.is_empty() {
            Task::none()
        } else {
            Task::batch(selections.into_iter().map(Task::done))
        };

        (effect, task)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(
            view::ViewContext {
                state: self.intake.state(),
                preview: self.intake.preview().map(|handle| handle.resource()),
            },
            i18n,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::MaxFileSize;
    use crate::intake::{AcceptRules, WidgetState};
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    #[derive(Debug)]
    enum Host {
        Picked(SelectedFile),
    }

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(4, 4, Rgba([200, 0, 0, 255]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .expect("encode png");
        buf
    }

    fn input(event: InputEvent) -> Message {
        Message::Input(event)
    }

    #[test]
    fn click_requests_picker() {
        let mut state = State::new(Host::Picked);
        let (effect, _) = state.update(input(InputEvent::Click));
        assert_eq!(effect, Effect::OpenFilePicker);
        assert!(state.intake().is_picker_open());
    }

    #[test]
    fn picked_image_is_selected_with_preview() {
        let mut state = State::new(Host::Picked);
        state.update(input(InputEvent::Click));

        let files = vec![RawFile::from_bytes("red.png", png_bytes())];
        let (effect, _) = state.update(input(InputEvent::PickerClosed(Some(files))));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.intake().state(), WidgetState::FileLoaded);
        assert!(state.intake().preview().is_some());
        assert_eq!(state.intake().sink().pending(), 0, "selection was drained");
    }

    #[test]
    fn undecodable_file_reports_preview_failure() {
        let mut state = State::new(Host::Picked);
        let (effect, _) = state.update(input(InputEvent::Drop(vec![RawFile::from_bytes(
            "broken.png",
            vec![1u8, 2, 3],
        )])));

        assert_eq!(
            effect,
            Effect::PreviewFailed {
                name: "broken.png".to_string(),
                key: "notification-preview-error-decode",
            }
        );
        assert_eq!(state.intake().state(), WidgetState::FileLoaded);
        assert!(state.intake().preview().is_none());
    }

    #[test]
    fn rejection_names_the_first_file() {
        let mut state = State::new(Host::Picked);
        state.set_acceptance(AcceptRules::images().with_max_size(MaxFileSize::new(1)));

        let (effect, _) = state.update(input(InputEvent::Drop(vec![
            RawFile::from_bytes("report.pdf", vec![0u8; 8]),
            RawFile::from_bytes("red.png", png_bytes()),
        ])));

        match effect {
            Effect::Rejected { name, reason } => {
                assert_eq!(name, "report.pdf");
                assert!(matches!(reason, RejectReason::UnsupportedType { .. }));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(state.intake().state(), WidgetState::Idle);
    }

    #[test]
    fn teardown_releases_preview() {
        let mut state = State::new(Host::Picked);
        state.update(input(InputEvent::Drop(vec![RawFile::from_bytes(
            "red.png",
            png_bytes(),
        )])));
        assert_eq!(state.intake().factory().live(), 1);

        state.teardown();
        assert_eq!(state.intake().factory().live(), 0);
        assert!(state.intake().selected().is_none());
    }
}
