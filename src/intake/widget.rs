// SPDX-License-Identifier: MPL-2.0
//! The intake controller: event interpretation, selection and preview
//! supersession in one synchronous handler.

use super::event::{InputEvent, Outcome, PreviewStatus};
use super::file::{RawFile, SelectedFile};
use super::notify::SelectionSink;
use super::preview::{PreviewFactory, PreviewHandle, PreviewSlot};
use super::state::WidgetState;
use super::validator::{evaluate, AcceptAll, AcceptFile, Verdict};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use std::fmt;

/// Single-file intake widget, independent of any UI toolkit.
///
/// Every call to [`Intake::handle`] settles completely (state, file,
/// preview, notification) before returning.
pub struct Intake<F: PreviewFactory, S: SelectionSink> {
    state: WidgetState,
    file: Option<SelectedFile>,
    preview: PreviewSlot<F>,
    preview_error: Option<String>,
    accept: Box<dyn AcceptFile>,
    sink: S,
    picker_open: bool,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<F: PreviewFactory, S: SelectionSink> Intake<F, S> {
    /// Creates an idle widget that accepts any readable file.
    ///
    /// `sink` is bound for the widget's whole lifetime.
    pub fn new(factory: F, sink: S) -> Self {
        Self {
            state: WidgetState::Idle,
            file: None,
            preview: PreviewSlot::new(factory),
            preview_error: None,
            accept: Box::new(AcceptAll),
            sink,
            picker_open: false,
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn with_acceptance(mut self, accept: impl AcceptFile + 'static) -> Self {
        self.set_acceptance(accept);
        self
    }

    /// Replaces the acceptance predicate. Applies to the next drop or pick.
    pub fn set_acceptance(&mut self, accept: impl AcceptFile + 'static) {
        self.accept = Box::new(accept);
    }

    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// The currently held file, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// The live preview, if the last selection produced one.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewHandle<F::Resource>> {
        self.preview.current()
    }

    /// Why the preview of the current file could not be created.
    #[must_use]
    pub fn preview_error(&self) -> Option<&str> {
        self.preview_error.as_deref()
    }

    #[must_use]
    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        self.preview.factory()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Processes one input event.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::DragEnter | InputEvent::DragOver => {
                if self.state.is_drag_active() {
                    Outcome::Ignored
                } else {
                    self.transition(WidgetState::DragActive)
                }
            }
            InputEvent::DragLeave => {
                if self.state.is_drag_active() {
                    self.transition(self.resting())
                } else {
                    Outcome::Ignored
                }
            }
            InputEvent::Drop(files) => self.ingest(files),
            InputEvent::Click => {
                if self.state.is_drag_active() || self.picker_open {
                    return Outcome::Ignored;
                }
                self.picker_open = true;
                self.report(DiagnosticEventKind::PickerOpened);
                log::debug!("intake: file picker requested");
                Outcome::PickerRequested
            }
            InputEvent::PickerClosed(result) => {
                self.picker_open = false;
                match result {
                    Some(files) if !files.is_empty() => self.ingest(files),
                    _ => {
                        self.report(DiagnosticEventKind::PickerCancelled);
                        log::debug!("intake: file picker cancelled");
                        Outcome::Ignored
                    }
                }
            }
        }
    }

    /// Forgets the held file, then releases the live preview last.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn teardown(&mut self) {
        self.file = None;
        self.preview_error = None;
        self.picker_open = false;
        self.state = WidgetState::Idle;
        self.release_preview();
    }

    fn ingest(&mut self, files: Vec<RawFile>) -> Outcome {
        let extra = files.len().saturating_sub(1);
        if extra > 0 {
            log::debug!("intake: ignoring {extra} extra file(s)");
        }

        match evaluate(files, self.accept.as_ref()) {
            Verdict::Empty => {
                self.settle();
                Outcome::Empty
            }
            Verdict::Rejected(reason) => {
                log::warn!("intake: {reason}");
                self.report(DiagnosticEventKind::FileRejected {
                    reason: reason.to_string(),
                });
                self.settle();
                Outcome::Rejected(reason)
            }
            Verdict::Accepted(file) => self.select(file),
        }
    }

    fn select(&mut self, file: SelectedFile) -> Outcome {
        self.release_preview();

        let preview = match self.preview.replace(&file) {
            Ok(id) => {
                self.preview_error = None;
                self.report(DiagnosticEventKind::PreviewCreated {
                    preview_id: id.value(),
                });
                PreviewStatus::Ready(id)
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("intake: preview unavailable for {}: {message}", file.name());
                self.report(DiagnosticEventKind::PreviewFailed {
                    message: message.clone(),
                });
                self.preview_error = Some(message.clone());
                PreviewStatus::Failed(message)
            }
        };

        let name = file.name().to_string();
        let media_type = file.media_type().to_string();
        let size_bytes = file.len() as u64;

        self.file = Some(file.clone());
        self.transition(WidgetState::FileLoaded);

        log::info!("intake: selected {name} ({media_type}, {size_bytes} bytes)");
        self.sink.on_selection(file);
        self.report(DiagnosticEventKind::SelectionNotified {
            media_type,
            size_bytes,
        });

        Outcome::Selected { name, preview }
    }

    fn release_preview(&mut self) {
        if let Some(id) = self.preview.release() {
            self.report(DiagnosticEventKind::PreviewReleased {
                preview_id: id.value(),
            });
        }
    }

    fn resting(&self) -> WidgetState {
        WidgetState::resting(self.file.is_some())
    }

    /// Returns to the resting state after a drop or pick that selected nothing.
    fn settle(&mut self) {
        let resting = self.resting();
        if self.state != resting {
            self.transition(resting);
        }
    }

    fn transition(&mut self, to: WidgetState) -> Outcome {
        let from = self.state;
        if from == to {
            return Outcome::Ignored;
        }
        self.state = to;
        log::debug!("intake: {from} -> {to}");
        self.report(DiagnosticEventKind::StateChanged {
            from: from.to_string(),
            to: to.to_string(),
        });
        Outcome::Transitioned { from, to }
    }

    fn report(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

impl<F: PreviewFactory, S: SelectionSink> Drop for Intake<F, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<F: PreviewFactory, S: SelectionSink> fmt::Debug for Intake<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intake")
            .field("state", &self.state)
            .field("file", &self.file)
            .field("preview", &self.preview)
            .field("preview_error", &self.preview_error)
            .field("picker_open", &self.picker_open)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
    use crate::intake::file::Candidate;
    use crate::intake::preview::PreviewId;
    use crate::intake::validator::{AcceptRules, RejectReason};

    #[derive(Debug, Default)]
    struct Counting {
        created: Vec<String>,
        released: Vec<u64>,
        fail_on: Option<&'static str>,
    }

    impl PreviewFactory for Counting {
        type Resource = String;
        type Error = String;

        fn create(&mut self, file: &SelectedFile) -> Result<String, String> {
            if self.fail_on == Some(file.name()) {
                return Err("cannot decode".to_string());
            }
            self.created.push(file.name().to_string());
            Ok(file.name().to_string())
        }

        fn release(&mut self, id: PreviewId, _resource: String) {
            self.released.push(id.value());
        }
    }

    #[derive(Debug, Default)]
    struct Names(Vec<String>);

    impl SelectionSink for Names {
        fn on_selection(&mut self, file: SelectedFile) {
            self.0.push(file.name().to_string());
        }
    }

    fn widget() -> Intake<Counting, Names> {
        Intake::new(Counting::default(), Names::default())
    }

    fn drop_of(names: &[&str]) -> InputEvent {
        InputEvent::Drop(
            names
                .iter()
                .map(|n| RawFile::from_bytes(*n, vec![1u8, 2, 3]))
                .collect(),
        )
    }

    #[test]
    fn drag_enter_then_leave_returns_to_idle() {
        let mut intake = widget();
        assert_eq!(
            intake.handle(InputEvent::DragEnter),
            Outcome::Transitioned {
                from: WidgetState::Idle,
                to: WidgetState::DragActive
            }
        );
        assert_eq!(intake.handle(InputEvent::DragOver), Outcome::Ignored);
        intake.handle(InputEvent::DragLeave);

        assert_eq!(intake.state(), WidgetState::Idle);
        assert!(intake.sink().0.is_empty());
        assert!(intake.factory().created.is_empty());
    }

    #[test]
    fn drag_over_from_idle_activates() {
        let mut intake = widget();
        assert_eq!(
            intake.handle(InputEvent::DragOver),
            Outcome::Transitioned {
                from: WidgetState::Idle,
                to: WidgetState::DragActive
            }
        );
        assert_eq!(intake.state(), WidgetState::DragActive);
    }

    #[test]
    fn drag_leave_while_idle_is_ignored() {
        let mut intake = widget();
        assert_eq!(intake.handle(InputEvent::DragLeave), Outcome::Ignored);
    }

    #[test]
    fn drop_selects_first_file_only() {
        let mut intake = widget();
        intake.handle(InputEvent::DragEnter);
        let outcome = intake.handle(drop_of(&["a.png", "b.png", "c.png"]));

        assert!(outcome.is_selection());
        assert_eq!(intake.state(), WidgetState::FileLoaded);
        assert_eq!(intake.sink().0, vec!["a.png".to_string()]);
        assert_eq!(intake.selected().map(SelectedFile::name), Some("a.png"));
    }

    #[test]
    fn empty_drop_returns_to_idle() {
        let mut intake = widget();
        intake.handle(InputEvent::DragEnter);
        assert_eq!(intake.handle(InputEvent::Drop(Vec::new())), Outcome::Empty);
        assert_eq!(intake.state(), WidgetState::Idle);
        assert!(intake.preview().is_none());
    }

    #[test]
    fn drop_without_enter_is_processed() {
        let mut intake = widget();
        assert!(intake.handle(drop_of(&["a.png"])).is_selection());
        assert_eq!(intake.state(), WidgetState::FileLoaded);
    }

    #[test]
    fn drag_over_loaded_file_keeps_it_on_leave() {
        let mut intake = widget();
        intake.handle(drop_of(&["a.png"]));
        intake.handle(InputEvent::DragEnter);
        assert_eq!(intake.state(), WidgetState::DragActive);
        assert!(intake.preview().is_some());

        intake.handle(InputEvent::DragLeave);
        assert_eq!(intake.state(), WidgetState::FileLoaded);
        assert_eq!(intake.selected().map(SelectedFile::name), Some("a.png"));
    }

    #[test]
    fn second_drop_supersedes_first() {
        let mut intake = widget();
        intake.handle(drop_of(&["one.png"]));
        let first = intake.preview().map(PreviewHandle::id).expect("first preview");
        intake.handle(drop_of(&["two.png"]));

        let factory = intake.factory();
        assert_eq!(factory.created, vec!["one.png", "two.png"]);
        assert_eq!(factory.released, vec![first.value()]);
        assert!(intake.preview().is_some_and(|p| p.id() > first));
        assert_eq!(intake.sink().0.len(), 2);
    }

    #[test]
    fn click_requests_picker_once() {
        let mut intake = widget();
        assert_eq!(intake.handle(InputEvent::Click), Outcome::PickerRequested);
        assert!(intake.is_picker_open());
        assert_eq!(intake.handle(InputEvent::Click), Outcome::Ignored);
    }

    #[test]
    fn click_while_dragging_is_ignored() {
        let mut intake = widget();
        intake.handle(InputEvent::DragEnter);
        assert_eq!(intake.handle(InputEvent::Click), Outcome::Ignored);
        assert!(!intake.is_picker_open());
    }

    #[test]
    fn cancelled_pick_has_no_effects() {
        let mut intake = widget();
        intake.handle(InputEvent::Click);
        assert_eq!(intake.handle(InputEvent::PickerClosed(None)), Outcome::Ignored);
        assert_eq!(
            intake.handle(InputEvent::PickerClosed(Some(Vec::new()))),
            Outcome::Ignored
        );

        assert_eq!(intake.state(), WidgetState::Idle);
        assert!(!intake.is_picker_open());
        assert!(intake.sink().0.is_empty());
    }

    #[test]
    fn successful_pick_selects_file() {
        let mut intake = widget();
        intake.handle(InputEvent::Click);
        let picked = vec![RawFile::from_bytes("picked.jpg", vec![9u8])];
        assert!(intake.handle(InputEvent::PickerClosed(Some(picked))).is_selection());
        assert_eq!(intake.state(), WidgetState::FileLoaded);
        assert!(!intake.is_picker_open());
    }

    #[test]
    fn preview_failure_still_notifies() {
        let factory = Counting {
            fail_on: Some("broken.png"),
            ..Counting::default()
        };
        let mut intake = Intake::new(factory, Names::default());
        intake.handle(drop_of(&["ok.png"]));
        let outcome = intake.handle(drop_of(&["broken.png"]));

        match outcome {
            Outcome::Selected {
                preview: PreviewStatus::Failed(message),
                ..
            } => assert_eq!(message, "cannot decode"),
            other => panic!("expected failed preview, got {other:?}"),
        }
        assert_eq!(intake.state(), WidgetState::FileLoaded);
        assert_eq!(intake.sink().0.len(), 2);
        assert!(intake.preview().is_none());
        assert_eq!(intake.preview_error(), Some("cannot decode"));
        assert_eq!(intake.factory().released.len(), 1);
    }

    #[test]
    fn rejection_keeps_previous_file() {
        let mut intake = widget().with_acceptance(AcceptRules::images());
        intake.handle(drop_of(&["cat.png"]));
        intake.handle(InputEvent::DragEnter);
        let outcome = intake.handle(drop_of(&["notes.txt"]));

        assert!(outcome.rejection().is_some());
        assert_eq!(intake.state(), WidgetState::FileLoaded);
        assert_eq!(intake.selected().map(SelectedFile::name), Some("cat.png"));
        assert_eq!(intake.sink().0.len(), 1);
    }

    #[test]
    fn closure_acceptance_is_distinct_from_empty() {
        let mut intake = widget().with_acceptance(|c: &Candidate| c.size() > 100);
        assert_eq!(
            intake.handle(drop_of(&["tiny.png"])),
            Outcome::Rejected(RejectReason::NotAccepted)
        );
        assert_eq!(intake.state(), WidgetState::Idle);
    }

    #[test]
    fn teardown_releases_live_preview_once() {
        let mut intake = widget();
        intake.handle(drop_of(&["a.png"]));
        intake.teardown();
        intake.teardown();

        assert_eq!(intake.factory().released.len(), 1);
        assert_eq!(intake.state(), WidgetState::Idle);
        assert!(intake.selected().is_none());
    }

    #[test]
    fn dropping_mid_drag_releases_preview() {
        let mut collector = DiagnosticsCollector::default();
        {
            let mut intake = widget().with_diagnostics(collector.handle());
            intake.handle(drop_of(&["a.png"]));
            intake.handle(InputEvent::DragEnter);
            assert_eq!(intake.state(), WidgetState::DragActive);
            assert!(intake.preview().is_some());
        }
        collector.process_pending();

        let summary = collector.summary();
        assert_eq!(summary.previews_created, 1);
        assert_eq!(summary.previews_released, 1);
    }

    #[test]
    fn teardown_reports_release_last() {
        let mut collector = DiagnosticsCollector::default();
        let mut intake = widget().with_diagnostics(collector.handle());
        intake.handle(drop_of(&["a.png"]));
        intake.teardown();
        collector.process_pending();

        let last = collector.iter().last().map(|event| &event.kind);
        assert!(matches!(
            last,
            Some(DiagnosticEventKind::PreviewReleased { .. })
        ));
    }

    #[test]
    fn long_session_summary_counts_every_selection() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(64));
        let mut intake = widget().with_diagnostics(collector.handle());
        for i in 0..300 {
            intake.handle(InputEvent::DragEnter);
            let name = format!("{i}.png");
            intake.handle(drop_of(&[name.as_str()]));
        }
        intake.teardown();
        collector.process_pending();

        let summary = collector.summary();
        assert_eq!(summary.selections, 300);
        assert_eq!(summary.previews_created, 300);
        assert_eq!(summary.previews_released, 300);
        assert_eq!(summary.live_previews(), 0);
    }

    #[test]
    fn diagnostics_record_lifecycle() {
        let mut collector = DiagnosticsCollector::default();
        {
            let mut intake = widget().with_diagnostics(collector.handle());
            intake.handle(InputEvent::DragEnter);
            intake.handle(drop_of(&["a.png"]));
            intake.handle(drop_of(&["b.png"]));
        }
        collector.process_pending();

        let summary = collector.summary();
        assert_eq!(summary.selections, 2);
        assert_eq!(summary.previews_created, 2);
        assert_eq!(summary.previews_released, 2);
        assert_eq!(summary.live_previews(), 0);
    }
}
