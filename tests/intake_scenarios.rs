// SPDX-License-Identifier: MPL-2.0
//! End-to-end event sequences against the public intake API.

use iced_intake::diagnostics::DiagnosticsCollector;
use iced_intake::intake::{
    AcceptRules, InputEvent, Intake, Outcome, PreviewFactory, PreviewId, PreviewStatus, RawFile,
    SelectedFile, WidgetState,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Ledger {
    created: Vec<u64>,
    released: Vec<u64>,
    next: u64,
}

impl Ledger {
    fn live(&self) -> usize {
        self.created.len() - self.released.len()
    }
}

/// Factory recording every create and release into a shared ledger.
#[derive(Debug, Clone, Default)]
struct Recorder(Rc<RefCell<Ledger>>);

impl PreviewFactory for Recorder {
    type Resource = u64;
    type Error = String;

    fn create(&mut self, _file: &SelectedFile) -> Result<u64, String> {
        let mut ledger = self.0.borrow_mut();
        ledger.next += 1;
        let token = ledger.next;
        ledger.created.push(token);
        Ok(token)
    }

    fn release(&mut self, _id: PreviewId, resource: u64) {
        let mut ledger = self.0.borrow_mut();
        assert!(
            !ledger.released.contains(&resource),
            "preview {resource} released twice"
        );
        ledger.released.push(resource);
    }
}

type Received = Rc<RefCell<Vec<String>>>;

fn widget() -> (Intake<Recorder, impl FnMut(SelectedFile)>, Recorder, Received) {
    let recorder = Recorder::default();
    let received: Received = Rc::default();
    let sink = {
        let received = Rc::clone(&received);
        move |file: SelectedFile| received.borrow_mut().push(file.name().to_string())
    };
    (Intake::new(recorder.clone(), sink), recorder, received)
}

fn file(name: &str) -> RawFile {
    RawFile::from_bytes(name, name.as_bytes().to_vec())
}

#[test]
fn at_most_one_file_and_preview_after_any_sequence() {
    let (mut intake, recorder, _received) = widget();
    let events = vec![
        InputEvent::DragEnter,
        InputEvent::Drop(vec![file("a.png")]),
        InputEvent::DragEnter,
        InputEvent::DragOver,
        InputEvent::DragLeave,
        InputEvent::Click,
        InputEvent::PickerClosed(Some(vec![file("b.png"), file("c.png")])),
        InputEvent::Drop(vec![]),
        InputEvent::Drop(vec![file("d.png")]),
    ];

    for event in events {
        intake.handle(event);
        assert!(recorder.0.borrow().live() <= 1);
        assert_eq!(intake.preview().is_some(), intake.selected().is_some());
    }
    assert_eq!(intake.selected().map(SelectedFile::name), Some("d.png"));
}

#[test]
fn n_selections_create_and_release_n_previews() {
    let (mut intake, recorder, _received) = widget();
    for name in ["1.png", "2.png", "3.png", "4.png"] {
        intake.handle(InputEvent::Drop(vec![file(name)]));
    }

    {
        let ledger = recorder.0.borrow();
        assert_eq!(ledger.created.len(), 4);
        assert_eq!(ledger.released, vec![1, 2, 3]);
    }

    drop(intake);

    let ledger = recorder.0.borrow();
    assert_eq!(ledger.released, vec![1, 2, 3, 4]);
}

#[test]
fn n_selections_notify_n_times_in_order() {
    let (mut intake, _recorder, received) = widget();
    intake.handle(InputEvent::Drop(vec![file("first.png")]));
    intake.handle(InputEvent::Click);
    intake.handle(InputEvent::PickerClosed(Some(vec![file("second.png")])));
    intake.handle(InputEvent::Drop(vec![file("third.png")]));

    assert_eq!(
        *received.borrow(),
        vec!["first.png", "second.png", "third.png"]
    );
}

#[test]
fn empty_drop_leaves_widget_idle() {
    let (mut intake, recorder, received) = widget();
    intake.handle(InputEvent::DragEnter);

    assert_eq!(intake.handle(InputEvent::Drop(vec![])), Outcome::Empty);
    assert_eq!(intake.state(), WidgetState::Idle);
    assert!(intake.preview().is_none());
    assert!(recorder.0.borrow().created.is_empty());
    assert!(received.borrow().is_empty());
}

#[test]
fn multi_file_drop_selects_first_only() {
    let (mut intake, _recorder, received) = widget();
    let outcome = intake.handle(InputEvent::Drop(vec![
        file("a.png"),
        file("b.png"),
        file("c.png"),
    ]));

    assert!(outcome.is_selection());
    assert_eq!(*received.borrow(), vec!["a.png"]);
}

#[test]
fn second_drop_supersedes_first_preview() {
    let (mut intake, recorder, received) = widget();
    intake.handle(InputEvent::DragEnter);
    intake.handle(InputEvent::Drop(vec![file("image1.png")]));
    intake.handle(InputEvent::Drop(vec![file("image2.png")]));

    assert_eq!(received.borrow().len(), 2);
    let ledger = recorder.0.borrow();
    assert_eq!(ledger.created, vec![1, 2]);
    assert_eq!(ledger.released, vec![1]);
    assert_eq!(intake.preview().map(|p| *p.resource()), Some(2));
}

#[test]
fn abandoned_drag_has_no_side_effects() {
    let (mut intake, recorder, received) = widget();
    intake.handle(InputEvent::DragEnter);
    intake.handle(InputEvent::DragLeave);

    assert_eq!(intake.state(), WidgetState::Idle);
    assert!(recorder.0.borrow().created.is_empty());
    assert!(received.borrow().is_empty());
}

#[test]
fn cancelled_pick_leaves_widget_idle() {
    let (mut intake, recorder, received) = widget();

    assert_eq!(intake.handle(InputEvent::Click), Outcome::PickerRequested);
    assert_eq!(intake.handle(InputEvent::PickerClosed(None)), Outcome::Ignored);

    assert_eq!(intake.state(), WidgetState::Idle);
    assert!(!intake.is_picker_open());
    assert!(recorder.0.borrow().created.is_empty());
    assert!(received.borrow().is_empty());
}

#[test]
fn rejected_file_keeps_previous_selection() {
    let (intake, recorder, received) = widget();
    let mut intake = intake.with_acceptance(AcceptRules::images());

    intake.handle(InputEvent::Drop(vec![file("ok.png")]));
    intake.handle(InputEvent::DragEnter);
    let outcome = intake.handle(InputEvent::Drop(vec![file("doc.pdf")]));

    assert!(outcome.rejection().is_some());
    assert_eq!(intake.state(), WidgetState::FileLoaded);
    assert_eq!(intake.selected().map(SelectedFile::name), Some("ok.png"));
    assert_eq!(recorder.0.borrow().live(), 1);
    assert_eq!(received.borrow().len(), 1);
}

#[test]
fn diagnostics_summarise_a_session() {
    let mut collector = DiagnosticsCollector::default();
    let (intake, _recorder, _received) = widget();
    let mut intake = intake.with_diagnostics(collector.handle());

    intake.handle(InputEvent::Drop(vec![file("a.png")]));
    intake.handle(InputEvent::Drop(vec![file("b.png")]));
    intake.handle(InputEvent::Click);
    intake.handle(InputEvent::PickerClosed(None));
    intake.teardown();
    collector.process_pending();

    let summary = collector.summary();
    assert_eq!(summary.selections, 2);
    assert_eq!(summary.previews_created, 2);
    assert_eq!(summary.previews_released, 2);
    assert_eq!(summary.live_previews(), 0);
    assert_eq!(summary.pickers_opened, 1);
    assert_eq!(summary.pickers_cancelled, 1);
}

#[test]
fn selection_outcome_reports_ready_preview() {
    let (mut intake, _recorder, _received) = widget();
    match intake.handle(InputEvent::Drop(vec![file("a.png")])) {
        Outcome::Selected { name, preview } => {
            assert_eq!(name, "a.png");
            assert!(matches!(preview, PreviewStatus::Ready(_)));
        }
        other => panic!("expected selection, got {other:?}"),
    }
}
