// SPDX-License-Identifier: MPL-2.0
//! Single-file intake: drag-and-drop or click-to-browse selection of one
//! file, with a live preview and a completion callback.
//!
//! This module is independent of the UI toolkit. [`Intake`] consumes
//! [`InputEvent`]s and settles each one synchronously:
//!
//! - [`WidgetState`] tracks idle, drag-active and file-loaded
//! - [`evaluate`] applies an [`AcceptFile`] predicate to the first file
//! - [`PreviewSlot`] keeps at most one live preview from a [`PreviewFactory`]
//! - the [`SelectionSink`] hears about every accepted [`SelectedFile`]
//!
//! The iced rendition lives in `ui::drop_zone`.

mod event;
mod file;
mod notify;
mod preview;
mod state;
mod validator;
mod widget;

pub use event::{InputEvent, Outcome, PreviewStatus};
pub use file::{media_type_for, Candidate, RawFile, SelectedFile, OCTET_STREAM};
pub use notify::{Outbox, SelectionSink};
pub use preview::{PreviewFactory, PreviewHandle, PreviewId, PreviewSlot};
pub use state::WidgetState;
pub use validator::{
    evaluate, AcceptAll, AcceptFile, AcceptRules, RejectReason, Verdict, IMAGE_EXTENSIONS,
};
pub use widget::Intake;
