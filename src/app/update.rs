// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::intake::{InputEvent, RawFile, SelectedFile};
use crate::ui::drop_zone::{self, Effect};
use crate::ui::notifications::{self, Notification};
use iced::{window, Task};

/// Mutable application state the handlers work on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub drop_zone: &'a mut drop_zone::State<Message>,
    pub last_selection: &'a mut Option<SelectedFile>,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub picker_extensions: &'a [String],
}

pub fn handle_drop_zone_message(
    ctx: &mut UpdateContext<'_>,
    message: drop_zone::Message,
) -> Task<Message> {
    let (effect, task) = ctx.drop_zone.update(message);
    ctx.diagnostics.process_pending();

    let effect_task = match effect {
        Effect::None => Task::none(),
        Effect::OpenFilePicker => open_file_picker(ctx.i18n, ctx.picker_extensions.to_vec()),
        Effect::Rejected { name, reason } => {
            ctx.notifications
                .push(Notification::rejected(&name, &reason));
            Task::none()
        }
        Effect::PreviewFailed { name, key } => {
            ctx.notifications
                .push(Notification::warning(key).with_arg("name", name));
            Task::none()
        }
    };

    Task::batch([task, effect_task])
}

/// Receives the selection handed over by the drop zone.
pub fn handle_image_selected(ctx: &mut UpdateContext<'_>, file: SelectedFile) -> Task<Message> {
    ctx.notifications.clear_rejections();
    ctx.notifications.push(Notification::selected(&file));
    *ctx.last_selection = Some(file);
    Task::none()
}

/// Tears the drop zone down, reports the session and closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.drop_zone.teardown();
    ctx.diagnostics.process_pending();

    let summary = ctx.diagnostics.summary();
    log::info!("session: {summary}");
    if summary.live_previews() > 0 {
        log::warn!("session: {} preview(s) never released", summary.live_previews());
    }
    if log::log_enabled!(log::Level::Trace) {
        match ctx.diagnostics.export_json() {
            Ok(json) => log::trace!("diagnostics:\n{json}"),
            Err(err) => log::warn!("failed to export diagnostics: {err}"),
        }
    }

    window::close(id)
}

/// Opens the native file dialog; its result re-enters the drop zone as
/// [`InputEvent::PickerClosed`].
pub fn open_file_picker(i18n: &I18n, extensions: Vec<String>) -> Task<Message> {
    let title = i18n.tr("drop-zone-picker-title");
    let images_label = i18n.tr("drop-zone-filter-images");
    let all_label = i18n.tr("drop-zone-filter-all");

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title(&title);
            if !extensions.is_empty() {
                dialog = dialog.add_filter(&images_label, &extensions);
            }
            dialog = dialog.add_filter(&all_label, &["*"]);

            dialog
                .pick_file()
                .await
                .map(|handle| vec![RawFile::from_path(handle.path())])
        },
        |files| Message::DropZone(drop_zone::Message::Input(InputEvent::PickerClosed(files))),
    )
}
