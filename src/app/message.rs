// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::intake::SelectedFile;
use crate::ui::drop_zone;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    DropZone(drop_zone::Message),
    /// Produced by the drop zone once per accepted selection.
    ImageSelected(SelectedFile),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files that override the
    /// embedded translations.
    pub i18n_dir: Option<String>,
    /// Optional directory holding `settings.toml`.
    pub config_dir: Option<String>,
}
