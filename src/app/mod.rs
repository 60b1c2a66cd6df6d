// SPDX-License-Identifier: MPL-2.0
//! Application root: a host window around a single drop zone.
//!
//! The `App` struct plays the part of the page that embeds the intake
//! widget. It binds the selection callback once at boot, turns widget
//! effects into toasts and the native file picker, and reports the session
//! diagnostics when the window closes.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::intake::SelectedFile;
use crate::ui::design_tokens::sizing;
use crate::ui::drop_zone;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    drop_zone: drop_zone::State<Message>,
    /// Last file handed over by the drop zone.
    last_selection: Option<SelectedFile>,
    /// Extensions offered by the picker's image filter.
    picker_extensions: Vec<String>,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.drop_zone.intake().state())
            .field("last_selection", &self.last_selection)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
///
/// Close requests are routed through `update` so the drop zone can release
/// its preview before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            sizing::DROP_ZONE_MIN_HEIGHT + 160.0,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and translations, and binds the drop zone to
    /// [`Message::ImageSelected`].
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_deref().map(std::path::PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir);
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let diagnostics = DiagnosticsCollector::default();
        let mut drop_zone =
            drop_zone::State::new(Message::ImageSelected).with_diagnostics(diagnostics.handle());
        if let Some(rules) = config.intake.accept_rules() {
            drop_zone.set_acceptance(rules);
        }

        let picker_extensions = config.intake.extensions.clone().unwrap_or_else(|| {
            config::DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect()
        });

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            drop_zone,
            last_selection: None,
            picker_extensions,
            notifications: notifications::Manager::new(),
            diagnostics,
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }

        log::debug!(
            "starting with locale {} and {:?} acceptance",
            app.i18n.current_locale(),
            config.intake.accept
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.last_selection {
            Some(file) => format!("{} - {app_name}", file.name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            drop_zone: &mut self.drop_zone,
            last_selection: &mut self.last_selection,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            picker_extensions: &self.picker_extensions,
        };

        match message {
            Message::DropZone(drop_zone_message) => {
                update::handle_drop_zone_message(&mut ctx, drop_zone_message)
            }
            Message::ImageSelected(file) => update::handle_image_selected(&mut ctx, file),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            drop_zone: &self.drop_zone,
            last_selection: self.last_selection.as_ref(),
            notifications: &self.notifications,
        })
    }
}
