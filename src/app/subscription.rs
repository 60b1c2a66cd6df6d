// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! File hover and drop events are not listened to here: they travel through
//! the widget tree to the drop zone, which captures them.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window close requests so the drop zone can be torn down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Ticks only while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
