// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - `Manager` for queuing and lifecycle
//! - [`toast`] - Toast rendering and the overlay
//!
//! Durations: ~3s for success/info, ~5s for warnings, manual dismiss for
//! errors. At most three toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{format_size, Notification, NotificationId, Severity};
