// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` limits the number of visible toasts, queues the rest and
//! expires them on tick. At most one rejection toast exists at a time: a new
//! rejection replaces the previous one, and an accepted file clears it.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

const REJECTION_KEY_PREFIX: &str = "notification-rejected-";

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Waiting for a visible slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if a slot is free, otherwise queues it.
    pub fn push(&mut self, notification: Notification) {
        if is_rejection(&notification) {
            self.clear_rejections();
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses expired notifications.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Drops stale rejection toasts once a file has been accepted.
    pub fn clear_rejections(&mut self) {
        let visible_before = self.visible.len();
        self.visible.retain(|n| !is_rejection(n));
        self.queue.retain(|n| !is_rejection(n));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}

fn is_rejection(notification: &Notification) -> bool {
    notification.message_key().starts_with(REJECTION_KEY_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::RejectReason;

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE + 2 {
            manager.push(Notification::info("x"));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 2);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE + 1 {
            manager.push(Notification::info("x"));
        }
        let first = manager.visible().next().map(Notification::id).expect("visible");

        assert!(manager.dismiss(first));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(NotificationId::new()));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::error("x");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("x"));
        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn new_rejection_replaces_previous_one() {
        let mut manager = Manager::new();
        manager.push(Notification::rejected("a.txt", &RejectReason::NotAccepted));
        manager.push(Notification::info("other"));
        manager.push(Notification::rejected("b.txt", &RejectReason::NotAccepted));

        let rejections: Vec<&Notification> =
            manager.visible().filter(|n| is_rejection(n)).collect();
        assert_eq!(rejections.len(), 1);
        assert_eq!(
            rejections[0].message_args()[0],
            ("name".to_string(), "b.txt".to_string())
        );
        assert_eq!(manager.visible_count(), 2);
    }

    #[test]
    fn clear_rejections_keeps_other_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::rejected("a.txt", &RejectReason::NotAccepted));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::rejected("b.txt", &RejectReason::NotAccepted));
        manager.push(Notification::info("other"));

        manager.clear_rejections();

        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.iter().all(|k| !k.starts_with(REJECTION_KEY_PREFIX)));
    }
}
