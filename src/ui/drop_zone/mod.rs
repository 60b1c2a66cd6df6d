// SPDX-License-Identifier: MPL-2.0
//! Drop zone component: the intake controller wired to iced.
//!
//! The component owns an [`Intake`](crate::intake::Intake) backed by
//! [`ImagePreviews`] and an [`Outbox`](crate::intake::Outbox) that turns each
//! accepted selection into a host message.

pub mod component;
pub mod preview;
mod view;

pub use component::{Effect, Message, State};
pub use preview::ImagePreviews;
