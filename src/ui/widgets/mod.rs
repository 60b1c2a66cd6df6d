// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod drop_target;

pub use drop_target::{drop_target, DropTarget, Gesture};
