// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`drop_zone`] - The intake widget as an iced component
//! - [`widgets`] - Custom Iced widgets (drop target)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Inline SVG icons

pub mod design_tokens;
pub mod drop_zone;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
