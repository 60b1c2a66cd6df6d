// SPDX-License-Identifier: MPL-2.0
//! `iced_intake` is a single-file drag-and-drop and click-to-browse image
//! intake widget for the Iced GUI framework.
//!
//! The toolkit-free core lives in [`intake`]: it interprets drag, drop and
//! click input, validates the first file of each selection, keeps at most one
//! live preview and hands every accepted file to a host-supplied sink. The
//! [`ui::drop_zone`] component renders it with iced, and [`app`] is a small
//! host window built around it.

#![doc(html_root_url = "https://docs.rs/iced_intake/0.1.0")]

pub mod app;
pub use app::config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod intake;
pub mod media;
pub mod ui;
