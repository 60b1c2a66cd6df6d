// SPDX-License-Identifier: MPL-2.0
//! Media decoding for previews.

pub mod image;

pub use image::{decode, ImageData, PREVIEW_MAX_EDGE};
