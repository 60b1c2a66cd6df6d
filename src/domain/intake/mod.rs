// SPDX-License-Identifier: MPL-2.0
//! Intake domain types.
//!
//! - [`MaxFileSize`]: Upper bound on the size of an accepted file

mod newtypes;

pub use newtypes::{max_file_size_bounds, MaxFileSize};
