// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! Bounds for numeric settings live with their domain newtypes; this module
//! re-exports them under config-oriented names.

pub use crate::domain::intake::max_file_size_bounds::{
    DEFAULT_MB as DEFAULT_MAX_FILE_SIZE_MB, MAX_MB as MAX_FILE_SIZE_MB,
    MIN_MB as MIN_FILE_SIZE_MB,
};
pub use crate::intake::IMAGE_EXTENSIONS as DEFAULT_EXTENSIONS;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_FILE_SIZE_MB > 0);
    assert!(MAX_FILE_SIZE_MB >= MIN_FILE_SIZE_MB);
    assert!(DEFAULT_MAX_FILE_SIZE_MB >= MIN_FILE_SIZE_MB);
    assert!(DEFAULT_MAX_FILE_SIZE_MB <= MAX_FILE_SIZE_MB);
    assert!(!DEFAULT_EXTENSIONS.is_empty());
};
