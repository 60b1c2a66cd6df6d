// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and bounds. It has no dependencies
//! on external crates (except `std`) so it stays trivially testable.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`intake`]: Intake limits ([`MaxFileSize`](intake::MaxFileSize))

pub mod diagnostics;
pub mod intake;
