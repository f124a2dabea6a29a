// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout bebop-codec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Decode failure taxonomy
//! - [`Timestamp`] - Tick-count date value
//! - [`WireType`] - Primitive wire type catalogue

pub mod error;
pub mod timestamp;
pub mod wire_type;

pub use error::{CodecError, ErrorKind, Result};
pub use timestamp::Timestamp;
pub use wire_type::{ParseWireTypeError, WireType};
