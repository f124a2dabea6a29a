// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire encoding and decoding.
//!
//! - [`writer`] / [`reader`] - primitive codec over an append buffer and a byte cursor
//! - [`frame`] - length-prefixed message bodies with schema evolution
//! - [`traits`] - `Encode` / `Decode` / `Record` capabilities and collection codecs
//! - [`backend`] - portable and native integer byte-order paths
//! - [`guid`] - identifier byte permutation
//! - [`config`] - reader limits and writer sizing

pub mod backend;
pub mod config;
pub mod frame;
pub mod guid;
pub mod reader;
pub mod traits;
pub mod writer;

#[cfg(target_endian = "little")]
pub use backend::NativeLittleEndian;
pub use backend::{IntegerBackend, Portable, Selected};
pub use config::{ReaderConfig, ReaderConfigBuilder, WriterConfig, WriterConfigBuilder};
pub use frame::{Frame, LengthPlaceholder, END_OF_FIELDS, MESSAGE_LENGTH_SIZE};
pub use reader::Reader;
pub use traits::{decode, encode, Decode, Encode, Record};
pub use writer::Writer;
