// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # bebop-codec
//!
//! Runtime for a compact, schema-driven binary serialization format.
//!
//! Generated message types call into this crate to turn values into bytes
//! and back. The crate is organized into:
//! - `core/` - error type, timestamps and the wire type catalogue
//! - `encoding/` - primitive codec, collection codecs, message framing
//!
//! ## Wire format
//!
//! - Scalars are fixed-width little-endian, floats as IEEE-754 bit patterns.
//! - Strings and byte arrays are a `u32` byte length followed by the bytes.
//! - Arrays and maps are a `u32` element count followed by the elements.
//! - Identifiers are 16 bytes in mixed-endian GUID order.
//! - Messages are a `u32` body length followed by the body, which lets
//!   readers on older or newer schemas skip or default the fields they
//!   disagree on.
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), bebop_codec::CodecError> {
//! use bebop_codec::{Decode, Encode, Reader, Record, Writer};
//!
//! #[derive(Debug, PartialEq)]
//! struct Song {
//!     title: Option<String>,
//!     year: Option<u16>,
//! }
//!
//! impl Encode for Song {
//!     fn encode(&self, writer: &mut Writer) {
//!         writer.write_message(|w| {
//!             if let Some(title) = &self.title {
//!                 w.write_field_index(1).write_str(title);
//!             }
//!             if let Some(year) = self.year {
//!                 w.write_field_index(2).write_u16(year);
//!             }
//!             w.write_message_end();
//!         });
//!     }
//! }
//!
//! impl<'a> Decode<'a> for Song {
//!     fn decode(reader: &mut Reader<'a>) -> bebop_codec::Result<Self> {
//!         reader.read_message(|frame| {
//!             let mut song = Song { title: None, year: None };
//!             while let Some(index) = frame.next_field_index()? {
//!                 match index {
//!                     1 => song.title = Some(frame.reader().read_string()?),
//!                     2 => song.year = Some(frame.reader().read_u16()?),
//!                     _ => break,
//!                 }
//!             }
//!             Ok(song)
//!         })
//!     }
//! }
//!
//! let song = Song { title: Some("Blue in Green".into()), year: None };
//! let song_bytes = song.to_bytes();
//! let (decoded, rest) = Song::from_bytes(&song_bytes)?;
//! assert_eq!(decoded, song);
//! assert!(rest.is_empty());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, ErrorKind, Result, Timestamp, WireType};

// Encoding/decoding
pub mod encoding;

pub use encoding::{decode, encode, Decode, Encode, Frame, Reader, Record, Writer};
