// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Append-only output buffer.
//!
//! Every write appends the canonical little-endian encoding of a value. The
//! buffer is owned by the encode call chain: callers hand in a `Vec<u8>` (or
//! start a fresh one), nested encoders receive `&mut Writer`, and the bytes are
//! taken back with [`Writer::into_inner`]. The only in-place mutation of bytes
//! already written is patching a reserved message length, see
//! [`Writer::reserve_message_length`].

use uuid::Uuid;

use super::backend::{IntegerBackend, Selected};
use super::config::WriterConfig;
use super::guid;
use crate::core::Timestamp;

/// Growable output buffer for wire encoding.
///
/// # Example
///
/// ```
/// use bebop_codec::encoding::Writer;
///
/// let mut writer = Writer::new();
/// writer.write_i32(-2).write_str("hi");
/// assert_eq!(
///     writer.into_inner(),
///     [0xFE, 0xFF, 0xFF, 0xFF, 0x02, 0x00, 0x00, 0x00, b'h', b'i']
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    /// Output buffer
    buffer: Vec<u8>,
}

impl Writer {
    /// Create a new writer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    /// Create a new writer with the given configuration.
    #[must_use]
    pub fn with_config(config: WriterConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Create a new writer with the specified initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Continue writing at the end of an existing buffer.
    #[must_use]
    pub fn from_vec(buffer: Vec<u8>) -> Self {
        Self { buffer }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get a reference to the encoded data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the writer and return the encoded data.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Discard the written bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buffer
    }

    /// Write a boolean as a single `0x00` or `0x01` byte.
    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_byte(u8::from(value))
    }

    /// Write an unsigned 8-bit integer.
    pub fn write_byte(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    /// Write an unsigned 16-bit integer.
    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        Selected::put_u16(&mut self.buffer, value);
        self
    }

    /// Write a signed 16-bit integer.
    pub fn write_i16(&mut self, value: i16) -> &mut Self {
        self.write_u16(value as u16)
    }

    /// Write an unsigned 32-bit integer.
    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        Selected::put_u32(&mut self.buffer, value);
        self
    }

    /// Write a signed 32-bit integer.
    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        self.write_u32(value as u32)
    }

    /// Write an unsigned 64-bit integer.
    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        Selected::put_u64(&mut self.buffer, value);
        self
    }

    /// Write a signed 64-bit integer.
    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        self.write_u64(value as u64)
    }

    /// Write a 32-bit float as its IEEE-754 bit pattern.
    pub fn write_f32(&mut self, value: f32) -> &mut Self {
        self.write_u32(value.to_bits())
    }

    /// Write a 64-bit float as its IEEE-754 bit pattern.
    pub fn write_f64(&mut self, value: f64) -> &mut Self {
        self.write_u64(value.to_bits())
    }

    /// Write a timestamp as its raw tick count.
    pub fn write_timestamp(&mut self, value: Timestamp) -> &mut Self {
        self.write_i64(value.ticks())
    }

    /// Write an identifier in wire byte order.
    pub fn write_guid(&mut self, value: &Uuid) -> &mut Self {
        self.buffer.extend_from_slice(&guid::to_wire(value));
        self
    }

    /// Write the `u32` count prefix of an array or map.
    pub fn write_array_len(&mut self, len: usize) -> &mut Self {
        debug_assert!(
            u32::try_from(len).is_ok(),
            "length {len} does not fit the u32 wire prefix"
        );
        self.write_u32(len as u32)
    }

    /// Write a length-prefixed byte array.
    pub fn write_bytes(&mut self, value: &[u8]) -> &mut Self {
        self.write_array_len(value.len());
        self.buffer.extend_from_slice(value);
        self
    }

    /// Write a length-prefixed UTF-8 string.
    pub fn write_str(&mut self, value: &str) -> &mut Self {
        self.write_bytes(value.as_bytes())
    }
}

impl From<Vec<u8>> for Writer {
    fn from(buffer: Vec<u8>) -> Self {
        Writer::from_vec(buffer)
    }
}

impl From<Writer> for Vec<u8> {
    fn from(writer: Writer) -> Self {
        writer.into_inner()
    }
}

impl AsRef<[u8]> for Writer {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}
