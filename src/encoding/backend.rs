// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Platform integer backend.
//!
//! Two interchangeable implementations of the unsigned integer codec:
//!
//! - [`Portable`] composes and decomposes values with explicit shifts and is
//!   independent of the host byte order. It is the reference semantics.
//! - [`NativeLittleEndian`] copies the in-memory representation of the value
//!   through `bytemuck`, which is only correct on little-endian hosts and is
//!   therefore only compiled there. `pod_read_unaligned` keeps unaligned input
//!   sound without any `unsafe` in this crate.
//!
//! [`Selected`] is fixed at compile time. Enabling the `portable` feature
//! forces the shift-based path everywhere.

/// Little-endian encode/decode of the unsigned integer widths used on the wire.
///
/// Implementations must be byte-for-byte identical in observable output.
pub trait IntegerBackend {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    fn put_u16(out: &mut Vec<u8>, value: u16);
    fn put_u32(out: &mut Vec<u8>, value: u32);
    fn put_u64(out: &mut Vec<u8>, value: u64);

    fn get_u16(bytes: &[u8; 2]) -> u16;
    fn get_u32(bytes: &[u8; 4]) -> u32;
    fn get_u64(bytes: &[u8; 8]) -> u64;
}

/// Byte-shift backend, valid on every target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

impl IntegerBackend for Portable {
    const NAME: &'static str = "portable";

    #[inline]
    fn put_u16(out: &mut Vec<u8>, value: u16) {
        out.extend_from_slice(&[value as u8, (value >> 8) as u8]);
    }

    #[inline]
    fn put_u32(out: &mut Vec<u8>, value: u32) {
        out.extend_from_slice(&[
            value as u8,
            (value >> 8) as u8,
            (value >> 16) as u8,
            (value >> 24) as u8,
        ]);
    }

    #[inline]
    fn put_u64(out: &mut Vec<u8>, value: u64) {
        out.extend_from_slice(&[
            value as u8,
            (value >> 8) as u8,
            (value >> 16) as u8,
            (value >> 24) as u8,
            (value >> 32) as u8,
            (value >> 40) as u8,
            (value >> 48) as u8,
            (value >> 56) as u8,
        ]);
    }

    #[inline]
    fn get_u16(bytes: &[u8; 2]) -> u16 {
        u16::from(bytes[0]) | u16::from(bytes[1]) << 8
    }

    #[inline]
    fn get_u32(bytes: &[u8; 4]) -> u32 {
        u32::from(bytes[0])
            | u32::from(bytes[1]) << 8
            | u32::from(bytes[2]) << 16
            | u32::from(bytes[3]) << 24
    }

    #[inline]
    fn get_u64(bytes: &[u8; 8]) -> u64 {
        u64::from(bytes[0])
            | u64::from(bytes[1]) << 8
            | u64::from(bytes[2]) << 16
            | u64::from(bytes[3]) << 24
            | u64::from(bytes[4]) << 32
            | u64::from(bytes[5]) << 40
            | u64::from(bytes[6]) << 48
            | u64::from(bytes[7]) << 56
    }
}

/// Native-representation backend for little-endian targets.
#[cfg(target_endian = "little")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLittleEndian;

#[cfg(target_endian = "little")]
impl IntegerBackend for NativeLittleEndian {
    const NAME: &'static str = "native-le";

    #[inline]
    fn put_u16(out: &mut Vec<u8>, value: u16) {
        out.extend_from_slice(bytemuck::bytes_of(&value));
    }

    #[inline]
    fn put_u32(out: &mut Vec<u8>, value: u32) {
        out.extend_from_slice(bytemuck::bytes_of(&value));
    }

    #[inline]
    fn put_u64(out: &mut Vec<u8>, value: u64) {
        out.extend_from_slice(bytemuck::bytes_of(&value));
    }

    #[inline]
    fn get_u16(bytes: &[u8; 2]) -> u16 {
        bytemuck::pod_read_unaligned(bytes)
    }

    #[inline]
    fn get_u32(bytes: &[u8; 4]) -> u32 {
        bytemuck::pod_read_unaligned(bytes)
    }

    #[inline]
    fn get_u64(bytes: &[u8; 8]) -> u64 {
        bytemuck::pod_read_unaligned(bytes)
    }
}

/// Backend used by [`Writer`](super::Writer) and [`Reader`](super::Reader).
#[cfg(all(target_endian = "little", not(feature = "portable")))]
pub type Selected = NativeLittleEndian;

/// Backend used by [`Writer`](super::Writer) and [`Reader`](super::Reader).
#[cfg(any(not(target_endian = "little"), feature = "portable"))]
pub type Selected = Portable;
