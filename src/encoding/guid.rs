// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Identifier byte ordering.
//!
//! Identifiers travel in the mixed-endian GUID layout: the first three groups
//! (4, 2 and 2 bytes) are byte-reversed, the last eight bytes are verbatim.
//! The permutation swaps positions pairwise, so it is its own inverse and the
//! same table serves both directions.

use uuid::Uuid;

/// Size of an encoded identifier.
pub const GUID_SIZE: usize = 16;

/// Source index in the natural byte order for each wire position.
pub const GUID_WIRE_ORDER: [usize; GUID_SIZE] = [3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15];

#[inline]
fn permute(bytes: &[u8; GUID_SIZE]) -> [u8; GUID_SIZE] {
    let mut out = [0u8; GUID_SIZE];
    for (slot, &source) in out.iter_mut().zip(GUID_WIRE_ORDER.iter()) {
        *slot = bytes[source];
    }
    out
}

/// Wire bytes for an identifier.
pub fn to_wire(id: &Uuid) -> [u8; GUID_SIZE] {
    permute(id.as_bytes())
}

/// Identifier from its wire bytes.
pub fn from_wire(bytes: &[u8; GUID_SIZE]) -> Uuid {
    Uuid::from_bytes(permute(bytes))
}
