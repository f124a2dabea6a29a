// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Capability traits shared by the codec and generated message types.
//!
//! Generated code implements [`Encode`] and [`Decode`] for each message type
//! by calling the primitive operations of [`Writer`] and [`Reader`]. The same
//! traits are implemented here for every wire primitive and, by composition,
//! for arrays and maps: a `u32` element count followed by each element (or
//! each key then value) encoded with its own codec.
//!
//! [`Record`] is implemented for every owned type that can round-trip and is
//! what test harnesses call instead of looking methods up at runtime.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use uuid::Uuid;

use super::reader::Reader;
use super::writer::Writer;
use crate::core::{Result, Timestamp, WireType};

/// A value that can be appended to a [`Writer`].
pub trait Encode {
    /// Append the wire encoding of `self`.
    fn encode(&self, writer: &mut Writer);
}

/// A value that can be decoded from a [`Reader`].
///
/// The lifetime lets borrowed types (`&'a str`, `&'a [u8]`) point into the
/// input instead of copying it.
pub trait Decode<'a>: Sized {
    /// Wire type of fixed-width primitives, `None` for everything else.
    const WIRE_TYPE: Option<WireType> = None;

    /// Decode one value and advance the reader past it.
    fn decode(reader: &mut Reader<'a>) -> Result<Self>;

    /// Decode `count` consecutive values, the body of an array.
    ///
    /// `u8` overrides this to copy the whole payload at once, so `Vec<u8>`
    /// decodes like [`Reader::read_byte_vec`].
    fn decode_array(reader: &mut Reader<'a>, count: usize) -> Result<Vec<Self>> {
        let mut items = Vec::with_capacity(capacity_hint::<Self>(reader, count));
        for _ in 0..count {
            items.push(Self::decode(reader)?);
        }
        Ok(items)
    }
}

/// Upper bound for pre-allocating `count` elements of `T`.
///
/// Every element occupies at least one byte, so no honest count exceeds the
/// bytes left; this keeps a forged count from forcing a huge allocation.
fn capacity_hint<'a, T: Decode<'a>>(reader: &Reader<'a>, count: usize) -> usize {
    let min_size = T::WIRE_TYPE.and_then(WireType::fixed_size).unwrap_or(1);
    count.min(reader.remaining() / min_size)
}

macro_rules! impl_primitive {
    ($($ty:ty => $wire:ident, $write:ident, $read:ident;)*) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, writer: &mut Writer) {
                    writer.$write(*self);
                }
            }

            impl<'a> Decode<'a> for $ty {
                const WIRE_TYPE: Option<WireType> = Some(WireType::$wire);

                #[inline]
                fn decode(reader: &mut Reader<'a>) -> Result<Self> {
                    reader.$read()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool, write_bool, read_bool;
    u16 => UInt16, write_u16, read_u16;
    i16 => Int16, write_i16, read_i16;
    u32 => UInt32, write_u32, read_u32;
    i32 => Int32, write_i32, read_i32;
    u64 => UInt64, write_u64, read_u64;
    i64 => Int64, write_i64, read_i64;
    f32 => Float32, write_f32, read_f32;
    f64 => Float64, write_f64, read_f64;
    Timestamp => Date, write_timestamp, read_timestamp;
}

impl Encode for u8 {
    #[inline]
    fn encode(&self, writer: &mut Writer) {
        writer.write_byte(*self);
    }
}

impl<'a> Decode<'a> for u8 {
    const WIRE_TYPE: Option<WireType> = Some(WireType::Byte);

    #[inline]
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_byte()
    }

    fn decode_array(reader: &mut Reader<'a>, count: usize) -> Result<Vec<Self>> {
        reader.take_slice(count).map(<[u8]>::to_vec)
    }
}

impl Encode for Uuid {
    fn encode(&self, writer: &mut Writer) {
        writer.write_guid(self);
    }
}

impl<'a> Decode<'a> for Uuid {
    const WIRE_TYPE: Option<WireType> = Some(WireType::Guid);

    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_guid()
    }
}

impl Encode for str {
    fn encode(&self, writer: &mut Writer) {
        writer.write_str(self);
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut Writer) {
        writer.write_str(self);
    }
}

impl<'a> Decode<'a> for String {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_string()
    }
}

impl<'a> Decode<'a> for &'a str {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_str()
    }
}

/// Borrowed byte arrays decode as a view; `Vec<u8>` decodes into an owned
/// copy. Both share the same wire format.
impl<'a> Decode<'a> for &'a [u8] {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_bytes()
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, writer: &mut Writer) {
        (**self).encode(writer);
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, writer: &mut Writer) {
        writer.write_array_len(self.len());
        for item in self {
            item.encode(writer);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut Writer) {
        self.as_slice().encode(writer);
    }
}

impl<'a, T: Decode<'a>> Decode<'a> for Vec<T> {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        let count = reader.read_array_len()?;
        T::decode_array(reader, count)
    }
}

fn encode_entries<'m, K, V>(
    writer: &mut Writer,
    len: usize,
    entries: impl Iterator<Item = (&'m K, &'m V)>,
) where
    K: Encode + 'm,
    V: Encode + 'm,
{
    writer.write_array_len(len);
    for (key, value) in entries {
        key.encode(writer);
        value.encode(writer);
    }
}

impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
    fn encode(&self, writer: &mut Writer) {
        encode_entries(writer, self.len(), self.iter());
    }
}

impl<'a, K, V, S> Decode<'a> for HashMap<K, V, S>
where
    K: Decode<'a> + Eq + Hash,
    V: Decode<'a>,
    S: BuildHasher + Default,
{
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        let count = reader.read_array_len()?;
        let mut map =
            HashMap::with_capacity_and_hasher(capacity_hint::<K>(reader, count), S::default());
        for _ in 0..count {
            let key = K::decode(reader)?;
            let value = V::decode(reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, writer: &mut Writer) {
        encode_entries(writer, self.len(), self.iter());
    }
}

impl<'a, K, V> Decode<'a> for BTreeMap<K, V>
where
    K: Decode<'a> + Ord,
    V: Decode<'a>,
{
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        let count = reader.read_array_len()?;
        let mut map = BTreeMap::new();
        for _ in 0..count {
            let key = K::decode(reader)?;
            let value = V::decode(reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// Append `value` to `out` and hand the buffer back.
pub fn encode<T: Encode + ?Sized>(out: Vec<u8>, value: &T) -> Vec<u8> {
    let mut writer = Writer::from_vec(out);
    value.encode(&mut writer);
    writer.into_inner()
}

/// Decode one `T` from the front of `bytes`, returning it with the unconsumed rest.
pub fn decode<'a, T: Decode<'a>>(bytes: &'a [u8]) -> Result<(T, &'a [u8])> {
    let mut reader = Reader::new(bytes);
    let value = T::decode(&mut reader)?;
    Ok((value, reader.remaining_bytes()))
}

/// Encode, decode and compare capability of a complete message type.
///
/// Blanket-implemented for every owned type with [`Encode`], [`Decode`] and
/// `PartialEq`.
pub trait Record: Encode + for<'a> Decode<'a> + PartialEq {
    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        self.encode_into(Vec::new())
    }

    /// Append the encoding to `out` and hand the buffer back.
    fn encode_into(&self, out: Vec<u8>) -> Vec<u8> {
        encode(out, self)
    }

    /// Decode from the front of `bytes`, returning the unconsumed rest.
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8])> {
        decode(bytes)
    }

    /// Value equality as used by round-trip checks.
    fn wire_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T> Record for T where T: Encode + for<'a> Decode<'a> + PartialEq {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodecError, ErrorKind};

    #[test]
    fn test_array_of_strings() {
        let values = vec!["".to_string(), "a".to_string(), "bb".to_string()];
        let bytes = values.to_bytes();
        assert_eq!(
            bytes,
            [
                0x03, 0x00, 0x00, 0x00, //
                0x00, 0x00, 0x00, 0x00, //
                0x01, 0x00, 0x00, 0x00, b'a', //
                0x02, 0x00, 0x00, 0x00, b'b', b'b',
            ]
        );
        let (decoded, rest) = Vec::<String>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, values);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_borrowed_strings_point_into_input() {
        let bytes = encode(Vec::new(), &["x", "yz"][..]);
        let (decoded, _) = decode::<Vec<&str>>(&bytes).unwrap();
        assert_eq!(decoded, ["x", "yz"]);
    }

    #[test]
    fn test_byte_vec_matches_byte_array_wire() {
        let mut writer = Writer::new();
        writer.write_bytes(&[9, 8, 7]);
        assert_eq!(vec![9u8, 8, 7].to_bytes(), writer.data());

        let (view, _) = decode::<&[u8]>(writer.data()).unwrap();
        assert_eq!(view, [9, 8, 7]);
    }

    #[test]
    fn test_byte_vec_decodes_as_one_copy() {
        let mut writer = Writer::new();
        writer.write_bytes(&[1, 2, 3, 4]).write_byte(0xEE);
        let (owned, rest) = decode::<Vec<u8>>(writer.data()).unwrap();
        assert_eq!(owned, Reader::new(writer.data()).read_byte_vec().unwrap());
        assert_eq!(rest, [0xEE]);

        let bytes = [0x05, 0x00, 0x00, 0x00, 0x01, 0x02];
        let err = decode::<Vec<u8>>(&bytes).unwrap_err();
        assert_eq!(err, CodecError::unexpected_eof(5, 2, 4));
    }

    #[test]
    fn test_map_round_trip() {
        let mut map = BTreeMap::new();
        map.insert(1u32, "one".to_string());
        map.insert(2u32, "two".to_string());
        let bytes = map.to_bytes();
        assert_eq!(&bytes[..4], [0x02, 0x00, 0x00, 0x00]);
        let (decoded, rest) = BTreeMap::<u32, String>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, map);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_hash_map_with_guid_keys() {
        let mut map: HashMap<Uuid, i64> = HashMap::new();
        map.insert(Uuid::from_u128(1), -1);
        map.insert(Uuid::from_u128(2), -2);
        let bytes = map.to_bytes();
        assert_eq!(bytes.len(), 4 + 2 * (16 + 8));
        let (decoded, _) = HashMap::<Uuid, i64>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, map);
    }

    #[test]
    fn test_duplicate_map_keys_last_wins() {
        let mut writer = Writer::new();
        writer.write_array_len(2);
        writer.write_u16(1).write_bool(false);
        writer.write_u16(1).write_bool(true);
        let (decoded, _) = decode::<BTreeMap<u16, bool>>(writer.data()).unwrap();
        assert_eq!(decoded.len(), 1);
        assert!(decoded[&1]);
    }

    #[test]
    fn test_forged_count_fails_without_huge_allocation() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00, 0x00];
        let err = decode::<Vec<u64>>(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(capacity_hint::<u64>(&Reader::new(&bytes[4..]), usize::MAX), 0);
    }

    #[test]
    fn test_nested_arrays() {
        let values: Vec<Vec<i16>> = vec![vec![], vec![-1, 1]];
        let bytes = values.to_bytes();
        let (decoded, _) = Vec::<Vec<i16>>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_encode_into_reuses_buffer() {
        let out = 7u8.encode_into(vec![0xAA]);
        assert_eq!(out, [0xAA, 0x07]);
    }

    #[test]
    fn test_decode_returns_rest() {
        let bytes = [0x01, 0x00, 0xFF];
        let (value, rest) = decode::<u16>(&bytes).unwrap();
        assert_eq!(value, 1);
        assert_eq!(rest, [0xFF]);
        assert_eq!(
            decode::<u32>(&bytes).unwrap_err(),
            CodecError::unexpected_eof(4, 3, 0)
        );
    }

    #[test]
    fn test_wire_types() {
        assert_eq!(<u8 as Decode<'static>>::WIRE_TYPE, Some(WireType::Byte));
        assert_eq!(<Timestamp as Decode<'static>>::WIRE_TYPE, Some(WireType::Date));
        assert_eq!(<String as Decode<'static>>::WIRE_TYPE, None);
    }
}
