// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Property tests for the codec.
//!
//! - `prop_*_round_trip`: any value decodes back to itself and consumes
//!   exactly the bytes written.
//! - `prop_guid_wire_order_is_involution`: permuting twice is the identity.
//! - `prop_arbitrary_input_never_panics`: random bytes yield a value or an
//!   error, never a panic, and the reader never ends past the input.

mod common;

use std::collections::BTreeMap;

use bebop_codec::encoding::guid;
use bebop_codec::{Decode, Reader, Record, Timestamp};
use common::{IndexedSong, IndexedSongV2, Musician, SongV1, SongV2};
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;
use uuid::Uuid;

fn uuid_strategy() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

fn musician_strategy() -> impl Strategy<Value = Musician> {
    (".{0,16}", uuid_strategy(), any::<i64>()).prop_map(|(name, id, ticks)| Musician {
        name,
        id,
        born: Timestamp::from_ticks(ticks),
    })
}

fn song_strategy() -> impl Strategy<Value = SongV2> {
    (".{0,24}", any::<u16>(), vec(musician_strategy(), 0..4)).prop_map(
        |(title, year, performers)| SongV2 {
            title,
            year,
            performers,
        },
    )
}

fn indexed_song_strategy() -> impl Strategy<Value = IndexedSongV2> {
    (
        option::of(".{0,24}"),
        option::of(any::<u16>()),
        option::of(vec(musician_strategy(), 0..3)),
        option::of(-1.0e6f64..1.0e6),
    )
        .prop_map(|(title, year, performers, rating)| IndexedSongV2 {
            title,
            year,
            performers,
            rating,
        })
}

fn check_round_trip<T: Record + std::fmt::Debug>(value: &T) -> Result<(), TestCaseError> {
    let bytes = value.to_bytes();
    let (decoded, rest) = T::from_bytes(&bytes).map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert!(decoded.wire_eq(value), "{:?} != {:?}", decoded, value);
    prop_assert!(rest.is_empty());
    Ok(())
}

proptest! {
    #[test]
    fn prop_integer_round_trip(a in any::<u16>(), b in any::<i32>(), c in any::<u64>(), d in any::<i64>()) {
        check_round_trip(&a)?;
        check_round_trip(&b)?;
        check_round_trip(&c)?;
        check_round_trip(&d)?;
    }

    #[test]
    fn prop_float_bits_round_trip(bits32 in any::<u32>(), bits64 in any::<u64>()) {
        let bytes = f32::from_bits(bits32).to_bytes();
        let (value, _) = bebop_codec::decode::<f32>(&bytes).unwrap();
        prop_assert_eq!(value.to_bits(), bits32);

        let bytes = f64::from_bits(bits64).to_bytes();
        let (value, _) = bebop_codec::decode::<f64>(&bytes).unwrap();
        prop_assert_eq!(value.to_bits(), bits64);
    }

    #[test]
    fn prop_string_round_trip(value in ".{0,64}") {
        check_round_trip(&value)?;
        prop_assert_eq!(value.to_bytes().len(), 4 + value.len());
    }

    #[test]
    fn prop_collection_round_trip(
        bytes in vec(any::<u8>(), 0..64),
        map in btree_map(any::<i16>(), ".{0,8}", 0..8),
    ) {
        check_round_trip(&bytes)?;
        check_round_trip(&map)?;
        let encoded: Vec<u8> = map.to_bytes();
        let (decoded, _) = bebop_codec::decode::<BTreeMap<i16, &str>>(&encoded).unwrap();
        prop_assert_eq!(decoded.len(), map.len());
    }

    #[test]
    fn prop_guid_wire_order_is_involution(id in uuid_strategy()) {
        let wire = guid::to_wire(&id);
        prop_assert_eq!(guid::from_wire(&wire), id);
        prop_assert_eq!(guid::to_wire(&Uuid::from_bytes(wire)), *id.as_bytes());
        check_round_trip(&id)?;
    }

    #[test]
    fn prop_message_round_trip(song in song_strategy(), indexed in indexed_song_strategy()) {
        check_round_trip(&song)?;
        check_round_trip(&indexed)?;
    }

    #[test]
    fn prop_old_reader_reads_prefix_of_new_message(song in song_strategy()) {
        let song_bytes = song.to_bytes();
        let (old, rest) = SongV1::from_bytes(&song_bytes).unwrap();
        prop_assert_eq!(old.title, song.title);
        prop_assert_eq!(old.year, song.year);
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn prop_indexed_old_reader_keeps_known_fields(song in indexed_song_strategy()) {
        let song_bytes = song.to_bytes();
        let (old, rest) = IndexedSong::from_bytes(&song_bytes).unwrap();
        prop_assert_eq!(old.title, song.title);
        prop_assert_eq!(old.year, song.year);
        prop_assert_eq!(old.performers, song.performers);
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn prop_arbitrary_input_never_panics(input in vec(any::<u8>(), 0..256)) {
        let mut reader = Reader::new(&input);
        let _ = Vec::<SongV2>::decode(&mut reader);
        prop_assert!(reader.position() <= input.len());

        let mut reader = Reader::new(&input);
        let _ = IndexedSongV2::decode(&mut reader);
        prop_assert!(reader.position() <= input.len());
    }
}
