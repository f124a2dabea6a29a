// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.
//!
//! The message types below are written the way a schema compiler would emit
//! them: plain structs whose `Encode`/`Decode` impls call the codec directly.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt::Debug;

use bebop_codec::{Decode, Encode, Reader, Record, Result, Timestamp, Writer};
use uuid::Uuid;

// ============================================================================
// Structs (fixed field list, no framing)
// ============================================================================

/// A performer, encoded as a plain struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Musician {
    pub name: String,
    pub id: Uuid,
    pub born: Timestamp,
}

impl Encode for Musician {
    fn encode(&self, writer: &mut Writer) {
        writer
            .write_str(&self.name)
            .write_guid(&self.id)
            .write_timestamp(self.born);
    }
}

impl<'a> Decode<'a> for Musician {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        Ok(Self {
            name: reader.read_string()?,
            id: reader.read_guid()?,
            born: reader.read_timestamp()?,
        })
    }
}

// ============================================================================
// Sequential messages (framed, fields in declaration order)
// ============================================================================

/// First revision of a song record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongV1 {
    pub title: String,
    pub year: u16,
}

impl Encode for SongV1 {
    fn encode(&self, writer: &mut Writer) {
        writer.write_message(|w| {
            w.write_str(&self.title).write_u16(self.year);
        });
    }
}

impl<'a> Decode<'a> for SongV1 {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_message(|frame| {
            Ok(Self {
                title: frame.field_or_default()?,
                year: frame.field_or_default()?,
            })
        })
    }
}

/// Second revision: appends a list of performers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongV2 {
    pub title: String,
    pub year: u16,
    pub performers: Vec<Musician>,
}

impl Encode for SongV2 {
    fn encode(&self, writer: &mut Writer) {
        writer.write_message(|w| {
            w.write_str(&self.title).write_u16(self.year);
            self.performers.encode(w);
        });
    }
}

impl<'a> Decode<'a> for SongV2 {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_message(|frame| {
            Ok(Self {
                title: frame.field_or_default()?,
                year: frame.field_or_default()?,
                performers: frame.field_or_default()?,
            })
        })
    }
}

/// Songs keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    pub songs: HashMap<Uuid, SongV2>,
}

impl Encode for Library {
    fn encode(&self, writer: &mut Writer) {
        self.songs.encode(writer);
    }
}

impl<'a> Decode<'a> for Library {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        Ok(Self {
            songs: HashMap::decode(reader)?,
        })
    }
}

// ============================================================================
// Indexed messages (framed, optional fields introduced by an index byte)
// ============================================================================

/// First revision of an indexed song.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedSong {
    pub title: Option<String>,
    pub year: Option<u16>,
    pub performers: Option<Vec<Musician>>,
}

impl Encode for IndexedSong {
    fn encode(&self, writer: &mut Writer) {
        writer.write_message(|w| {
            if let Some(title) = &self.title {
                w.write_field_index(1).write_str(title);
            }
            if let Some(year) = self.year {
                w.write_field_index(2).write_u16(year);
            }
            if let Some(performers) = &self.performers {
                w.write_field_index(3);
                performers.encode(w);
            }
            w.write_message_end();
        });
    }
}

impl<'a> Decode<'a> for IndexedSong {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_message(|frame| {
            let mut song = Self::default();
            while let Some(index) = frame.next_field_index()? {
                match index {
                    1 => song.title = frame.field()?,
                    2 => song.year = frame.field()?,
                    3 => song.performers = frame.field()?,
                    _ => break,
                }
            }
            Ok(song)
        })
    }
}

/// Second revision of an indexed song: adds a rating at index 4.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedSongV2 {
    pub title: Option<String>,
    pub year: Option<u16>,
    pub performers: Option<Vec<Musician>>,
    pub rating: Option<f64>,
}

impl Encode for IndexedSongV2 {
    fn encode(&self, writer: &mut Writer) {
        writer.write_message(|w| {
            if let Some(title) = &self.title {
                w.write_field_index(1).write_str(title);
            }
            if let Some(year) = self.year {
                w.write_field_index(2).write_u16(year);
            }
            if let Some(performers) = &self.performers {
                w.write_field_index(3);
                performers.encode(w);
            }
            if let Some(rating) = self.rating {
                w.write_field_index(4).write_f64(rating);
            }
            w.write_message_end();
        });
    }
}

impl<'a> Decode<'a> for IndexedSongV2 {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_message(|frame| {
            let mut song = Self::default();
            while let Some(index) = frame.next_field_index()? {
                match index {
                    1 => song.title = frame.field()?,
                    2 => song.year = frame.field()?,
                    3 => song.performers = frame.field()?,
                    4 => song.rating = frame.field()?,
                    _ => break,
                }
            }
            Ok(song)
        })
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn coltrane() -> Musician {
    Musician {
        name: "John Coltrane".to_string(),
        id: Uuid::parse_str("00112233-4455-6677-8899-aabbccddeeff").unwrap(),
        born: Timestamp::from_unix_nanos(-1_365_638_400_000_000_000),
    }
}

pub fn giant_steps() -> SongV2 {
    SongV2 {
        title: "Giant Steps".to_string(),
        year: 1959,
        performers: vec![coltrane()],
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Encode `value`, decode it back, and check that every byte was consumed
/// and the result compares equal. Returns the encoding.
pub fn assert_round_trip<T: Record + Debug>(value: &T) -> Vec<u8> {
    let bytes = value.to_bytes();
    let (decoded, rest) = T::from_bytes(&bytes)
        .unwrap_or_else(|e| panic!("failed to decode {value:?}: {e}"));
    assert!(
        decoded.wire_eq(value),
        "round trip mismatch: {decoded:?} != {value:?}"
    );
    assert!(rest.is_empty(), "{} trailing bytes", rest.len());
    bytes
}

/// Decode a hex fixture.
pub fn hex_bytes(fixture: &str) -> Vec<u8> {
    let compact: String = fixture.split_whitespace().collect();
    hex::decode(compact).expect("valid hex fixture")
}
