/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::impls::RiceReader;
use crate::traits::*;
use crate::utils::bits;
use alloc::vec::Vec;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
#[cfg(feature = "std")]
use std::io::{Read, Write};

/// An immutable sequence of Golomb−Rice codes.
///
/// Instances are usually created by
/// [`RiceBitVecBuilder::build`](crate::impls::RiceBitVecBuilder::build). The
/// bits are never modified after construction, so any number of
/// [`RiceReader`]s, each with its own cursors, can decode the same vector
/// concurrently.
///
/// The exact number of encoded bits is kept together with the words, and
/// returned by [`bits`](RiceBitVec::bits);
/// [`allocated_bits`](RiceBitVec::allocated_bits) returns instead the number
/// of bits in the backing words.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawRiceBitVec<B>",
        bound(deserialize = "B: AsRef<[u64]> + serde::Deserialize<'de>")
    )
)]
pub struct RiceBitVec<B = Vec<u64>> {
    data: B,
    bit_len: usize,
}

/// Deserialized fields of a [`RiceBitVec`], before the length is checked
/// against the words.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRiceBitVec<B> {
    data: B,
    bit_len: usize,
}

#[cfg(feature = "serde")]
impl<B: AsRef<[u64]>> TryFrom<RawRiceBitVec<B>> for RiceBitVec<B> {
    type Error = &'static str;

    fn try_from(raw: RawRiceBitVec<B>) -> Result<Self, Self::Error> {
        if bits::words_for(raw.bit_len) > raw.data.as_ref().len() {
            return Err("bit length exceeds the number of words");
        }
        Ok(Self {
            data: raw.data,
            bit_len: raw.bit_len,
        })
    }
}

impl<B: AsRef<[u64]>> RiceBitVec<B> {
    /// Create a vector from its words and its length in bits.
    ///
    /// Bits beyond `bit_len` are not guaranteed to be ignored by readers
    /// that decode past the end of the stream.
    pub fn from_raw_parts(data: B, bit_len: usize) -> Self {
        debug_assert!(bits::words_for(bit_len) <= data.as_ref().len());
        Self { data, bit_len }
    }

    /// Return the words and the length in bits.
    pub fn into_raw_parts(self) -> (B, usize) {
        (self.data, self.bit_len)
    }

    /// Return the backing words.
    pub fn into_inner(self) -> B {
        self.data
    }

    /// Return the number of encoded bits.
    #[must_use]
    pub fn bits(&self) -> usize {
        self.bit_len
    }

    /// Return the number of bits of the backing words.
    #[must_use]
    pub fn allocated_bits(&self) -> usize {
        self.data.as_ref().len() * 64
    }

    /// Return a reader positioned at the start of the stream.
    ///
    /// Both cursors point at bit zero, so unless the stream contains only
    /// unary codes the reader must be positioned with
    /// [`read_reset`](RiceRead::read_reset) before decoding.
    pub fn reader(&self) -> RiceReader<'_> {
        RiceReader::new(self.data.as_ref())
    }

    /// Return a reader whose fixed cursor is at `fixed_pos` and whose unary
    /// cursor is at `fixed_pos + unary_offset`.
    pub fn reader_at(&self, fixed_pos: usize, unary_offset: usize) -> RiceReader<'_> {
        let mut reader = self.reader();
        reader.read_reset(fixed_pos, unary_offset);
        reader
    }
}

#[cfg(feature = "std")]
impl<B: AsRef<[u64]>> RiceBitVec<B> {
    /// Write the words in little-endian byte order, without any header, and
    /// return the number of bytes written.
    ///
    /// The length in bits must be stored separately to
    /// [deserialize](RiceBitVec::deserialize) the vector.
    pub fn serialize(&self, writer: &mut impl Write) -> std::io::Result<usize> {
        for word in self.data.as_ref() {
            writer.write_all(&word.to_le_bytes())?;
        }
        Ok(self.data.as_ref().len() * 8)
    }
}

#[cfg(feature = "std")]
impl RiceBitVec {
    /// Read a vector of `bit_len` bits written by
    /// [`serialize`](RiceBitVec::serialize).
    ///
    /// Exactly `bit_len.div_ceil(64)` words are read.
    pub fn deserialize(reader: &mut impl Read, bit_len: usize) -> std::io::Result<Self> {
        let mut data = Vec::new();
        bits::read_le_words(reader, bits::words_for(bit_len), &mut data)?;
        Ok(Self { data, bit_len })
    }
}

impl<B: AsRef<[u64]>> AsRef<[u64]> for RiceBitVec<B> {
    fn as_ref(&self) -> &[u64] {
        self.data.as_ref()
    }
}
