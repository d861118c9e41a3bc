/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::impls::RiceBitVec;
use crate::traits::*;
use crate::utils::bits;
use alloc::vec::Vec;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Accumulates fixed-width and unary codes in a [`WordStore`].
///
/// Bits are appended in little-endian order. The builder does not enforce any
/// layout: it is up to the caller to append, for each segment, first the
/// fixed parts and then the unary parts of its values, and to remember the
/// [bit lengths](RiceBitVecBuilder::bits) needed to position readers later.
///
/// # Examples
/// ```
/// use rice_fenwick::prelude::*;
///
/// let mut builder = <RiceBitVecBuilder>::new();
/// // Fixed region: 5 and 2 on three bits
/// builder.append_fixed(5, 3);
/// builder.append_fixed(2, 3);
/// let unary_offset = builder.bits();
/// // Unary region: quotients 1 and 0
/// builder.append_unary_all(&[1, 0]);
///
/// let rbv = builder.build();
/// let mut reader = rbv.reader_at(0, unary_offset);
/// assert_eq!(reader.read_next(3), 13);
/// assert_eq!(reader.read_next(3), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct RiceBitVecBuilder<B: WordStore = Vec<u64>> {
    data: B,
    bit_len: usize,
}

impl RiceBitVecBuilder {
    /// Create a new builder with space for 16 words.
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create a new builder with space for `words` words.
    pub fn with_capacity(words: usize) -> Self {
        Self::from_store(Vec::with_capacity(words))
    }
}

impl Default for RiceBitVecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: WordStore> RiceBitVecBuilder<B> {
    /// Create a new builder using the given store, which must be **ZERO
    /// INITIALIZED**.
    ///
    /// Appended bits start at bit zero of the store.
    pub fn from_store(data: B) -> Self {
        debug_assert!(data.as_ref().iter().all(|&w| w == 0));
        Self { data, bit_len: 0 }
    }

    /// Append the lowest `log2_golomb` bits of `value`.
    ///
    /// The other bits of `value` are ignored, unless the `checks` feature is
    /// enabled, in which case they must be zero. `log2_golomb` must be at
    /// most 64.
    pub fn append_fixed(&mut self, value: u64, log2_golomb: usize) {
        debug_assert!(log2_golomb <= 64);
        #[cfg(feature = "checks")]
        assert!(
            value & !bits::mask(log2_golomb) == 0,
            "Value {} does not fit in {} bits",
            value,
            log2_golomb
        );
        self.data
            .ensure_words(bits::words_for(self.bit_len + log2_golomb));
        bits::insert(self.data.as_mut(), self.bit_len, value, log2_golomb);
        self.bit_len += log2_golomb;
    }

    /// Append a unary code, that is, `len` zeros followed by a one.
    pub fn append_unary(&mut self, len: u32) {
        self.append_unary_all(&[len]);
    }

    /// Append a unary code for each element of `unary`.
    ///
    /// The result is the same as that of calling
    /// [`append_unary`](RiceBitVecBuilder::append_unary) on each element, but
    /// the store is grown only once.
    pub fn append_unary_all(&mut self, unary: &[u32]) {
        let bit_inc: usize = unary.iter().map(|&u| u as usize + 1).sum();
        self.data.ensure_words(bits::words_for(self.bit_len + bit_inc));

        let words = self.data.as_mut();
        for &u in unary {
            self.bit_len += u as usize;
            words[self.bit_len / 64] |= 1 << (self.bit_len % 64);
            self.bit_len += 1;
        }
    }

    /// Return the number of bits appended so far.
    #[must_use]
    pub fn bits(&self) -> usize {
        self.bit_len
    }

    /// Trim the store to the words actually used and freeze it.
    pub fn build(mut self) -> RiceBitVec<B> {
        let words = bits::words_for(self.bit_len);
        self.data.ensure_words(words);
        self.data.trim_to_words(words);
        RiceBitVec::from_raw_parts(self.data, self.bit_len)
    }
}
