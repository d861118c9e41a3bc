/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Little-endian access to bit fields of at most 64 bits in a slice of
//! words.
//!
//! Bit `i` of the stream is bit `i % 64` of word `i / 64`. Accesses are
//! bounds checked: a field extending past the end of the slice causes a
//! panic.

/// Return a mask with the lowest `n` bits set, `n` being at most 64.
#[must_use]
#[inline(always)]
pub fn mask(n: usize) -> u64 {
    debug_assert!(n <= 64);
    if n == 64 { u64::MAX } else { (1 << n) - 1 }
}

/// Return the number of words needed to store `bits` bits.
#[must_use]
#[inline(always)]
pub fn words_for(bits: usize) -> usize {
    bits.div_ceil(64)
}

/// Return the `n` bits starting at bit `pos` in the lowest bits of the
/// result.
#[must_use]
#[inline]
pub fn extract(data: &[u64], pos: usize, n: usize) -> u64 {
    if n == 0 {
        return 0;
    }
    let word = pos / 64;
    let bit = pos % 64;
    let low = data[word] >> bit;
    let value = if bit + n > 64 {
        // single shift is safe, as bit > 0 here
        low | (data[word + 1] << (64 - bit))
    } else {
        low
    };
    value & mask(n)
}

/// OR the lowest `n` bits of `value` into the stream starting at bit `pos`.
///
/// Bits of `value` above position `n` are ignored. The target bits are
/// expected to be zero.
#[inline]
pub fn insert(data: &mut [u64], pos: usize, value: u64, n: usize) {
    if n == 0 {
        return;
    }
    let value = value & mask(n);
    let word = pos / 64;
    let bit = pos % 64;
    data[word] |= value << bit;
    if bit + n > 64 {
        data[word + 1] |= value >> (64 - bit);
    }
}

/// Words reserved at a time by [`read_le_words`], so that a bogus count
/// ends in an error when the source is exhausted instead of in a huge
/// allocation.
#[cfg(feature = "std")]
const READ_CHUNK: usize = 1 << 16;

/// Read a word count written as a little-endian `u64`.
#[cfg(feature = "std")]
pub(crate) fn read_len(reader: &mut impl std::io::Read) -> std::io::Result<usize> {
    let mut buffer = [0_u8; 8];
    reader.read_exact(&mut buffer)?;
    usize::try_from(u64::from_le_bytes(buffer)).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "length does not fit in usize",
        )
    })
}

/// Append `words` little-endian words read from `reader` to `data`.
#[cfg(feature = "std")]
pub(crate) fn read_le_words(
    reader: &mut impl std::io::Read,
    words: usize,
    data: &mut alloc::vec::Vec<u64>,
) -> std::io::Result<()> {
    let mut buffer = [0_u8; 8];
    let mut missing = words;
    while missing != 0 {
        let chunk = missing.min(READ_CHUNK);
        data.reserve(chunk);
        for _ in 0..chunk {
            reader.read_exact(&mut buffer)?;
            data.push(u64::from_le_bytes(buffer));
        }
        missing -= chunk;
    }
    Ok(())
}
