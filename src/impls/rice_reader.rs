/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use crate::utils::{bits, select_in_word};

/// An implementation of [`RiceRead`] on a slice of words.
///
/// The fixed cursor is a bit position. The unary cursor is a window on the
/// current word: `window` contains the bits of the word not consumed yet,
/// shifted to the lowest positions, `valid_bits` is their number, and
/// `unary_word` is the index of the next word to load.
///
/// Out-of-bounds word accesses caused by decoding past the end of the stream
/// panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiceReader<'a> {
    data: &'a [u64],
    fixed_pos: usize,
    unary_word: usize,
    window: u64,
    valid_bits: usize,
}

impl<'a> RiceReader<'a> {
    /// Create a new reader with both cursors at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u64]) -> Self {
        Self {
            data,
            fixed_pos: 0,
            unary_word: 0,
            window: 0,
            valid_bits: 0,
        }
    }

    /// Return the bit position of the fixed cursor.
    #[must_use]
    pub fn fixed_pos(&self) -> usize {
        self.fixed_pos
    }

    /// Return the bit position of the unary cursor.
    #[must_use]
    pub fn unary_pos(&self) -> usize {
        self.unary_word * 64 - self.valid_bits
    }

    #[inline(always)]
    fn next_word(&mut self) -> u64 {
        let word = self.data[self.unary_word];
        self.unary_word += 1;
        word
    }

    /// Consume the bits of the window up to position `pos` (included).
    #[inline(always)]
    fn consume_through(&mut self, pos: usize) {
        // pos might be 63
        self.window >>= pos;
        self.window >>= 1;
        self.valid_bits -= pos + 1;
    }
}

impl RiceRead for RiceReader<'_> {
    #[inline]
    fn read_unary(&mut self) -> u64 {
        let mut result = 0;

        if self.window == 0 {
            result += self.valid_bits as u64;
            self.window = self.next_word();
            self.valid_bits = 64;
            while self.window == 0 {
                result += 64;
                self.window = self.next_word();
            }
        }

        let pos = self.window.trailing_zeros() as usize;
        self.consume_through(pos);
        result + pos as u64
    }

    #[inline]
    fn read_next(&mut self, log2_golomb: usize) -> u64 {
        debug_assert!(log2_golomb < 64);
        let quotient = self.read_unary();
        let remainder = bits::extract(self.data, self.fixed_pos, log2_golomb);
        self.fixed_pos += log2_golomb;
        (quotient << log2_golomb) | remainder
    }

    fn skip_subtree(&mut self, nodes: usize, fixed_len: usize) {
        self.fixed_pos += fixed_len;
        if nodes == 0 {
            return;
        }
        let mut missing = nodes;
        loop {
            let count = self.window.count_ones() as usize;
            if count >= missing {
                break;
            }
            missing -= count;
            self.window = self.next_word();
            self.valid_bits = 64;
        }

        let pos = select_in_word(self.window, missing - 1);
        self.consume_through(pos);
    }

    fn read_reset(&mut self, fixed_pos: usize, unary_offset: usize) {
        self.fixed_pos = fixed_pos;
        let unary_pos = fixed_pos + unary_offset;
        let word = unary_pos / 64;
        let bit = unary_pos % 64;
        // The unary region might be empty and end at the end of the data
        self.window = self.data.get(word).copied().unwrap_or(0) >> bit;
        self.unary_word = word + 1;
        self.valid_bits = 64 - bit;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::RiceBitVecBuilder;

    #[test]
    fn test_example() {
        let mut builder = <RiceBitVecBuilder>::new();
        builder.append_fixed(5, 3);
        builder.append_fixed(2, 3);
        builder.append_unary_all(&[1, 0]);
        let rbv = builder.build();

        let mut reader = rbv.reader();
        reader.read_reset(0, 6);
        assert_eq!(reader.read_next(3), 13);
        assert_eq!(reader.read_next(3), 2);
        assert_eq!(reader.fixed_pos(), 6);
        assert_eq!(reader.unary_pos(), 9);
    }

    #[test]
    fn test_long_unary() {
        let lens = [0, 64, 1, 200, 63, 0, 128, 127, 5];
        let mut builder = <RiceBitVecBuilder>::new();
        builder.append_unary_all(&lens);
        let rbv = builder.build();

        // A fresh reader starts at bit zero
        let mut reader = rbv.reader();
        let mut pos = 0;
        for &len in &lens {
            assert_eq!(reader.read_unary(), len as u64);
            pos += len as usize + 1;
            assert_eq!(reader.unary_pos(), pos);
        }
        assert_eq!(reader.fixed_pos(), 0);
    }

    #[test]
    fn test_skip_matches_reads() {
        let values: Vec<u64> = (0..300).map(|i| (i * i * 37) % 1000).collect();
        let log2_golomb = 4;
        let mut builder = <RiceBitVecBuilder>::new();
        for &v in &values {
            builder.append_fixed(v, log2_golomb);
        }
        let unary_offset = builder.bits();
        builder.append_unary_all(
            &values
                .iter()
                .map(|&v| (v >> log2_golomb) as u32)
                .collect::<Vec<_>>(),
        );
        let rbv = builder.build();

        for start in [0, 1, 17, 100] {
            for nodes in [0, 1, 2, 5, 64, 150] {
                let mut read = rbv.reader_at(0, unary_offset);
                let mut skip = rbv.reader_at(0, unary_offset);
                for _ in 0..start {
                    read.read_next(log2_golomb);
                    skip.read_next(log2_golomb);
                }
                for _ in 0..nodes {
                    read.read_next(log2_golomb);
                }
                skip.skip_subtree(nodes, nodes * log2_golomb);
                assert_eq!(read, skip, "start {start}, nodes {nodes}");
                assert_eq!(
                    read.read_next(log2_golomb),
                    values[start + nodes],
                    "start {start}, nodes {nodes}"
                );
            }
        }
    }

    #[test]
    fn test_reset() {
        let values: Vec<u64> = (0..200).map(|i| (i * 7919) % 5000).collect();
        let log2_golomb = 5;
        let mut builder = <RiceBitVecBuilder>::new();
        for &v in &values {
            builder.append_fixed(v, log2_golomb);
        }
        let unary_offset = builder.bits();
        for &v in &values {
            builder.append_unary((v >> log2_golomb) as u32);
        }
        let rbv = builder.build();

        let mut reader = rbv.reader();
        for i in (0..values.len()).rev() {
            // The unary cursor of node i is at the end of the unary codes of
            // the previous nodes
            let unary_before: usize = values[..i]
                .iter()
                .map(|&v| (v >> log2_golomb) as usize + 1)
                .sum();
            let fixed_pos = i * log2_golomb;
            reader.read_reset(fixed_pos, unary_offset - fixed_pos + unary_before);
            assert_eq!(reader.read_next(log2_golomb), values[i]);
        }
    }

    #[test]
    fn test_reset_at_end() {
        let mut builder = <RiceBitVecBuilder>::new();
        builder.append_fixed(0, 64);
        let rbv = builder.build();
        let reader = rbv.reader_at(64, 0);
        assert_eq!(reader.unary_pos(), 64);
        assert_eq!(reader.fixed_pos(), 64);
    }
}
