/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{clear_lowbit, highest_power, lowbit};
use crate::fenwick::FixedF;
use crate::traits::*;
#[cfg(feature = "std")]
use crate::utils::bits;
use alloc::vec::Vec;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
#[cfg(feature = "std")]
use std::io::{Read, Write};

/// Return the number of levels of a tree with `size` elements.
#[inline(always)]
fn levels_for(size: usize) -> usize {
    if size == 0 { 0 } else { size.ilog2() as usize + 1 }
}

/// Return the number of nodes of height `height` in a tree with `size`
/// elements.
#[inline(always)]
fn nodes_at(size: usize, height: usize) -> usize {
    (size >> height).div_ceil(2)
}

/// A Fenwick tree storing nodes by height, one word per node.
///
/// Node `i` of height `h` is element `i >> (h + 1)` of level `h`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFixedL"))]
pub struct FixedL<const BOUND: u64> {
    levels: Vec<Vec<u64>>,
    size: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFixedL {
    levels: Vec<Vec<u64>>,
    size: usize,
}

#[cfg(feature = "serde")]
impl<const BOUND: u64> TryFrom<RawFixedL> for FixedL<BOUND> {
    type Error = &'static str;

    fn try_from(raw: RawFixedL) -> Result<Self, Self::Error> {
        // Levels above the highest one may be present, but empty
        let consistent = raw
            .levels
            .iter()
            .enumerate()
            .all(|(height, level)| level.len() == nodes_at(raw.size, height))
            && raw.levels.len() >= levels_for(raw.size);
        if !consistent {
            return Err("levels do not match the number of elements");
        }
        Ok(Self {
            levels: raw.levels,
            size: raw.size,
        })
    }
}

impl<const BOUND: u64> FixedL<BOUND> {
    /// Create a tree containing the given elements, in linear time.
    pub fn new(sequence: &[u64]) -> Self {
        let size = sequence.len();
        let mut levels: Vec<Vec<u64>> = (0..levels_for(size))
            .map(|h| Vec::with_capacity(nodes_at(size, h)))
            .collect();
        let fixed = FixedF::<BOUND>::new(sequence);
        // Nodes of each level are met in index order
        for idx in 1..=size {
            levels[idx.trailing_zeros() as usize].push(fixed.node(idx));
        }
        Self { levels, size }
    }

    #[inline(always)]
    fn node(&self, idx: usize) -> u64 {
        let height = idx.trailing_zeros() as usize;
        self.levels[height][idx >> (height + 1)]
    }

    #[inline(always)]
    fn node_mut(&mut self, idx: usize) -> &mut u64 {
        let height = idx.trailing_zeros() as usize;
        &mut self.levels[height][idx >> (height + 1)]
    }
}

impl<const BOUND: u64> FenwickTree for FixedL<BOUND> {
    fn prefix(&self, mut length: usize) -> u64 {
        debug_assert!(length <= self.size);
        let mut sum = 0;
        while length != 0 {
            sum += self.node(length);
            length = clear_lowbit(length);
        }
        sum
    }

    fn add(&mut self, mut idx: usize, c: i64) {
        debug_assert!(idx >= 1);
        while idx <= self.size {
            let node = self.node_mut(idx);
            *node = node.wrapping_add_signed(c);
            idx += lowbit(idx);
        }
    }

    fn find_excess(&self, mut val: u64) -> Found {
        let mut node = 0;
        let mut m = highest_power(self.size);
        while m != 0 {
            if node + m <= self.size {
                let value = self.node(node + m);
                if val >= value {
                    node += m;
                    val -= value;
                }
            }
            m >>= 1;
        }
        Found {
            length: node,
            excess: val,
        }
    }

    fn comp_find_excess(&self, mut val: u64) -> Found {
        let mut node = 0;
        let mut m = highest_power(self.size);
        while m != 0 {
            if node + m <= self.size {
                let value = BOUND * m as u64 - self.node(node + m);
                if val >= value {
                    node += m;
                    val -= value;
                }
            }
            m >>= 1;
        }
        Found {
            length: node,
            excess: val,
        }
    }

    fn push(&mut self, val: u64) {
        #[cfg(feature = "checks")]
        assert!(val <= BOUND, "Value {} is larger than {}", val, BOUND);
        let size = self.size + 1;
        let mut sum = val;
        let mut idx = size - 1;
        let low = clear_lowbit(size);
        while idx > low {
            sum += self.node(idx);
            idx = clear_lowbit(idx);
        }

        let height = size.trailing_zeros() as usize;
        if self.levels.len() <= height {
            self.levels.resize_with(height + 1, Vec::new);
        }
        self.levels[height].push(sum);
        self.size = size;
    }

    fn pop(&mut self) {
        debug_assert!(self.size > 0);
        self.levels[self.size.trailing_zeros() as usize].pop();
        self.size -= 1;
    }

    fn reserve(&mut self, space: usize) {
        let levels = levels_for(space);
        if self.levels.len() < levels {
            self.levels.resize_with(levels, Vec::new);
        }
        for (height, level) in self.levels.iter_mut().enumerate().take(levels) {
            level.reserve(nodes_at(space, height).saturating_sub(level.len()));
        }
    }

    fn trim(&mut self, space: usize) {
        let space = space.max(self.size);
        let levels = levels_for(space);
        // Levels above are empty
        self.levels.truncate(levels);
        self.levels.shrink_to(levels);
        for (height, level) in self.levels.iter_mut().enumerate() {
            level.shrink_to(nodes_at(space, height));
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.size
    }

    #[inline]
    fn bound(&self) -> u64 {
        BOUND
    }

    fn bit_count(&self) -> usize {
        core::mem::size_of::<Self>() * 8
            + self.levels.capacity() * core::mem::size_of::<Vec<u64>>() * 8
            + self
                .levels
                .iter()
                .map(|level| level.capacity() * 64)
                .sum::<usize>()
    }
}

#[cfg(feature = "std")]
impl<const BOUND: u64> FixedL<BOUND> {
    /// Write the number of elements and the nodes, level by level, as
    /// little-endian words, returning the number of bytes written.
    pub fn serialize(&self, writer: &mut impl Write) -> std::io::Result<usize> {
        writer.write_all(&(self.size as u64).to_le_bytes())?;
        for level in &self.levels {
            for node in level {
                writer.write_all(&node.to_le_bytes())?;
            }
        }
        Ok((self.size + 1) * 8)
    }

    /// Read a tree written by [`serialize`](FixedL::serialize).
    pub fn deserialize(reader: &mut impl Read) -> std::io::Result<Self> {
        let size = bits::read_len(reader)?;
        let mut levels = Vec::with_capacity(levels_for(size));
        for height in 0..levels_for(size) {
            let mut level = Vec::new();
            bits::read_le_words(reader, nodes_at(size, height), &mut level)?;
            levels.push(level);
        }
        Ok(Self { levels, size })
    }
}
