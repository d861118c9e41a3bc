/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{clear_lowbit, highest_power, lowbit};
use crate::traits::*;
#[cfg(feature = "std")]
use crate::utils::bits;
use alloc::vec;
use alloc::vec::Vec;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
#[cfg(feature = "std")]
use std::io::{Read, Write};

/// A Fenwick tree storing nodes in index order, one word per node.
///
/// # Examples
/// ```
/// use rice_fenwick::prelude::*;
///
/// let mut tree = FixedF::<100>::new(&[3, 0, 5, 2]);
/// assert_eq!(tree.prefix(3), 8);
/// tree.add(2, 4);
/// assert_eq!(tree.prefix(3), 12);
///
/// let found = tree.find_excess(10);
/// assert_eq!(found.length, 2);
/// assert_eq!(found.excess, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFixedF"))]
pub struct FixedF<const BOUND: u64> {
    /// Node `i` is at position `i`; position zero is unused.
    tree: Vec<u64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFixedF {
    tree: Vec<u64>,
}

#[cfg(feature = "serde")]
impl<const BOUND: u64> TryFrom<RawFixedF> for FixedF<BOUND> {
    type Error = &'static str;

    fn try_from(raw: RawFixedF) -> Result<Self, Self::Error> {
        if raw.tree.is_empty() {
            return Err("missing unused node zero");
        }
        Ok(Self { tree: raw.tree })
    }
}

impl<const BOUND: u64> FixedF<BOUND> {
    /// Create a tree containing the given elements, in linear time.
    pub fn new(sequence: &[u64]) -> Self {
        #[cfg(feature = "checks")]
        assert!(sequence.iter().all(|&v| v <= BOUND));
        let size = sequence.len();
        let mut tree = Vec::with_capacity(size + 1);
        tree.push(0);
        tree.extend_from_slice(sequence);

        let mut m = 2;
        while m <= size {
            let mut idx = m;
            while idx <= size {
                tree[idx] += tree[idx - m / 2];
                idx += m;
            }
            m <<= 1;
        }

        Self { tree }
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.tree.len() - 1
    }

    #[inline(always)]
    pub(super) fn node(&self, idx: usize) -> u64 {
        self.tree[idx]
    }
}

impl<const BOUND: u64> Default for FixedF<BOUND> {
    fn default() -> Self {
        Self { tree: vec![0] }
    }
}

impl<const BOUND: u64> FenwickTree for FixedF<BOUND> {
    fn prefix(&self, mut length: usize) -> u64 {
        debug_assert!(length <= self.size());
        let mut sum = 0;
        while length != 0 {
            sum += self.tree[length];
            length = clear_lowbit(length);
        }
        sum
    }

    fn add(&mut self, mut idx: usize, c: i64) {
        debug_assert!(idx >= 1);
        let size = self.size();
        while idx <= size {
            self.tree[idx] = self.tree[idx].wrapping_add_signed(c);
            idx += lowbit(idx);
        }
    }

    fn find_excess(&self, mut val: u64) -> Found {
        let size = self.size();
        let mut node = 0;
        let mut m = highest_power(size);
        while m != 0 {
            if node + m <= size {
                let value = self.tree[node + m];
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
        let size = self.size();
        let mut node = 0;
        let mut m = highest_power(size);
        while m != 0 {
            if node + m <= size {
                // The node covers m elements
                let value = BOUND * m as u64 - self.tree[node + m];
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
        let size = self.size() + 1;
        let mut sum = val;
        let mut idx = size - 1;
        let low = clear_lowbit(size);
        while idx > low {
            sum += self.tree[idx];
            idx = clear_lowbit(idx);
        }
        self.tree.push(sum);
    }

    fn pop(&mut self) {
        debug_assert!(self.size() > 0);
        self.tree.pop();
    }

    fn reserve(&mut self, space: usize) {
        self.tree
            .reserve((space + 1).saturating_sub(self.tree.len()));
    }

    fn trim(&mut self, space: usize) {
        self.tree.shrink_to(space + 1);
    }

    #[inline]
    fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    fn bound(&self) -> u64 {
        BOUND
    }

    fn bit_count(&self) -> usize {
        core::mem::size_of::<Self>() * 8 + self.tree.capacity() * 64
    }
}

#[cfg(feature = "std")]
impl<const BOUND: u64> FixedF<BOUND> {
    /// Write the number of elements and the nodes, in index order, as
    /// little-endian words, returning the number of bytes written.
    pub fn serialize(&self, writer: &mut impl Write) -> std::io::Result<usize> {
        writer.write_all(&(self.size() as u64).to_le_bytes())?;
        for node in &self.tree[1..] {
            writer.write_all(&node.to_le_bytes())?;
        }
        Ok(self.tree.len() * 8)
    }

    /// Read a tree written by [`serialize`](FixedF::serialize).
    pub fn deserialize(reader: &mut impl Read) -> std::io::Result<Self> {
        let size = bits::read_len(reader)?;
        let mut tree = vec![0];
        bits::read_le_words(reader, size, &mut tree)?;
        Ok(Self { tree })
    }
}
