/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The result of a search on a [`FenwickTree`]: the length of the prefix
/// found, and the difference between the searched bound and the sum of the
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Found {
    pub length: usize,
    pub excess: u64,
}

/// Dynamic prefix sums over a sequence of nonnegative integers.
///
/// Elements are indexed from 1 to [`len`](FenwickTree::len) (included), and
/// each element must be at most [`bound`](FenwickTree::bound). Implementations
/// differ only in the layout of the nodes, so all of them are
/// interchangeable, but their serialized forms are not.
///
/// None of the methods checks its arguments: out-of-range indices cause a
/// panic or a meaningless result, and letting an element become negative (or
/// larger than the bound) breaks the monotonicity the search methods rely on.
pub trait FenwickTree {
    /// Return the sum of the first `length` elements, `length` being in the
    /// range [0 . . [`len`](FenwickTree::len)].
    fn prefix(&self, length: usize) -> u64;

    /// Add `c` (possibly negative) to the element of index `idx`.
    ///
    /// The element must remain nonnegative.
    fn add(&mut self, idx: usize, c: i64);

    /// Return the length of the longest prefix whose sum is at most `val`,
    /// and how much `val` exceeds that sum.
    ///
    /// The length is zero if the first element is larger than `val`.
    fn find_excess(&self, val: u64) -> Found;

    /// Like [`find_excess`](FenwickTree::find_excess), discarding the excess.
    #[inline]
    fn find(&self, val: u64) -> usize {
        self.find_excess(val).length
    }

    /// Return the length of the longest prefix whose *complemented* sum is at
    /// most `val`, and how much `val` exceeds that sum.
    ///
    /// The complemented sum of the first `length` elements is
    /// `length · bound() − prefix(length)`.
    fn comp_find_excess(&self, val: u64) -> Found;

    /// Like [`comp_find_excess`](FenwickTree::comp_find_excess), discarding
    /// the excess.
    #[inline]
    fn comp_find(&self, val: u64) -> usize {
        self.comp_find_excess(val).length
    }

    /// Append `val` to the sequence.
    fn push(&mut self, val: u64);

    /// Remove the last element of the sequence.
    ///
    /// Allocated space is not released.
    fn pop(&mut self);

    /// Make room for at least `space` elements.
    ///
    /// Nothing happens if enough space is already available.
    fn reserve(&mut self, space: usize);

    /// Shrink the allocated space to `space` elements, if possible, never
    /// going below the space needed by the current elements.
    fn trim(&mut self, space: usize);

    /// Shrink the allocated space to the minimum.
    #[inline]
    fn trim_to_fit(&mut self) {
        self.trim(0);
    }

    /// Return the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Return whether the sequence is empty.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the maximum value of an element.
    fn bound(&self) -> u64;

    /// Return an estimate of the size in bits of the structure.
    fn bit_count(&self) -> usize;
}
