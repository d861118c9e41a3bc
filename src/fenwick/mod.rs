/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of [`FenwickTree`](crate::traits::FenwickTree).

Node `i` (starting from one) of a Fenwick tree contains the sum of the
elements of index in (`i` − `lowbit(i)` . . `i`], where `lowbit(i)` is the
lowest bit set in `i`; the *height* of node `i` is the number of trailing
zeros of `i`. The implementations differ in how they lay out nodes in memory:

- [`FixedF`] stores nodes in index order, as in the classical
  presentation;
- [`FixedL`] stores nodes by height: all nodes of height zero, then all nodes
  of height one, and so on, which makes the first steps of a search
  contiguous in memory.

The parameter `BOUND` is the largest value an element can assume; it is used
by complemented searches, and checked on insertion if the `checks` feature is
enabled.

*/

mod fixed_f;
pub use fixed_f::FixedF;

mod fixed_l;
pub use fixed_l::FixedL;

/// Return the lowest bit set in `n`, or zero.
#[inline(always)]
pub(crate) fn lowbit(n: usize) -> usize {
    n & n.wrapping_neg()
}

/// Return `n` with its lowest set bit cleared.
#[inline(always)]
pub(crate) fn clear_lowbit(n: usize) -> usize {
    n & n.wrapping_sub(1)
}

/// Return the largest power of two not larger than `n`, or zero.
#[inline(always)]
pub(crate) fn highest_power(n: usize) -> usize {
    if n == 0 { 0 } else { 1 << n.ilog2() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bit_helpers() {
        assert_eq!(lowbit(0), 0);
        assert_eq!(lowbit(12), 4);
        assert_eq!(clear_lowbit(12), 8);
        assert_eq!(clear_lowbit(1), 0);
        assert_eq!(highest_power(0), 0);
        assert_eq!(highest_power(1), 1);
        assert_eq!(highest_power(12), 8);
        assert_eq!(highest_power(16), 16);
    }
}
