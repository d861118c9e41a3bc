/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Decoding of Golomb−Rice codes stored in two regions.
///
/// A stream built by a [`RiceBitVecBuilder`](crate::impls::RiceBitVecBuilder)
/// is a concatenation of segments, each made of a *fixed* region, containing
/// the low bits of each value, followed by a *unary* region, containing the
/// high bits of the same values, in the same order. A decoder keeps two
/// cursors, one per region, and a value is decoded by reading its quotient from
/// the unary cursor and its remainder from the fixed cursor.
///
/// Decoding past the end of the stream, or with cursors that do not point at
/// matching regions, yields meaningless values (or a panic on out-of-bounds
/// word access), but never unsafety.
pub trait RiceRead {
    /// Read a unary code (zeros followed by a one) from the unary cursor,
    /// without touching the fixed cursor.
    fn read_unary(&mut self) -> u64;

    /// Read a Rice code with parameter `log2_golomb`.
    ///
    /// The quotient is read from the unary cursor, the remainder (the
    /// `log2_golomb` lowest bits) from the fixed cursor.
    fn read_next(&mut self, log2_golomb: usize) -> u64;

    /// Skip `nodes` codes, whose fixed parts occupy `fixed_len` bits overall.
    ///
    /// The fixed cursor is simply moved forward by `fixed_len` bits; the unary
    /// cursor is moved past `nodes` terminators without decoding, and stays
    /// put if `nodes` is zero.
    fn skip_subtree(&mut self, nodes: usize, fixed_len: usize);

    /// Move the fixed cursor to `fixed_pos` and the unary cursor to
    /// `fixed_pos + unary_offset`.
    fn read_reset(&mut self, fixed_pos: usize, unary_offset: usize);
}
