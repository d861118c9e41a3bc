/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Storage for Golomb−Rice codes.

Values are accumulated in a [`RiceBitVecBuilder`], which appends fixed-width
codes with [`append_fixed`](RiceBitVecBuilder::append_fixed) and batches of
unary codes with [`append_unary_all`](RiceBitVecBuilder::append_unary_all).
Calling [`build`](RiceBitVecBuilder::build) trims the backend and returns an
immutable [`RiceBitVec`], from which any number of independent
[`RiceReader`]s can be obtained.

The expected layout is a sequence of segments, each made of the fixed parts
of a group of values followed by their unary parts. A reader positioned with
[`read_reset`](crate::traits::RiceRead::read_reset) at the start of the fixed
part of a segment, with the length of that fixed part as unary offset, decodes
the values of the segment in order.

*/

mod rice_builder;
pub use rice_builder::RiceBitVecBuilder;

mod rice_bit_vec;
pub use rice_bit_vec::RiceBitVec;

mod rice_reader;
pub use rice_reader::RiceReader;
