/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Broadword helpers and debug wrappers.

[`bits`] contains the masked bit insertion and extraction routines used by
builders and readers to access fields that may straddle a word boundary, and
[`select_in_word`] finds the position of a set bit of given rank in a word.

[`DbgRiceReader`] prints on standard error all operations performed by a
[`RiceRead`](crate::traits::RiceRead).

*/

pub mod bits;

mod broadword;
pub use broadword::*;

#[cfg(feature = "std")]
mod dbg;
#[cfg(feature = "std")]
pub use dbg::*;
