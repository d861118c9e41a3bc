/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::vec::Vec;

/// A growable, trimmable array of 64-bit words.
///
/// This is the only service a
/// [`RiceBitVecBuilder`](crate::impls::RiceBitVecBuilder) needs from its
/// backend: raw word access through [`AsRef`] and [`AsMut`], growth, and a
/// final trim.
///
/// Growing may reallocate, so word indices are the only stable way to refer
/// to positions in the store.
pub trait WordStore: AsRef<[u64]> + AsMut<[u64]> {
    /// Resize the store to at least `words` words, filling new words with
    /// zeros. Nothing happens if the store is already large enough.
    fn ensure_words(&mut self, words: usize);

    /// Truncate the store to exactly `words` words (which must not be more
    /// than the current length) and release spare capacity.
    fn trim_to_words(&mut self, words: usize);
}

impl WordStore for Vec<u64> {
    #[inline]
    fn ensure_words(&mut self, words: usize) {
        if self.len() < words {
            self.resize(words, 0);
        }
    }

    fn trim_to_words(&mut self, words: usize) {
        debug_assert!(words <= self.len());
        self.truncate(words);
        self.shrink_to_fit();
    }
}
