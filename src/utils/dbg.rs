/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// A wrapper over a [`RiceRead`] that report on standard error all operations
/// performed.
pub struct DbgRiceReader<R> {
    reader: R,
}

impl<R> DbgRiceReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: RiceRead> RiceRead for DbgRiceReader<R> {
    fn read_unary(&mut self) -> u64 {
        let value = self.reader.read_unary();
        eprintln!("{{U:{}}}", value);
        value
    }

    fn read_next(&mut self, log2_golomb: usize) -> u64 {
        let value = self.reader.read_next(log2_golomb);
        eprintln!("{{R{}:{}}}", log2_golomb, value);
        value
    }

    fn skip_subtree(&mut self, nodes: usize, fixed_len: usize) {
        eprintln!("skip_subtree({}, {})", nodes, fixed_len);
        self.reader.skip_subtree(nodes, fixed_len)
    }

    fn read_reset(&mut self, fixed_pos: usize, unary_offset: usize) {
        eprintln!("read_reset({}, {})", fixed_pos, unary_offset);
        self.reader.read_reset(fixed_pos, unary_offset)
    }
}
