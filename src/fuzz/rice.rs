/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

const DEBUG: bool = false;

macro_rules! debugln {
    ($($arg:tt)*) => {
        if DEBUG {
            println!($($arg)*);
        }
    };
}

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    segments: Vec<Segment>,
}

#[derive(Arbitrary, Debug, Clone)]
struct Segment {
    log2_golomb: u8,
    values: Vec<u64>,
    skip: u8,
}

pub fn harness(data: FuzzCase) {
    let mut data = data;
    // Keep unary codes short
    for segment in &mut data.segments {
        let k = (segment.log2_golomb % 64) as usize;
        segment.log2_golomb = k as u8;
        for value in &mut segment.values {
            *value = (*value & bits::mask(k)) | (((*value >> k) % 4096) << k);
        }
    }
    debugln!("{:#?}", data);

    let mut builder = <RiceBitVecBuilder>::new();
    let mut starts = vec![];
    for segment in &data.segments {
        let k = segment.log2_golomb as usize;
        let fixed_pos = builder.bits();
        for &value in &segment.values {
            builder.append_fixed(value, k);
        }
        let unary_offset = builder.bits() - fixed_pos;
        let unary: Vec<u32> = segment.values.iter().map(|&v| (v >> k) as u32).collect();
        builder.append_unary_all(&unary);
        starts.push((fixed_pos, unary_offset));
    }
    let rbv = builder.build();

    for (segment, &(fixed_pos, unary_offset)) in data.segments.iter().zip(&starts) {
        let k = segment.log2_golomb as usize;
        let mut reader = rbv.reader_at(fixed_pos, unary_offset);
        for &value in &segment.values {
            assert_eq!(reader.read_next(k), value);
        }

        let skip = segment.skip as usize;
        if skip > 0 && skip < segment.values.len() {
            let mut skipper = rbv.reader_at(fixed_pos, unary_offset);
            let mut reader = rbv.reader_at(fixed_pos, unary_offset);
            skipper.skip_subtree(skip, skip * k);
            for _ in 0..skip {
                reader.read_next(k);
            }
            assert_eq!(skipper, reader);
            assert_eq!(skipper.read_next(k), segment.values[skip]);
        }
    }
}
