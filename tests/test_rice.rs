/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Geometric;
use rice_fenwick::prelude::*;

/// A stream made of segments, each one containing the fixed parts and then
/// the unary parts of a group of values with the same parameter.
struct Segments {
    rbv: RiceBitVec,
    /// For each segment, its parameter, its values, the start of its fixed
    /// part and the length of its fixed part.
    segments: Vec<(usize, Vec<u64>, usize, usize)>,
}

fn gen_segments(seed: u64, n: usize) -> Segments {
    let mut r = SmallRng::seed_from_u64(seed);
    let mut builder = <RiceBitVecBuilder>::new();
    let mut segments = vec![];
    for _ in 0..n {
        let log2_golomb = r.random_range(0..20);
        let distr = Geometric::new(r.random_range(0.001..0.5)).unwrap();
        let values: Vec<u64> = (0..r.random_range(1..200))
            .map(|_| r.sample(&distr) % (1 << 30))
            .collect();
        let fixed_pos = builder.bits();
        for &v in &values {
            builder.append_fixed(v, log2_golomb);
        }
        let unary_offset = builder.bits() - fixed_pos;
        let unary: Vec<u32> = values.iter().map(|&v| (v >> log2_golomb) as u32).collect();
        builder.append_unary_all(&unary);
        segments.push((log2_golomb, values, fixed_pos, unary_offset));
    }
    Segments {
        rbv: builder.build(),
        segments,
    }
}

#[test]
fn test_example() {
    let mut builder = <RiceBitVecBuilder>::new();
    builder.append_fixed(5, 3);
    builder.append_fixed(2, 3);
    builder.append_unary_all(&[1, 0]);
    let rbv = builder.build();
    let mut reader = rbv.reader();
    reader.read_reset(0, 6);
    assert_eq!(reader.read_next(3), 13);
    assert_eq!(reader.read_next(3), 2);
}

#[test]
fn test_fixed_round_trip() {
    let mut r = SmallRng::seed_from_u64(0);
    let mut builder = <RiceBitVecBuilder>::new();
    let mut written = vec![];
    for _ in 0..10000 {
        let k = r.random_range(0..64);
        let value = r.random::<u64>() & bits::mask(k);
        builder.append_fixed(value, k);
        written.push((value, k));
    }
    let unary_offset = builder.bits();
    // Zero quotients
    builder.append_unary_all(&vec![0_u32; written.len()]);
    let rbv = builder.build();

    let mut reader = rbv.reader_at(0, unary_offset);
    for &(value, k) in &written {
        assert_eq!(reader.read_next(k), value);
    }
    assert_eq!(reader.fixed_pos(), unary_offset);
}

#[test]
fn test_unary_round_trip() {
    let mut r = SmallRng::seed_from_u64(1);
    let lens: Vec<u32> = (0..10000)
        .map(|_| match r.random_range(0..4) {
            0 => 0,
            1 => r.random_range(0..64),
            2 => r.random_range(64..200),
            _ => r.random_range(200..1000),
        })
        .collect();
    let mut builder = <RiceBitVecBuilder>::new();
    for chunk in lens.chunks(37) {
        builder.append_unary_all(chunk);
    }
    let rbv = builder.build();
    assert_eq!(
        rbv.bits(),
        lens.iter().map(|&l| l as usize + 1).sum::<usize>()
    );

    let mut reader = rbv.reader();
    for &len in &lens {
        assert_eq!(reader.read_unary(), len as u64);
    }
    let mut reader = rbv.reader();
    for &len in &lens {
        assert_eq!(reader.read_next(0), len as u64);
    }
    assert_eq!(reader.unary_pos(), rbv.bits());
}

#[test]
fn test_segments() {
    let Segments { rbv, segments } = gen_segments(2, 100);
    for (log2_golomb, values, fixed_pos, unary_offset) in &segments {
        let mut reader = rbv.reader_at(*fixed_pos, *unary_offset);
        for &v in values {
            assert_eq!(reader.read_next(*log2_golomb), v);
        }
        // The next segment starts right after the unary part
        assert_eq!(reader.fixed_pos(), fixed_pos + unary_offset);
    }
}

#[test]
fn test_skip_subtree() {
    let Segments { rbv, segments } = gen_segments(3, 50);
    let mut r = SmallRng::seed_from_u64(4);
    for (log2_golomb, values, fixed_pos, unary_offset) in &segments {
        let k = *log2_golomb;
        let mut reader = rbv.reader_at(*fixed_pos, *unary_offset);
        let mut skipper = rbv.reader_at(*fixed_pos, *unary_offset);
        let mut i = 0;
        while i < values.len() {
            let nodes = r.random_range(1..=values.len() - i);
            for _ in 0..nodes {
                reader.read_next(k);
            }
            skipper.skip_subtree(nodes, nodes * k);
            assert_eq!(reader, skipper);
            i += nodes;
            if i < values.len() {
                assert_eq!(skipper.read_next(k), values[i]);
                reader.read_next(k);
                i += 1;
            }
        }
    }
}

#[test]
fn test_random_access() {
    let Segments { rbv, segments } = gen_segments(5, 50);
    let mut r = SmallRng::seed_from_u64(6);
    let mut reader = rbv.reader();
    for _ in 0..1000 {
        let (log2_golomb, values, fixed_pos, unary_offset) =
            &segments[r.random_range(0..segments.len())];
        let k = *log2_golomb;
        let i = r.random_range(0..values.len());
        // Jump to node i of the segment
        let unary_before: usize = values[..i].iter().map(|&v| (v >> k) as usize + 1).sum();
        let node_fixed_pos = fixed_pos + i * k;
        reader.read_reset(node_fixed_pos, fixed_pos + unary_offset + unary_before - node_fixed_pos);
        for &v in &values[i..] {
            assert_eq!(reader.read_next(k), v);
        }
    }
}

#[test]
fn test_shared_readers() {
    let Segments { rbv, segments } = gen_segments(7, 64);
    std::thread::scope(|s| {
        for chunk in segments.chunks(16) {
            let rbv = &rbv;
            s.spawn(move || {
                for (log2_golomb, values, fixed_pos, unary_offset) in chunk {
                    let mut reader = rbv.reader_at(*fixed_pos, *unary_offset);
                    for &v in values {
                        assert_eq!(reader.read_next(*log2_golomb), v);
                    }
                }
            });
        }
    });
}

#[test]
fn test_dbg_reader() {
    let Segments { rbv, segments } = gen_segments(8, 2);
    let (log2_golomb, values, fixed_pos, unary_offset) = &segments[1];
    let mut reader = DbgRiceReader::new(rbv.reader());
    reader.read_reset(*fixed_pos, *unary_offset);
    assert_eq!(reader.read_next(*log2_golomb), values[0]);
    if values.len() > 2 {
        reader.skip_subtree(1, *log2_golomb);
        assert_eq!(reader.read_next(*log2_golomb), values[2]);
    }
    let reader = reader.into_inner();
    assert!(reader.fixed_pos() <= fixed_pos + unary_offset);
}
