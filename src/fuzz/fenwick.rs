/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

const BOUND: u64 = 1 << 20;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u32>,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    Prefix(usize),
    Add(usize, i32),
    Find(u64),
    CompFind(u64),
    Push(u32),
    Pop,
    Reserve(u16),
    Trim(u16),
}

/// Apply the commands to both variants and to a plain vector of elements.
pub fn harness(data: FuzzCase) {
    let clip = |v: u32| v as u64 % (BOUND + 1);
    let mut elements: Vec<u64> = data.init.iter().map(|&v| clip(v)).collect();
    let mut fixed_f = FixedF::<BOUND>::new(&elements);
    let mut fixed_l = FixedL::<BOUND>::new(&elements);

    for command in data.commands {
        match command {
            RandomCommand::Prefix(length) => {
                let length = length % (elements.len() + 1);
                let expected: u64 = elements[..length].iter().sum();
                assert_eq!(fixed_f.prefix(length), expected);
                assert_eq!(fixed_l.prefix(length), expected);
            }
            RandomCommand::Add(idx, c) => {
                if elements.is_empty() {
                    continue;
                }
                let idx = idx % elements.len();
                // Keep the element in [0 . . BOUND]
                let target = (elements[idx] as i64 + c as i64).clamp(0, BOUND as i64);
                let c = target - elements[idx] as i64;
                elements[idx] = target as u64;
                fixed_f.add(idx + 1, c);
                fixed_l.add(idx + 1, c);
            }
            RandomCommand::Find(val) => {
                let mut sum = 0;
                let mut length = 0;
                while length < elements.len() && sum + elements[length] <= val {
                    sum += elements[length];
                    length += 1;
                }
                let expected = Found {
                    length,
                    excess: val - sum,
                };
                assert_eq!(fixed_f.find_excess(val), expected);
                assert_eq!(fixed_l.find_excess(val), expected);
            }
            RandomCommand::CompFind(val) => {
                let mut sum = 0;
                let mut length = 0;
                while length < elements.len() && sum + (BOUND - elements[length]) <= val {
                    sum += BOUND - elements[length];
                    length += 1;
                }
                let expected = Found {
                    length,
                    excess: val - sum,
                };
                assert_eq!(fixed_f.comp_find_excess(val), expected);
                assert_eq!(fixed_l.comp_find_excess(val), expected);
            }
            RandomCommand::Push(v) => {
                let v = clip(v);
                elements.push(v);
                fixed_f.push(v);
                fixed_l.push(v);
            }
            RandomCommand::Pop => {
                if elements.pop().is_some() {
                    fixed_f.pop();
                    fixed_l.pop();
                }
            }
            RandomCommand::Reserve(space) => {
                fixed_f.reserve(space as usize);
                fixed_l.reserve(space as usize);
            }
            RandomCommand::Trim(space) => {
                fixed_f.trim(space as usize);
                fixed_l.trim(space as usize);
            }
        }
        assert_eq!(fixed_f.len(), elements.len());
        assert_eq!(fixed_l.len(), elements.len());
    }
}
