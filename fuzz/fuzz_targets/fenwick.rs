#![no_main]

use libfuzzer_sys::fuzz_target;
use rice_fenwick::fuzz::fenwick::*;

fuzz_target!(|data: FuzzCase| harness(data));
