#![no_main]

use libfuzzer_sys::fuzz_target;
use rice_fenwick::fuzz::rice::*;

fuzz_target!(|data: FuzzCase| harness(data));
