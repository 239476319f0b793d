#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use ctflow_constant_time::{memcmp, memdiff};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub a: Box<[u8]>,
    pub b: Box<[u8]>,
}

fuzz_target!(|input: Input| {
    assert_eq!(memcmp(&input.a, &input.b), input.a == input.b);

    let n = input.a.len().min(input.b.len());
    let (a, b) = (&input.a[..n], &input.b[..n]);
    assert_eq!(memdiff(a, b) == 0, a == b);
});
