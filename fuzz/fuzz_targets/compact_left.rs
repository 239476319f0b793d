#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use ctflow_constant_time::compact_left;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub buf: Box<[u8]>,
    pub offset: u16,
}

fuzz_target!(|input: Input| {
    // quadratic; keep the inputs small
    if input.buf.len() > 512 {
        return;
    }
    let offset = input.offset as usize % (input.buf.len() + 1);

    let mut buf = input.buf.to_vec();
    compact_left(&mut buf, offset);

    let mut expected = input.buf[offset..].to_vec();
    expected.resize(input.buf.len(), 0);
    assert_eq!(buf, expected);
});
