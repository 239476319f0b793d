#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use ctflow_constant_time::{rsaes_pkcs1_v15_unpadding, Pkcs1Status, PKCS1_OVERHEAD};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub block: Box<[u8]>,
    pub output_len: u8,
}

fuzz_target!(|input: Input| {
    let mut block = input.block.to_vec();
    let mut output = vec![0u8; input.output_len as usize];

    let res = match rsaes_pkcs1_v15_unpadding(&mut block, &mut output) {
        Ok(res) => res,
        Err(_) => {
            assert!(input.block.len() < PKCS1_OVERHEAD);
            return;
        }
    };

    // Straightforward decoding with early returns
    let orig = &input.block;
    let terminator = orig[2..].iter().position(|&b| b == 0);
    let expected = match terminator {
        Some(pos) if orig[0] == 0 && orig[1] == 2 && pos >= 8 => {
            let msg = &orig[2 + pos + 1..];
            if msg.len() > output.len() {
                Pkcs1Status::OUTPUT_TOO_LARGE
            } else {
                assert_eq!(&output[..msg.len()], msg);
                assert_eq!(res.len, msg.len());
                Pkcs1Status::OK
            }
        }
        _ => Pkcs1Status::INVALID_PADDING,
    };
    assert_eq!(res.status, expected);
});
