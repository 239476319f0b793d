//! RSAES-PKCS1-v1_5 decoding
//!
//! The decrypted block has the form `0x00 || 0x02 || PS || 0x00 || M` where the padding string PS
//! consists of at least eight non-zero bytes. Whether a given block is well formed, and where the
//! message starts, must not be observable other than through the returned status: any such
//! signal is a padding oracle in the sense of Bleichenbacher's attack. The decoder below therefore
//! walks the whole block once, computes every candidate outcome, selects among them with masks
//! and moves the message into place with [compact_left], whose access pattern does not depend on
//! the message length.

use crate::compare::bool_gt;
use crate::mask::uint_mask;
use crate::select::{compact_left, select, select_size};
use crate::volatile::{self, opaque};
use crate::Error;

/// Block type of an encryption block
pub const BLOCK_TYPE_ENCRYPTION: u8 = 0x02;

/// Minimum length of the padding string
pub const MIN_PADDING_LEN: usize = 8;

/// Bytes of an encryption block that are not message: two header bytes, the minimum padding
/// string and the terminating zero byte
pub const PKCS1_OVERHEAD: usize = 3 + MIN_PADDING_LEN;

/// Outcome of [rsaes_pkcs1_v15_unpadding]
///
/// A plain code rather than an enum, so producing it never takes a branch; compare against the
/// associated constants.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pkcs1Status(u32);

impl Pkcs1Status {
    /// The padding was valid and the message fit into the output buffer
    pub const OK: Self = Self(0);
    /// The block was not valid encryption padding
    pub const INVALID_PADDING: Self = Self(1);
    /// The padding was valid but the message is longer than the output buffer
    pub const OUTPUT_TOO_LARGE: Self = Self(2);

    /// The numeric status code
    pub fn code(self) -> u32 {
        self.0
    }

    /// Whether this is [Self::OK]
    pub fn is_ok(self) -> bool {
        self == Self::OK
    }
}

/// Result of [rsaes_pkcs1_v15_unpadding]: a status and a length, produced on every path
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Unpadded {
    /// Outcome of the decoding
    pub status: Pkcs1Status,
    /// Number of message bytes at the start of the output buffer. On failure this is the
    /// largest length the output buffer can take, and those bytes are zero.
    pub len: usize,
}

impl Unpadded {
    /// Converts the outcome into a [Result] carrying the message length.
    ///
    /// This branches on the status; call it only where the caller is going to act on the
    /// outcome anyway.
    pub fn into_result(self) -> Result<usize, Error> {
        match self.status {
            Pkcs1Status::OK => Ok(self.len),
            Pkcs1Status::OUTPUT_TOO_LARGE => Err(Error::OutputTooLarge),
            _ => Err(Error::InvalidPadding),
        }
    }
}

/// Removes RSAES-PKCS1-v1_5 encryption padding from the decrypted block `input` and writes the
/// message to the start of `output`.
///
/// `input` is used as scratch space and is overwritten. Exactly
/// `min(output.len(), input.len() - 11)` bytes of `output` are written whatever the outcome; on
/// failure they are zero.
///
/// ## Leaks
/// The lengths of `input` and `output` are public and determine the instruction and memory
/// access trace. The content of `input` (validity of the padding, position of the terminator,
/// message length) only shows up in the returned [Unpadded]. Decoding is quadratic in
/// `output.len()`.
///
/// # Errors
/// [Error::BadInputData] if `input` is shorter than [PKCS1_OVERHEAD]; no block of that size can
/// be valid, and the check depends on its length only.
///
/// # Examples
///
/// ```
/// use ctflow_constant_time::{rsaes_pkcs1_v15_unpadding, Pkcs1Status};
///
/// let mut block = [0x00, 0x02, 1, 1, 1, 1, 1, 1, 1, 1, 0x00, 0xaa, 0xbb];
/// let mut msg = [0u8; 4];
/// let res = rsaes_pkcs1_v15_unpadding(&mut block, &mut msg)?;
/// assert_eq!(res.status, Pkcs1Status::OK);
/// assert_eq!(&msg[..res.len], &[0xaa, 0xbb]);
/// # Ok::<(), ctflow_constant_time::Error>(())
/// ```
pub fn rsaes_pkcs1_v15_unpadding(input: &mut [u8], output: &mut [u8]) -> Result<Unpadded, Error> {
    let ilen = input.len();
    let output_max_len = output.len();

    if ilen < PKCS1_OVERHEAD {
        log::debug!("PKCS#1 v1.5 block of {ilen} bytes is shorter than the minimal padding");
        return Err(Error::BadInputData("block shorter than the minimal padding"));
    }

    // Public: depends on the buffer sizes only
    let plaintext_max_size = output_max_len.min(ilen - PKCS1_OVERHEAD);

    // Everything below is secret. Its value must reach the caller through the return value and
    // `output` only.
    let mut bad = 0u32;
    let mut pad_done = 0u8;
    let mut pad_count = 0usize;

    bad |= volatile::read_u8(&input[0]) as u32;
    bad |= (volatile::read_u8(&input[1]) ^ BLOCK_TYPE_ENCRYPTION) as u32;

    // Read the whole block; pad_done becomes 1 at the first zero byte, pad_count counts the
    // non-zero bytes before it
    for b in input[2..].iter() {
        let b = volatile::read_u8(b);
        pad_done |= ((b | b.wrapping_neg()) >> 7) ^ 1;
        pad_count += (((pad_done | pad_done.wrapping_neg()) >> 7) ^ 1) as usize;
    }

    // no terminator: only unfinished padding
    bad |= select(pad_done as u32, 0, 1);
    // padding string too short
    bad |= bool_gt(MIN_PADDING_LEN, pad_count);

    // With bad padding, pretend the message has the largest size the output can take so the
    // size does not tell the cases apart. ilen - pad_count - 3 wraps if there is no terminator;
    // it is not selected then.
    let plaintext_size = select_size(
        bad,
        plaintext_max_size,
        ilen.wrapping_sub(pad_count).wrapping_sub(3),
    );

    let output_too_large = bool_gt(plaintext_size, plaintext_max_size);

    let status = select(
        bad,
        Pkcs1Status::INVALID_PADDING.0,
        select(
            output_too_large,
            Pkcs1Status::OUTPUT_TOO_LARGE.0,
            Pkcs1Status::OK.0,
        ),
    );

    // On any failure zero what is about to be copied out. Same reads and writes either way.
    let clear = opaque(uint_mask(bad | output_too_large)) as u8;
    for b in input[PKCS1_OVERHEAD..].iter_mut() {
        let v = volatile::read_u8(b);
        volatile::write_u8(b, v & !clear);
    }

    // A message that does not fit is truncated to the buffer size and copied anyway: its length
    // is as sensitive as the padding validity
    let plaintext_size = select_size(output_too_large, plaintext_max_size, plaintext_size);

    // Move the message to the start of the last plaintext_max_size bytes of the block. After
    // this its position is no longer secret.
    let window = &mut input[ilen - plaintext_max_size..];
    compact_left(window, plaintext_max_size - plaintext_size);

    // Branching on the output capacity is fine: it is caller configuration
    if output_max_len != 0 {
        output[..plaintext_max_size].copy_from_slice(&input[ilen - plaintext_max_size..]);
    }

    Ok(Unpadded {
        status: Pkcs1Status(status),
        len: plaintext_size,
    })
}
