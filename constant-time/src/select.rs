//! Conditional selection and copying
//!
//! Both outcomes are always computed and merged with a mask, so the instruction and memory
//! access trace is the same whichever one is kept.

use crate::compare::bool_gt;
use crate::mask::{bool_eq, size_mask, uint_mask};
use crate::volatile::{self, opaque};

/// Returns `if1` if `condition` is non-zero and `if0` if it is 0.
///
/// ```
/// use ctflow_constant_time::select;
/// assert_eq!(select(1, 10, 20), 10);
/// assert_eq!(select(0, 10, 20), 20);
/// ```
#[inline]
pub fn select(condition: u32, if1: u32, if0: u32) -> u32 {
    let mask = opaque(uint_mask(condition));
    (mask & if1) | (!mask & if0)
}

/// [select] for sizes.
#[inline]
pub fn select_size(condition: u32, if1: usize, if0: usize) -> usize {
    let mask = opaque(size_mask(condition as usize));
    (mask & if1) | (!mask & if0)
}

/// Copies `src[..dest.len()]` into `dest` if `c1 == c2` and leaves `dest` unchanged otherwise.
///
/// Both buffers are read in full and `dest` is written in full either way; the old and the new
/// content are merged under a mask, four bytes at a time with a byte-wise tail.
///
/// # Panics
/// If `src` is shorter than `dest`.
///
/// ```
/// use ctflow_constant_time::copy_if_eq;
/// let mut dest = *b"xxxxx";
/// copy_if_eq(&mut dest, b"hello", 3, 4);
/// assert_eq!(&dest, b"xxxxx");
/// copy_if_eq(&mut dest, b"hello", 4, 4);
/// assert_eq!(&dest, b"hello");
/// ```
pub fn copy_if_eq(dest: &mut [u8], src: &[u8], c1: usize, c2: usize) {
    assert!(src.len() >= dest.len());
    let len = dest.len();

    let mask32 = opaque(uint_mask(bool_eq(c1, c2)));
    let mask = mask32 as u8;

    let (dest_words, dest_tail) = dest.split_at_mut(len - len % 4);
    let (src_words, src_tail) = src[..len].split_at(dest_words.len());

    for (d, s) in dest_words
        .chunks_exact_mut(4)
        .zip(src_words.chunks_exact(4))
    {
        let new = volatile::read_word(s) & mask32;
        let old = volatile::read_word(d) & !mask32;
        volatile::write_word(d, new | old);
    }

    for (d, s) in dest_tail.iter_mut().zip(src_tail.iter()) {
        let new = volatile::read_u8(s) & mask;
        let old = volatile::read_u8(d) & !mask;
        volatile::write_u8(d, new | old);
    }
}

/// Copies `dest.len()` bytes from `src[offset..]` into `dest` without `offset` showing up in the
/// memory access trace.
///
/// Every candidate offset in `offset_min..=offset_max` is visited with [copy_if_eq], so the cost
/// is `(offset_max - offset_min + 1) * dest.len()` byte merges regardless of `offset`. Only
/// `offset_min` and `offset_max` may be public; `offset` is treated as secret and must lie in
/// that range.
///
/// # Panics
/// If `src` is too short to hold `dest.len()` bytes at `offset_max`.
///
/// ```
/// use ctflow_constant_time::copy_at_secret_offset;
/// let src = b"0123456789";
/// let mut dest = [0u8; 3];
/// copy_at_secret_offset(&mut dest, src, 4, 2, 7);
/// assert_eq!(&dest, b"456");
/// ```
pub fn copy_at_secret_offset(
    dest: &mut [u8],
    src: &[u8],
    offset: usize,
    offset_min: usize,
    offset_max: usize,
) {
    let len = dest.len();
    if offset_min <= offset_max {
        assert!(offset_max.checked_add(len).is_some_and(|end| end <= src.len()));
    }

    for candidate in offset_min..=offset_max {
        copy_if_eq(dest, &src[candidate..candidate + len], candidate, offset);
    }
}

/// Moves `buf[offset..]` to the start of `buf` and zeroes the last `offset` bytes.
///
/// Functionally this is
///
/// ```text
/// buf.copy_within(offset.., 0);
/// buf[total - offset..].fill(0);
/// ```
///
/// but the memory access pattern does not depend on `offset`: the function always makes
/// `buf.len()` passes over the whole buffer. The first `total - offset` passes leave it as it is,
/// the remaining `offset` passes shift it one byte to the left and zero the last byte. Cost is
/// quadratic in `buf.len()`.
///
/// `offset` must not exceed `buf.len()`.
///
/// ```
/// use ctflow_constant_time::compact_left;
/// let mut buf = *b"padmsg";
/// compact_left(&mut buf, 3);
/// assert_eq!(&buf, b"msg\0\0\0");
/// ```
pub fn compact_left(buf: &mut [u8], offset: usize) {
    let total = buf.len();
    debug_assert!(offset <= total);
    if total == 0 {
        return;
    }

    let keep = total.wrapping_sub(offset);
    for pass in 0..total {
        let no_op = opaque(bool_gt(keep, pass));
        for n in 0..total - 1 {
            let current = volatile::read_u8(&buf[n]);
            let next = volatile::read_u8(&buf[n + 1]);
            volatile::write_u8(&mut buf[n], select(no_op, current as u32, next as u32) as u8);
        }
        let last = volatile::read_u8(&buf[total - 1]);
        volatile::write_u8(&mut buf[total - 1], select(no_op, last as u32, 0) as u8);
    }
}
