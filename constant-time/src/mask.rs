//! Masks
//!
//! A mask is a word with either every bit clear or every bit set. It is the branchless stand-in
//! for a boolean: `(mask & a) | (!mask & b)` picks `a` or `b` without a conditional jump.

use crate::Limb;

/// Defines a mask function on one unsigned word type
macro_rules! mask_fn {
    ($(#[$attr:meta])* $name:ident, $ty:ty) => {
        $(#[$attr])*
        #[inline]
        pub fn $name(value: $ty) -> $ty {
            // The top bit of `value | -value` is set iff value is non-zero
            let msb = (value | value.wrapping_neg()) >> (<$ty>::BITS - 1);
            msb.wrapping_neg()
        }
    };
}

mask_fn!(
    /// Turns an unsigned integer into a mask: all bits set if `value` is non-zero, zero
    /// otherwise.
    ///
    /// ```
    /// use ctflow_constant_time::uint_mask;
    /// assert_eq!(uint_mask(0), 0);
    /// assert_eq!(uint_mask(1), u32::MAX);
    /// assert_eq!(uint_mask(0x8000_0000), u32::MAX);
    /// ```
    uint_mask,
    u32
);

mask_fn!(
    /// Turns a size into a mask: all bits set if `value` is non-zero, zero otherwise.
    size_mask,
    usize
);

mask_fn!(
    /// Turns a bignum limb into a mask: all bits set if `value` is non-zero, zero otherwise.
    limb_mask,
    Limb
);

/// Returns 1 if `x == y` and 0 otherwise.
///
/// The result is a boolean flag, not a mask.
///
/// ```
/// use ctflow_constant_time::bool_eq;
/// assert_eq!(bool_eq(5, 5), 1);
/// assert_eq!(bool_eq(5, 6), 0);
/// assert_eq!(bool_eq(0, usize::MAX), 0);
/// ```
#[inline]
pub fn bool_eq(x: usize, y: usize) -> u32 {
    // zero iff x == y
    let diff = x ^ y;
    // the most significant bit of diff_msb is x != y
    let diff_msb = diff | diff.wrapping_neg();
    let ne = (diff_msb >> (usize::BITS - 1)) as u32;
    1 ^ ne
}

/// Returns `0xff` if `low <= c <= high` and 0 otherwise, without branching on `c`.
///
/// ```
/// use ctflow_constant_time::range_mask;
/// assert_eq!(range_mask(b'A', b'Z', b'Q'), 0xff);
/// assert_eq!(range_mask(b'A', b'Z', b'a'), 0);
/// assert_eq!(range_mask(b'A', b'Z', b'@'), 0);
/// ```
#[inline]
pub fn range_mask(low: u8, high: u8, c: u8) -> u8 {
    // 0 if low <= c, 0x...ff if c < low
    let low_mask = (c as u32).wrapping_sub(low as u32) >> 8;
    // 0 if c <= high, 0x...ff if high < c
    let high_mask = (high as u32).wrapping_sub(c as u32) >> 8;
    !(low_mask | high_mask) as u8
}
