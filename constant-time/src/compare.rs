//! Ordering comparisons on machine words
//!
//! Written without comparison operators, which some compilers lower to branches on some targets.

use crate::mask::size_mask;
use crate::Limb;

/// Returns a mask with all bits set if `x < y`, zero otherwise.
///
/// Both operands must be smaller than `2^(usize::BITS - 1)`; this holds for every buffer length
/// and offset this is used with.
///
/// ```
/// use ctflow_constant_time::mask_lt;
/// assert_eq!(mask_lt(3, 4), usize::MAX);
/// assert_eq!(mask_lt(4, 4), 0);
/// assert_eq!(mask_lt(5, 4), 0);
/// ```
#[inline]
pub fn mask_lt(x: usize, y: usize) -> usize {
    // the top bit of sub is set iff x < y
    let sub = x.wrapping_sub(y);
    size_mask(sub >> (usize::BITS - 1))
}

/// Returns a mask with all bits set if `x >= y`, zero otherwise.
///
/// Same operand range as [mask_lt].
#[inline]
pub fn mask_ge(x: usize, y: usize) -> usize {
    !mask_lt(x, y)
}

/// Returns 1 if `x > y` and 0 otherwise.
///
/// Same operand range as [mask_lt].
///
/// ```
/// use ctflow_constant_time::bool_gt;
/// assert_eq!(bool_gt(9, 8), 1);
/// assert_eq!(bool_gt(8, 8), 0);
/// assert_eq!(bool_gt(0, 8), 0);
/// ```
#[inline]
pub fn bool_gt(x: usize, y: usize) -> u32 {
    (y.wrapping_sub(x) >> (usize::BITS - 1)) as u32
}

/// Returns 1 if `x < y` and 0 otherwise, for the full range of limb values.
///
/// ```
/// use ctflow_constant_time::{limb_lt, Limb};
/// assert_eq!(limb_lt(0, Limb::MAX), 1);
/// assert_eq!(limb_lt(Limb::MAX, 0), 0);
/// assert_eq!(limb_lt(7, 7), 0);
/// ```
#[inline]
pub fn limb_lt(x: Limb, y: Limb) -> u32 {
    // top bit set iff the most significant bits differ
    let cond = x ^ y;
    // equal MSBs: x - y has its top bit set iff x < y
    let mut ret = x.wrapping_sub(y) & !cond;
    // different MSBs: the operand with the top bit set is the larger one
    ret |= y & cond;
    (ret >> (Limb::BITS - 1)) as u32
}
