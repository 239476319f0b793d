//! Conditional assignment, swap and comparison

use super::{sign_is_negative, Limb, MpiStorage};
use crate::compare::limb_lt;
use crate::mask::limb_mask;
use crate::select::select;
use crate::volatile::{self, opaque};
use crate::Error;

/// Sets `dest[..src.len()]` to `src` if `assign` is 1 and leaves it unchanged if `assign` is 0.
///
/// # Panics
/// If `dest` is shorter than `src`.
pub fn limbs_cond_assign(dest: &mut [Limb], src: &[Limb], assign: u8) {
    assert!(dest.len() >= src.len());
    let mask = opaque(limb_mask(assign as Limb));
    for (d, s) in dest.iter_mut().zip(src.iter()) {
        let new = volatile::read_limb(s) & mask;
        let old = volatile::read_limb(d) & !mask;
        volatile::write_limb(d, new | old);
    }
}

/// Exchanges the contents of `a` and `b` if `swap` is 1 and leaves both unchanged if `swap` is 0.
///
/// # Panics
/// If the slices have different lengths.
pub fn limbs_cond_swap(a: &mut [Limb], b: &mut [Limb], swap: u8) {
    assert_eq!(a.len(), b.len());
    let mask = opaque(limb_mask(swap as Limb));
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let vx = volatile::read_limb(x);
        let vy = volatile::read_limb(y);
        volatile::write_limb(x, (vy & mask) | (vx & !mask));
        volatile::write_limb(y, (vx & mask) | (vy & !mask));
    }
}

/// Conditionally assign `x = y` without leaking whether the assignment was made.
///
/// `x` is first grown to `y`'s limb count; that step depends on the sizes only. If `assign` is 1
/// the limbs of `x` beyond `y`'s limb count are cleared, so `x` ends up with `y`'s value and sign.
/// If `assign` is 0, `x` keeps its value (with possibly more, zero, limbs).
///
/// `assign` must be 0 or 1.
///
/// ```
/// use ctflow_constant_time::{cond_assign, Mpi, MpiStorage};
/// let mut x = Mpi::from_limbs(&[1, 2, 3]);
/// let y = Mpi::from_limbs_negative(&[9]);
///
/// cond_assign(&mut x, &y, 0)?;
/// assert_eq!(x.limbs(), &[1, 2, 3]);
///
/// cond_assign(&mut x, &y, 1)?;
/// assert_eq!(x.limbs(), &[9, 0, 0]);
/// assert!(x.is_negative());
/// # Ok::<(), ctflow_constant_time::Error>(())
/// ```
pub fn cond_assign<X, Y>(x: &mut X, y: &Y, assign: u8) -> Result<(), Error>
where
    X: MpiStorage + ?Sized,
    Y: MpiStorage + ?Sized,
{
    let mask = opaque(limb_mask(assign as Limb));
    let n = y.limbs().len();

    x.grow(n)?;

    let sign = select(assign as u32, y.sign() as u32, x.sign() as u32);
    x.set_sign(sign as i32);

    let (low, high) = x.limbs_mut().split_at_mut(n);
    limbs_cond_assign(low, y.limbs(), assign);
    for limb in high.iter_mut() {
        let v = volatile::read_limb(limb);
        volatile::write_limb(limb, v & !mask);
    }

    Ok(())
}

/// Conditionally swap the values of `x` and `y` without leaking whether the swap was made.
///
/// Both are grown to the larger limb count first. The swap exchanges every limb and the sign in
/// place; the storage each of them owns stays where it is, so later accesses touch the same
/// memory either way.
///
/// `swap` must be 0 or 1.
///
/// ```
/// use ctflow_constant_time::{cond_swap, Mpi, MpiStorage};
/// let mut x = Mpi::from_limbs(&[1, 2]);
/// let mut y = Mpi::from_limbs_negative(&[3]);
///
/// cond_swap(&mut x, &mut y, 1)?;
/// assert_eq!(x.limbs(), &[3, 0]);
/// assert!(x.is_negative());
/// assert_eq!(y.limbs(), &[1, 2]);
/// assert!(!y.is_negative());
/// # Ok::<(), ctflow_constant_time::Error>(())
/// ```
pub fn cond_swap<X, Y>(x: &mut X, y: &mut Y, swap: u8) -> Result<(), Error>
where
    X: MpiStorage + ?Sized,
    Y: MpiStorage + ?Sized,
{
    x.grow(y.limbs().len())?;
    y.grow(x.limbs().len())?;

    let s = x.sign();
    x.set_sign(select(swap as u32, y.sign() as u32, x.sign() as u32) as i32);
    y.set_sign(select(swap as u32, s as u32, y.sign() as u32) as i32);

    limbs_cond_swap(x.limbs_mut(), y.limbs_mut(), swap);

    Ok(())
}

/// Returns 1 if the unsigned integer `a` is less than `b` and 0 otherwise.
///
/// Every limb is compared, most significant first, even once the result is known.
///
/// # Panics
/// If the slices have different lengths.
///
/// ```
/// use ctflow_constant_time::lt_unsigned;
/// assert_eq!(lt_unsigned(&[5, 1], &[0, 2]), 1);
/// assert_eq!(lt_unsigned(&[0, 2], &[5, 1]), 0);
/// assert_eq!(lt_unsigned(&[5, 1], &[5, 1]), 0);
/// assert_eq!(lt_unsigned(&[], &[]), 0);
/// ```
pub fn lt_unsigned(a: &[Limb], b: &[Limb]) -> u32 {
    assert_eq!(a.len(), b.len());

    // 0 or 1 at all times
    let mut ret = 0u32;
    let mut done = 0u32;

    for (x, y) in a.iter().zip(b.iter()).rev() {
        // b < a at this limb: a < b is false, keep ret as it is
        let cond = limb_lt(*y, *x);
        done |= cond;

        // a < b at this limb, unless a higher limb already decided
        let cond = limb_lt(*x, *y);
        ret |= cond & (1 - done);
        done |= cond;
    }

    // all limbs equal: a == b, ret stays 0
    ret
}

/// Returns 1 if the signed integer `x` is less than `y` and 0 otherwise.
///
/// # Errors
/// [Error::BadInputData] if the limb counts differ; sizes are public, so this check may branch.
///
/// ```
/// use ctflow_constant_time::{lt_signed, Mpi};
/// let a = Mpi::from_limbs_negative(&[7]);
/// let b = Mpi::from_limbs(&[1]);
/// assert_eq!(lt_signed(&a, &b)?, 1);
/// assert_eq!(lt_signed(&b, &a)?, 0);
/// # Ok::<(), ctflow_constant_time::Error>(())
/// ```
pub fn lt_signed<X, Y>(x: &X, y: &Y) -> Result<u32, Error>
where
    X: MpiStorage + ?Sized,
    Y: MpiStorage + ?Sized,
{
    if x.limbs().len() != y.limbs().len() {
        log::debug!(
            "Signed comparison of integers with {} and {} limbs",
            x.limbs().len(),
            y.limbs().len()
        );
        return Err(Error::BadInputData("operands have different limb counts"));
    }

    let x_is_negative = sign_is_negative(x.sign());
    let y_is_negative = sign_is_negative(y.sign());

    // different signs: the negative operand is the smaller one
    let cond = x_is_negative ^ y_is_negative;
    let mut ret = cond & x_is_negative;

    // the result may be known already, but the limbs are scanned anyway
    let mut done = cond;

    for (a, b) in x.limbs().iter().zip(y.limbs().iter()).rev() {
        // |y| < |x| here: x < y iff both are negative
        let cond = limb_lt(*b, *a);
        ret |= cond & (1 - done) & x_is_negative;
        done |= cond;

        // |x| < |y| here: x < y iff both are non-negative
        let cond = limb_lt(*a, *b);
        ret |= cond & (1 - done) & (1 - x_is_negative);
        done |= cond;
    }

    Ok(ret)
}
