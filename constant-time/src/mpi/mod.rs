//! Constant-flow operations on multi-precision integers
//!
//! The integer representation itself belongs to the bignum engine; this module only reaches it
//! through [MpiStorage]. [Mpi] is a plain heap-backed implementation of that trait.
//!
//! Sizes (limb counts) are public, values are secret. Growing storage may therefore take a
//! size-dependent amount of time, everything after it is a masked merge.

use static_assertions::const_assert;

use crate::Error;

mod ops;
mod storage;

pub use ops::{cond_assign, cond_swap, limbs_cond_assign, limbs_cond_swap, lt_signed, lt_unsigned};
pub use storage::{Mpi, MPI_MAX_LIMBS};

/// One machine word of a multi-precision integer
#[cfg(target_pointer_width = "64")]
pub type Limb = u64;

/// One machine word of a multi-precision integer
#[cfg(not(target_pointer_width = "64"))]
pub type Limb = u32;

const_assert!(Limb::BITS >= 32);
const_assert!(Limb::BITS <= usize::BITS);

/// Sign tag of a non-negative integer
pub const SIGN_POSITIVE: i32 = 1;

/// Sign tag of a negative integer
pub const SIGN_NEGATIVE: i32 = -1;

/// Extracts the negative bit from a sign tag: 1 for [SIGN_NEGATIVE], 0 for [SIGN_POSITIVE].
///
/// The bit with value 2 is set in the two's complement encoding of -1 and clear in 1.
#[inline]
pub fn sign_is_negative(sign: i32) -> u32 {
    ((sign as u32) & 2) >> 1
}

/// Access to the storage of a multi-precision integer
///
/// Limbs are ordered least significant first. The sign is a tag as described at
/// [SIGN_POSITIVE] and [SIGN_NEGATIVE].
pub trait MpiStorage {
    /// The limbs of the integer; their count is the limb count of the integer.
    fn limbs(&self) -> &[Limb];

    /// Mutable access to the limbs.
    fn limbs_mut(&mut self) -> &mut [Limb];

    /// The sign tag
    fn sign(&self) -> i32;

    /// Overwrite the sign tag
    fn set_sign(&mut self, sign: i32);

    /// Grow the integer to at least `nblimbs` limbs, padding with zero limbs.
    ///
    /// Must not change the value, must not shrink and must leave the limb count at exactly
    /// `max(limbs().len(), nblimbs)`. May run in time depending on the sizes, not on the values.
    fn grow(&mut self, nblimbs: usize) -> Result<(), Error>;
}
