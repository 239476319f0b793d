//! Reference heap storage for [MpiStorage]

use std::fmt;

use zeroize::Zeroize;

use super::{Limb, MpiStorage, SIGN_NEGATIVE, SIGN_POSITIVE};
use crate::Error;

/// Maximum number of limbs [Mpi::grow] will allocate
pub const MPI_MAX_LIMBS: usize = 10000;

/// Heap-backed multi-precision integer
///
/// The limbs are zeroized when the storage is replaced by [MpiStorage::grow] and on drop.
/// [fmt::Debug] prints the limb count only.
#[derive(Clone)]
pub struct Mpi {
    /// [SIGN_POSITIVE] or [SIGN_NEGATIVE]
    sign: i32,
    /// Little-endian limbs
    limbs: Vec<Limb>,
}

impl Mpi {
    /// Zero, with no limbs
    pub fn new() -> Self {
        Self {
            sign: SIGN_POSITIVE,
            limbs: Vec::new(),
        }
    }

    /// A non-negative integer from its limbs, least significant first
    ///
    /// ```
    /// use ctflow_constant_time::{Mpi, MpiStorage, SIGN_POSITIVE};
    /// let x = Mpi::from_limbs(&[1, 2]);
    /// assert_eq!(x.limbs(), &[1, 2]);
    /// assert_eq!(x.sign(), SIGN_POSITIVE);
    /// ```
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        Self {
            sign: SIGN_POSITIVE,
            limbs: limbs.to_vec(),
        }
    }

    /// The negation of [Self::from_limbs]
    pub fn from_limbs_negative(limbs: &[Limb]) -> Self {
        Self {
            sign: SIGN_NEGATIVE,
            limbs: limbs.to_vec(),
        }
    }

    /// Whether the sign tag marks the integer as negative
    pub fn is_negative(&self) -> bool {
        super::sign_is_negative(self.sign) == 1
    }
}

impl Default for Mpi {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mpi")
            .field("limbs", &self.limbs.len())
            .finish_non_exhaustive()
    }
}

impl Drop for Mpi {
    fn drop(&mut self) {
        self.limbs.zeroize();
    }
}

impl MpiStorage for Mpi {
    fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    fn limbs_mut(&mut self) -> &mut [Limb] {
        &mut self.limbs
    }

    fn sign(&self) -> i32 {
        self.sign
    }

    fn set_sign(&mut self, sign: i32) {
        self.sign = sign;
    }

    fn grow(&mut self, nblimbs: usize) -> Result<(), Error> {
        if nblimbs > MPI_MAX_LIMBS {
            log::error!(
                "Growing to {nblimbs} limbs was requested but at most {MPI_MAX_LIMBS} are allowed"
            );
            return Err(Error::AllocFailed { limbs: nblimbs });
        }

        if self.limbs.len() >= nblimbs {
            return Ok(());
        }

        let mut grown = Vec::new();
        if grown.try_reserve_exact(nblimbs).is_err() {
            log::error!("Growing to {nblimbs} limbs was requested but the allocation failed");
            return Err(Error::AllocFailed { limbs: nblimbs });
        }
        grown.extend_from_slice(&self.limbs);
        grown.resize(nblimbs, 0);

        self.limbs.zeroize();
        self.limbs = grown;
        Ok(())
    }
}
