//! The conditional bignum operations only see integers through `MpiStorage`; check them against
//! a storage type other than `Mpi`.

use ctflow_constant_time::{
    cond_assign, cond_swap, lt_signed, Error, Limb, Mpi, MpiStorage, SIGN_NEGATIVE, SIGN_POSITIVE,
};

/// Stack-allocated integer that can not grow past `N` limbs
struct FixedMpi<const N: usize> {
    /// [SIGN_POSITIVE] or [SIGN_NEGATIVE]
    sign: i32,
    /// Number of limbs in use
    len: usize,
    /// Backing storage; limbs past `len` are zero
    limbs: [Limb; N],
}

impl<const N: usize> FixedMpi<N> {
    /// Integer with the given limbs and sign
    fn new(limbs: &[Limb], sign: i32) -> Self {
        let mut storage = [0; N];
        storage[..limbs.len()].copy_from_slice(limbs);
        Self {
            sign,
            len: limbs.len(),
            limbs: storage,
        }
    }
}

impl<const N: usize> MpiStorage for FixedMpi<N> {
    fn limbs(&self) -> &[Limb] {
        &self.limbs[..self.len]
    }

    fn limbs_mut(&mut self) -> &mut [Limb] {
        &mut self.limbs[..self.len]
    }

    fn sign(&self) -> i32 {
        self.sign
    }

    fn set_sign(&mut self, sign: i32) {
        self.sign = sign;
    }

    fn grow(&mut self, nblimbs: usize) -> Result<(), Error> {
        if nblimbs > N {
            return Err(Error::AllocFailed { limbs: nblimbs });
        }
        self.len = self.len.max(nblimbs);
        Ok(())
    }
}

#[test]
fn assign_between_storage_types() -> Result<(), Error> {
    let mut x = FixedMpi::<4>::new(&[1, 1, 1], SIGN_POSITIVE);
    let y = Mpi::from_limbs_negative(&[5, 6]);

    cond_assign(&mut x, &y, 0)?;
    assert_eq!(x.limbs(), &[1, 1, 1]);
    assert_eq!(x.sign(), SIGN_POSITIVE);

    cond_assign(&mut x, &y, 1)?;
    assert_eq!(x.limbs(), &[5, 6, 0]);
    assert_eq!(x.sign(), SIGN_NEGATIVE);

    Ok(())
}

#[test]
fn growth_failure_is_an_error_not_a_panic() {
    let mut x = FixedMpi::<2>::new(&[1], SIGN_POSITIVE);
    let mut y = Mpi::from_limbs(&[1, 2, 3]);

    assert_eq!(
        cond_assign(&mut x, &y, 1),
        Err(Error::AllocFailed { limbs: 3 })
    );
    assert_eq!(
        cond_swap(&mut x, &mut y, 1),
        Err(Error::AllocFailed { limbs: 3 })
    );
    // nothing was touched
    assert_eq!(x.limbs(), &[1]);
    assert_eq!(y.limbs(), &[1, 2, 3]);
}

#[test]
fn swap_and_compare_mixed_storage() -> Result<(), Error> {
    let mut x = FixedMpi::<3>::new(&[9, 9], SIGN_NEGATIVE);
    let mut y = Mpi::from_limbs(&[0, 1]);

    assert_eq!(lt_signed(&x, &y)?, 1);

    cond_swap(&mut x, &mut y, 1)?;
    assert_eq!(x.limbs(), &[0, 1]);
    assert_eq!(y.limbs(), &[9, 9]);
    assert_eq!(lt_signed(&x, &y)?, 0);
    assert_eq!(lt_signed(&y, &x)?, 1);

    // equal magnitudes, equal signs
    let z = FixedMpi::<2>::new(&[0, 1], SIGN_POSITIVE);
    assert_eq!(lt_signed(&x, &z)?, 0);
    assert_eq!(lt_signed(&z, &x)?, 0);

    Ok(())
}
