#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use ctflow_constant_time::{cond_assign, cond_swap, lt_signed, Limb, Mpi, MpiStorage};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub x: Vec<Limb>,
    pub x_negative: bool,
    pub y: Vec<Limb>,
    pub y_negative: bool,
    pub flag: bool,
}

fn mpi(limbs: &[Limb], negative: bool) -> Mpi {
    match negative {
        true => Mpi::from_limbs_negative(limbs),
        false => Mpi::from_limbs(limbs),
    }
}

fuzz_target!(|input: Input| {
    let flag = input.flag as u8;
    let n = input.x.len().max(input.y.len());
    let padded = |v: &[Limb]| {
        let mut v = v.to_vec();
        v.resize(n, 0);
        v
    };

    let mut x = mpi(&input.x, input.x_negative);
    let mut y = mpi(&input.y, input.y_negative);
    if cond_swap(&mut x, &mut y, flag).is_err() {
        return;
    }
    let (ex, ey) = match input.flag {
        true => (&input.y, &input.x),
        false => (&input.x, &input.y),
    };
    assert_eq!(x.limbs(), &padded(ex)[..]);
    assert_eq!(y.limbs(), &padded(ey)[..]);

    // both have n limbs now
    lt_signed(&x, &y).unwrap();

    let mut z = mpi(&input.x, input.x_negative);
    cond_assign(&mut z, &y, flag).unwrap();
    let expected = match input.flag {
        true => y.limbs().to_vec(),
        false => padded(&input.x),
    };
    assert_eq!(z.limbs(), &expected[..]);
});
