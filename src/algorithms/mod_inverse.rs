use core::cmp::Ordering;

use super::gcd;
use crate::{Error, Mpi};

/// Modular inverse: the `x` in `[0, n)` with `a * x = 1 (mod n)`, by the
/// binary extended Euclidean algorithm (HAC 14.61 / 14.64).
///
/// Fails with [`Error::BadInput`] when `n` is not positive and with
/// [`Error::NotAcceptable`] when `gcd(a, n) != 1`, in which case no inverse
/// exists.
pub fn mod_inverse(a: &Mpi, n: &Mpi) -> Result<Mpi, Error> {
    if n.cmp_int(0) != Ordering::Greater {
        return Err(Error::BadInput);
    }
    if n.cmp_int(1) == Ordering::Equal {
        // everything is congruent mod 1; the canonical representative is 0
        return Ok(Mpi::new());
    }

    let g = gcd(a, n)?;
    if g.cmp_int(1) != Ordering::Equal {
        return Err(Error::NotAcceptable);
    }

    let ta = a.mod_mpi(n)?;
    let mut tu = ta.clone();
    let tb = n.clone();
    let mut tv = n.clone();

    let mut u1 = Mpi::from(1u32);
    let mut u2 = Mpi::new();
    let mut v1 = Mpi::new();
    let mut v2 = Mpi::from(1u32);

    loop {
        while tu.is_even() {
            tu.shift_right(1);

            // keep (U1, U2) divisible by two before halving
            if u1.is_odd() || u2.is_odd() {
                u1.add_assign_mpi(&tb)?;
                u2.sub_assign_mpi(&ta)?;
            }
            u1.shift_right(1);
            u2.shift_right(1);
        }

        while tv.is_even() {
            tv.shift_right(1);

            if v1.is_odd() || v2.is_odd() {
                v1.add_assign_mpi(&tb)?;
                v2.sub_assign_mpi(&ta)?;
            }
            v1.shift_right(1);
            v2.shift_right(1);
        }

        if tu.cmp(&tv) != Ordering::Less {
            tu.sub_assign_mpi(&tv)?;
            u1.sub_assign_mpi(&v1)?;
            u2.sub_assign_mpi(&v2)?;
        } else {
            tv.sub_assign_mpi(&tu)?;
            v1.sub_assign_mpi(&u1)?;
            v2.sub_assign_mpi(&u2)?;
        }

        if tu.cmp_int(0) == Ordering::Equal {
            break;
        }
    }

    while v1.cmp_int(0) == Ordering::Less {
        v1.add_assign_mpi(n)?;
    }
    while v1.cmp(n) != Ordering::Less {
        v1.sub_assign_mpi(n)?;
    }

    Ok(v1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::RandMpi;

    #[test]
    fn known_inverse() {
        let x = mod_inverse(&Mpi::from(3u32), &Mpi::from(11u32)).unwrap();
        assert_eq!(x, Mpi::from(4u32)); // 3*4 = 12 = 1 (mod 11)
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            mod_inverse(&Mpi::from(3u32), &Mpi::new()),
            Err(Error::BadInput)
        );
        assert_eq!(
            mod_inverse(&Mpi::from(3u32), &Mpi::from(-11i32)),
            Err(Error::BadInput)
        );
        assert_eq!(
            mod_inverse(&Mpi::from(4u32), &Mpi::from(10u32)),
            Err(Error::NotAcceptable)
        );
    }

    #[test]
    fn inverse_times_value_is_one() {
        // modulus is the 127-bit Mersenne prime, so every nonzero value
        // below it is invertible
        let mut m = Mpi::from(1u32);
        m.shift_left(127).unwrap();
        m.sub_assign_int(1).unwrap();

        let mut rng = XorShiftRng::from_seed([13u8; 16]);
        for _ in 0..8 {
            let mut a = rng.gen_mpi(126);
            if a.is_zero() {
                a = Mpi::from(2u32);
            }

            let inv = mod_inverse(&a, &m).unwrap();
            let p = a.mul_mpi(&inv).unwrap().mod_mpi(&m).unwrap();
            assert_eq!(p, Mpi::from(1u32));
        }
    }

    #[test]
    fn negative_values_are_reduced_first() {
        // -3 = 8 (mod 11) and 8*7 = 56 = 1 (mod 11)
        let x = mod_inverse(&Mpi::from(-3i32), &Mpi::from(11u32)).unwrap();
        assert_eq!(x, Mpi::from(7u32));
    }
}
