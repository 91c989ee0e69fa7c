//! Schoolbook multiplication and its multiply-accumulate core.

use crate::limb::{DoubleLimb, Limb, BITS};
use crate::{Error, Mpi};

/// `a + b * c + carry`, returning the low limb and leaving the high part in
/// `acc`. This is the whole inner loop of the crate; everything
/// multiplicative is composed from it.
#[inline]
pub fn mac_with_carry(a: Limb, b: Limb, c: Limb, acc: &mut DoubleLimb) -> Limb {
    *acc += a as DoubleLimb;
    *acc += (b as DoubleLimb) * (c as DoubleLimb);
    let lo = *acc as Limb;
    *acc >>= BITS;
    lo
}

/// `acc += b * c`, with the final carry propagated into `acc[b.len()..]`
/// until absorbed.
///
/// Requires `acc` to be long enough to absorb the carry, i.e. at least
/// `b.len() + 1` limbs unless the caller knows the product fits.
pub fn mac_digit(acc: &mut [Limb], b: &[Limb], c: Limb) {
    if c == 0 {
        return;
    }

    let mut carry: DoubleLimb = 0;
    let (lo, hi) = acc.split_at_mut(b.len());
    for (a, &b) in lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    let mut carry = carry as Limb;
    for a in hi {
        if carry == 0 {
            return;
        }
        let (d, overflow) = a.overflowing_add(carry);
        *a = d;
        carry = overflow as Limb;
    }
    debug_assert!(carry == 0, "multiply-accumulate overflowed the accumulator");
}

impl Mpi {
    /// Schoolbook multiplication: returns `self * b` (HAC 14.12).
    ///
    /// The product is accumulated column by column with [`mac_digit`]; the
    /// result sign is the product of the operand signs, with zero
    /// canonically positive.
    pub fn mul_mpi(&self, b: &Mpi) -> Result<Mpi, Error> {
        let i = self.used();
        let j = b.used();

        let mut x = Mpi::new();
        x.grow(i + j)?;

        for k in (0..j).rev() {
            mac_digit(&mut x.limbs[k..], &self.limbs[..i], b.limbs[k]);
        }

        x.s = self.s * b.s;
        x.normalize();
        Ok(x)
    }

    /// Returns `self * b` for a single unsigned limb `b`. The sign of
    /// `self` is kept.
    pub fn mul_int(&self, b: Limb) -> Result<Mpi, Error> {
        let i = self.used();

        let mut x = Mpi::new();
        x.grow(i + 1)?;
        mac_digit(&mut x.limbs, &self.limbs[..i], b);

        x.s = self.s;
        x.normalize();
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::RandMpi;

    #[test]
    fn small_products() {
        for &(a, b) in &[
            (0i64, 0i64),
            (0, 7),
            (1, 9),
            (12, 12),
            (-3, 4),
            (3, -4),
            (-3, -4),
            (i32::MAX as i64, i32::MAX as i64),
        ] {
            let p = Mpi::from(a).mul_mpi(&Mpi::from(b)).unwrap();
            assert_eq!(p, Mpi::from(a * b), "{} * {}", a, b);
        }
    }

    #[test]
    fn negative_times_zero_is_plus_zero() {
        let p = Mpi::from(-5i32).mul_mpi(&Mpi::new()).unwrap();
        assert!(p.is_zero());
        assert_eq!(p.sign(), crate::Sign::Plus);
    }

    #[test]
    fn mul_int_matches_mul_mpi() {
        let a = Mpi::from_str_radix("123456789ABCDEF0123456789", 16).unwrap();
        for b in [0 as Limb, 1, 2, 1000, Limb::MAX] {
            let expected = a.mul_mpi(&Mpi { s: 1, limbs: alloc::vec![b] }).unwrap();
            assert_eq!(a.mul_int(b).unwrap(), expected);
        }
    }

    #[test]
    fn ring_laws() {
        let mut rng = XorShiftRng::from_seed([7u8; 16]);
        for bits in [1u64, 31, 64, 200, 521] {
            let a = rng.gen_mpi(bits);
            let b = rng.gen_mpi(bits);
            let c = rng.gen_mpi(bits);

            // commutativity
            assert_eq!(a.mul_mpi(&b).unwrap(), b.mul_mpi(&a).unwrap());

            // associativity
            assert_eq!(
                a.mul_mpi(&b).unwrap().mul_mpi(&c).unwrap(),
                a.mul_mpi(&b.mul_mpi(&c).unwrap()).unwrap()
            );

            // distributivity over addition
            let mut bc = b.clone();
            bc.add_assign_mpi(&c).unwrap();
            let lhs = a.mul_mpi(&bc).unwrap();
            let mut rhs = a.mul_mpi(&b).unwrap();
            rhs.add_assign_mpi(&a.mul_mpi(&c).unwrap()).unwrap();
            assert_eq!(lhs, rhs);

            // identities
            assert_eq!(a.mul_mpi(&Mpi::from(1u32)).unwrap(), a);
            assert!(a.mul_mpi(&Mpi::new()).unwrap().is_zero());
        }
    }
}
