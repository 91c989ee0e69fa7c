//! Limb-vector and signed addition.

use crate::limb::{DoubleLimb, Limb, BITS};
use crate::{Error, Mpi};

/// Adds `b` to `a` with carry-in, returning the low limb and leaving the
/// carry in `acc`.
#[inline]
pub fn adc(a: Limb, b: Limb, acc: &mut DoubleLimb) -> Limb {
    *acc += a as DoubleLimb;
    *acc += b as DoubleLimb;
    let lo = *acc as Limb;
    *acc >>= BITS;
    lo
}

/// `a += b`, propagating the carry through the remaining high limbs of `a`.
/// Returns the carry left over once `a` is exhausted.
///
/// Requires `a.len() >= b.len()`.
pub fn add2(a: &mut [Limb], b: &[Limb]) -> Limb {
    debug_assert!(a.len() >= b.len());

    let mut acc: DoubleLimb = 0;
    let (lo, hi) = a.split_at_mut(b.len());
    for (a, &b) in lo.iter_mut().zip(b) {
        *a = adc(*a, b, &mut acc);
    }
    for a in hi {
        if acc == 0 {
            return 0;
        }
        *a = adc(*a, 0, &mut acc);
    }
    acc as Limb
}

impl Mpi {
    /// `self = |self| + |b|` (HAC 14.7). The result is positive.
    pub fn add_abs_assign(&mut self, b: &Mpi) -> Result<(), Error> {
        self.s = 1;

        let j = b.used();
        self.grow(j)?;

        let carry = add2(&mut self.limbs, &b.limbs[..j]);
        if carry != 0 {
            let i = self.limbs.len();
            self.grow(i + 1)?;
            self.limbs[i] = carry;
        }
        Ok(())
    }

    /// Signed addition: `self += b`.
    pub fn add_assign_mpi(&mut self, b: &Mpi) -> Result<(), Error> {
        let s = self.s;
        if s * b.s < 0 {
            if self.cmp_abs(b) != core::cmp::Ordering::Less {
                self.sub_abs_assign(b)?;
                self.s = s;
            } else {
                let mut t = b.clone();
                t.sub_abs_assign(self)?;
                t.s = -s;
                *self = t;
            }
        } else {
            self.add_abs_assign(b)?;
            self.s = s;
        }
        self.normalize();
        Ok(())
    }

    /// Signed addition of a small integer: `self += b`.
    pub fn add_assign_int(&mut self, b: i64) -> Result<(), Error> {
        self.add_assign_mpi(&Mpi::from(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_chain() {
        let mut x = Mpi { s: 1, limbs: alloc::vec![Limb::MAX, Limb::MAX] };
        x.add_abs_assign(&Mpi::from(1u32)).unwrap();
        assert_eq!(x.used(), 3);
        assert_eq!(&x.limbs[..3], &[0, 0, 1]);
    }

    #[test]
    fn signed_dispatch() {
        for &(a, b) in &[
            (17i64, 5i64),
            (5, 17),
            (-17, 5),
            (17, -5),
            (-17, -5),
            (-5, 17),
            (0, -3),
            (-3, 3),
            (0, 0),
        ] {
            let mut x = Mpi::from(a);
            x.add_assign_mpi(&Mpi::from(b)).unwrap();
            assert_eq!(x, Mpi::from(a + b), "{} + {}", a, b);

            let mut y = Mpi::from(a);
            y.add_assign_int(b).unwrap();
            assert_eq!(y, Mpi::from(a + b));
        }
    }

    #[test]
    fn zero_result_is_positive() {
        let mut x = Mpi::from(-9i32);
        x.add_assign_int(9).unwrap();
        assert!(x.is_zero());
        assert_eq!(x.sign(), crate::Sign::Plus);
    }
}
