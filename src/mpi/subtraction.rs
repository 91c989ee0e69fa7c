//! Limb-vector and signed subtraction.

use crate::limb::Limb;
use crate::{Error, Mpi};

/// Subtracts `b` from `a` with borrow-in, returning the low limb and
/// leaving the borrow in `acc` (0 or 1).
#[inline]
pub fn sbb(a: Limb, b: Limb, acc: &mut Limb) -> Limb {
    let (d, b1) = a.overflowing_sub(b);
    let (d, b2) = d.overflowing_sub(*acc);
    *acc = (b1 | b2) as Limb;
    d
}

/// `a -= b`, propagating the borrow through the remaining high limbs of `a`
/// until it is absorbed.
///
/// Requires `a.len() >= b.len()` and, for a nonnegative result, `a >= b` as
/// magnitudes; an unabsorbed borrow wraps, which Montgomery reduction relies
/// on for its balancing subtraction.
pub fn sub2(a: &mut [Limb], b: &[Limb]) {
    debug_assert!(a.len() >= b.len());

    let mut borrow: Limb = 0;
    let (lo, hi) = a.split_at_mut(b.len());
    for (a, &b) in lo.iter_mut().zip(b) {
        *a = sbb(*a, b, &mut borrow);
    }
    for a in hi {
        if borrow == 0 {
            break;
        }
        *a = sbb(*a, 0, &mut borrow);
    }
}

impl Mpi {
    /// `self = |self| - |b|` (HAC 14.9). Fails with
    /// [`Error::NegativeValue`] when `|self| < |b|`. The result is positive.
    pub fn sub_abs_assign(&mut self, b: &Mpi) -> Result<(), Error> {
        if self.cmp_abs(b) == core::cmp::Ordering::Less {
            return Err(Error::NegativeValue);
        }

        self.s = 1;
        let n = b.used();
        sub2(&mut self.limbs, &b.limbs[..n]);
        Ok(())
    }

    /// Signed subtraction: `self -= b`.
    pub fn sub_assign_mpi(&mut self, b: &Mpi) -> Result<(), Error> {
        let s = self.s;
        if s * b.s > 0 {
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

    /// Signed subtraction of a small integer: `self -= b`.
    pub fn sub_assign_int(&mut self, b: i64) -> Result<(), Error> {
        self.sub_assign_mpi(&Mpi::from(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_subtraction_requires_larger_magnitude() {
        let mut x = Mpi::from(5u32);
        assert_eq!(
            x.sub_abs_assign(&Mpi::from(7u32)),
            Err(Error::NegativeValue)
        );
        // magnitudes, not signed values
        let mut y = Mpi::from(-7i32);
        y.sub_abs_assign(&Mpi::from(5u32)).unwrap();
        assert_eq!(y, Mpi::from(2u32));
    }

    #[test]
    fn borrow_chain() {
        let mut x = Mpi { s: 1, limbs: alloc::vec![0, 0, 1] };
        x.sub_abs_assign(&Mpi::from(1u32)).unwrap();
        assert_eq!(&x.limbs[..3], &[Limb::MAX, Limb::MAX, 0]);
    }

    #[test]
    fn signed_dispatch() {
        for &(a, b) in &[
            (17i64, 5i64),
            (5, 17),
            (-17, 5),
            (17, -5),
            (-17, -5),
            (-5, -17),
            (0, 3),
            (3, 3),
            (0, 0),
        ] {
            let mut x = Mpi::from(a);
            x.sub_assign_mpi(&Mpi::from(b)).unwrap();
            assert_eq!(x, Mpi::from(a - b), "{} - {}", a, b);

            let mut y = Mpi::from(a);
            y.sub_assign_int(b).unwrap();
            assert_eq!(y, Mpi::from(a - b));
        }
    }
}
