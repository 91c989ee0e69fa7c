//! Conditional assign and swap with secret-independent traces.
//!
//! These two operations touch the same memory in the same order whether the
//! condition is 0 or 1, so higher-level scalar-multiplication code can
//! branch on secret bits without leaving a data-dependent trace. The limb
//! and sign updates use multiply masking rather than branches; the operand
//! sizes are allowed to leak.

use core::sync::atomic::{compiler_fence, Ordering};

use crate::limb::Limb;
use crate::{Error, Mpi};

impl Mpi {
    /// `self = other` when `cond` is nonzero, otherwise a no-op, with the
    /// same memory accesses either way. `self` is grown to `other`'s
    /// allocated width first.
    pub fn cond_assign(&mut self, other: &Mpi, cond: u8) -> Result<(), Error> {
        let c = (cond != 0) as Limb;

        self.grow(other.limbs.len())?;

        self.s = self.s * (1 - c as i8) + other.s * c as i8;

        for i in 0..other.limbs.len() {
            self.limbs[i] = self.limbs[i] * (1 - c) + other.limbs[i] * c;
        }
        for l in &mut self.limbs[other.limbs.len()..] {
            *l *= 1 - c;
        }

        compiler_fence(Ordering::SeqCst);
        Ok(())
    }

    /// Swaps `x` and `y` when `cond` is nonzero, otherwise a no-op, with
    /// the same memory accesses either way.
    ///
    /// Both operands are grown to a common width and every limb pair is
    /// rewritten; deliberately no buffer-pointer swap, which would change
    /// the access pattern of later operations.
    pub fn cond_swap(x: &mut Mpi, y: &mut Mpi, cond: u8) -> Result<(), Error> {
        let c = (cond != 0) as Limb;

        x.grow(y.limbs.len())?;
        y.grow(x.limbs.len())?;

        let s = x.s;
        x.s = x.s * (1 - c as i8) + y.s * c as i8;
        y.s = y.s * (1 - c as i8) + s * c as i8;

        for (a, b) in x.limbs.iter_mut().zip(y.limbs.iter_mut()) {
            let t = *a;
            *a = *a * (1 - c) + *b * c;
            *b = *b * (1 - c) + t * c;
        }

        compiler_fence(Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_by_condition() {
        let y = Mpi::from(-77i32);

        let mut x = Mpi::from(5u32);
        x.cond_assign(&y, 0).unwrap();
        assert_eq!(x, Mpi::from(5u32));

        x.cond_assign(&y, 1).unwrap();
        assert_eq!(x, y);

        // any nonzero condition counts as 1
        let mut z = Mpi::from(5u32);
        z.cond_assign(&y, 0x80).unwrap();
        assert_eq!(z, y);
    }

    #[test]
    fn assign_clears_wider_target() {
        let mut x = Mpi::from(u64::MAX);
        x.grow(6).unwrap();
        let y = Mpi::from(1u32);
        x.cond_assign(&y, 1).unwrap();
        assert_eq!(x, y);
        assert_eq!(x.used(), 1);
    }

    #[test]
    fn swap_by_condition() {
        let a0 = Mpi::from_str_radix("-123456789ABCDEF", 16).unwrap();
        let b0 = Mpi::from(42u32);

        let mut a = a0.clone();
        let mut b = b0.clone();
        Mpi::cond_swap(&mut a, &mut b, 0).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);

        Mpi::cond_swap(&mut a, &mut b, 1).unwrap();
        assert_eq!(a, b0);
        assert_eq!(b, a0);

        // both operands end up with the common grown width
        assert_eq!(a.limbs.len(), b.limbs.len());
    }
}
