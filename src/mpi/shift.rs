//! Bit shifts.

use crate::limb::{bits_to_limbs, BITS};
use crate::{Error, Mpi};

impl Mpi {
    /// `self <<= count`, growing the buffer to hold the shifted magnitude.
    pub fn shift_left(&mut self, count: usize) -> Result<(), Error> {
        let v0 = count / BITS;
        let t1 = count & (BITS - 1);

        let need = self.bits() + count;
        if self.limbs.len() * BITS < need {
            self.grow(bits_to_limbs(need))?;
        }

        if v0 > 0 {
            for i in (v0..self.limbs.len()).rev() {
                self.limbs[i] = self.limbs[i - v0];
            }
            for l in &mut self.limbs[..v0] {
                *l = 0;
            }
        }

        if t1 > 0 {
            let mut r0 = 0;
            for l in &mut self.limbs[v0..] {
                let r1 = *l >> (BITS - t1);
                *l = (*l << t1) | r0;
                r0 = r1;
            }
        }

        Ok(())
    }

    /// `self >>= count`. Shifting past the total width collapses the value
    /// to zero.
    pub fn shift_right(&mut self, count: usize) {
        let v0 = count / BITS;
        let v1 = count & (BITS - 1);

        let n = self.limbs.len();
        if v0 > n || (v0 == n && v1 > 0) {
            for l in &mut self.limbs {
                *l = 0;
            }
            self.s = 1;
            return;
        }

        if v0 > 0 {
            for i in 0..n - v0 {
                self.limbs[i] = self.limbs[i + v0];
            }
            for l in &mut self.limbs[n - v0..] {
                *l = 0;
            }
        }

        if v1 > 0 {
            let mut r0 = 0;
            for i in (0..n).rev() {
                let r1 = self.limbs[i] << (BITS - v1);
                self.limbs[i] = (self.limbs[i] >> v1) | r0;
                r0 = r1;
            }
        }

        self.normalize();
    }
}
