//! Bit access and bit-length queries.

use crate::limb::BITS;
use crate::{Error, Mpi};

impl Mpi {
    /// Bit length: one past the index of the highest set bit, 0 for zero.
    pub fn bits(&self) -> usize {
        let i = self.used();
        if i == 0 {
            return 0;
        }
        let top = self.limbs[i - 1];
        (i - 1) * BITS + (BITS - top.leading_zeros() as usize)
    }

    /// Size of the magnitude in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        (self.bits() + 7) / 8
    }

    /// Returns bit `pos` of the magnitude, 0 when `pos` is beyond the
    /// allocated width.
    pub fn get_bit(&self, pos: usize) -> u8 {
        if self.limbs.len() * BITS <= pos {
            return 0;
        }
        ((self.limbs[pos / BITS] >> (pos % BITS)) & 1) as u8
    }

    /// Sets bit `pos` of the magnitude to `val` (0 or 1), growing as
    /// needed. Clearing a bit beyond the current width is a no-op.
    pub fn set_bit(&mut self, pos: usize, val: u8) -> Result<(), Error> {
        if val != 0 && val != 1 {
            return Err(Error::BadInput);
        }

        let off = pos / BITS;
        let idx = pos % BITS;

        if self.limbs.len() * BITS <= pos {
            if val == 0 {
                return Ok(());
            }
            self.grow(off + 1)?;
        }

        self.limbs[off] &= !(1 << idx);
        self.limbs[off] |= (val as crate::limb::Limb) << idx;

        Ok(())
    }

    /// Index of the least significant set bit.
    ///
    /// By convention this returns 0 for the zero value, the same answer as
    /// for an odd value; don't call it on zero when the distinction matters.
    pub fn lsb(&self) -> usize {
        for (i, &l) in self.limbs.iter().enumerate() {
            if l != 0 {
                return i * BITS + l.trailing_zeros() as usize;
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length() {
        assert_eq!(Mpi::new().bits(), 0);
        assert_eq!(Mpi::from(1u32).bits(), 1);
        assert_eq!(Mpi::from(255u32).bits(), 8);
        assert_eq!(Mpi::from(256u32).bits(), 9);
        assert_eq!(Mpi::new().byte_len(), 0);
        assert_eq!(Mpi::from(256u32).byte_len(), 2);
    }

    #[test]
    fn get_and_set() {
        let mut x = Mpi::new();
        x.set_bit(200, 1).unwrap();
        assert_eq!(x.bits(), 201);
        assert_eq!(x.get_bit(200), 1);
        assert_eq!(x.get_bit(199), 0);
        assert_eq!(x.get_bit(100_000), 0);

        x.set_bit(200, 0).unwrap();
        assert!(x.is_zero());

        // clearing far beyond the width must not allocate
        let mut y = Mpi::from(1u32);
        y.set_bit(1_000_000, 0).unwrap();
        assert_eq!(y, Mpi::from(1u32));

        assert_eq!(x.set_bit(3, 2), Err(Error::BadInput));
    }

    #[test]
    fn lowest_set_bit() {
        assert_eq!(Mpi::new().lsb(), 0);
        assert_eq!(Mpi::from(1u32).lsb(), 0);
        assert_eq!(Mpi::from(8u32).lsb(), 3);

        let mut x = Mpi::from(6u32);
        x.shift_left(100).unwrap();
        assert_eq!(x.lsb(), 101);
    }
}
