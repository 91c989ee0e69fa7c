//! The machine word ("limb") underlying [`Mpi`](crate::Mpi).
//!
//! With the `u64_digit` feature (on by default) a limb is 64 bits wide and
//! the double-width companion is `u128`; otherwise limbs are 32 bits wide.
//! Everything above this module is written against [`Limb`]/[`DoubleLimb`]
//! and the constants here, so the digit width is a build-time choice.

use num_integer::Integer;

cfg_digit!(
    /// One digit of the positional representation.
    pub type Limb = u32;
    /// One digit of the positional representation.
    pub type Limb = u64;
);

cfg_digit!(
    /// A type wide enough to hold the product of two limbs.
    pub type DoubleLimb = u64;
    /// A type wide enough to hold the product of two limbs.
    pub type DoubleLimb = u128;
);

/// Width of a limb in bits.
pub const BITS: usize = Limb::BITS as usize;

/// Width of a limb in bytes.
pub const BYTES: usize = BITS / 8;

/// Number of limbs needed to hold `bits` bits.
#[inline]
pub fn bits_to_limbs(bits: usize) -> usize {
    Integer::div_ceil(&bits, &BITS)
}

/// Number of limbs needed to hold `bytes` bytes.
#[inline]
pub fn bytes_to_limbs(bytes: usize) -> usize {
    Integer::div_ceil(&bytes, &BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limb_geometry() {
        assert_eq!(BITS, BYTES * 8);
        assert_eq!(bits_to_limbs(0), 0);
        assert_eq!(bits_to_limbs(1), 1);
        assert_eq!(bits_to_limbs(BITS), 1);
        assert_eq!(bits_to_limbs(BITS + 1), 2);
        assert_eq!(bytes_to_limbs(BYTES + 1), 2);
    }
}
