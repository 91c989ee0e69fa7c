//! Randomization of multi-precision integers.
#![cfg(feature = "rand")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use alloc::vec::Vec;

use rand::RngCore;

use crate::{Error, Mpi};

impl Mpi {
    /// Fills `self` with `size` random bytes from `rng`.
    ///
    /// The bytes are interpreted big-endian, so a deterministic `rng`
    /// produces the same value on every platform. Fails with
    /// [`Error::BadInput`] when `size` exceeds
    /// [`MAX_FILL_BYTES`](crate::MAX_FILL_BYTES).
    pub fn fill_random<R: RngCore + ?Sized>(
        &mut self,
        size: usize,
        rng: &mut R,
    ) -> Result<(), Error> {
        if size > crate::MAX_FILL_BYTES {
            return Err(Error::BadInput);
        }

        let mut buf = alloc::vec![0u8; size];
        rng.fill_bytes(&mut buf);
        *self = Mpi::from_bytes_be(&buf)?;
        Ok(())
    }
}

/// A trait for sampling random [`Mpi`] values.
///
/// The `rand` feature must be enabled to use this.
pub trait RandMpi {
    /// Generate a random nonnegative [`Mpi`] of at most `bit_size` bits.
    fn gen_mpi(&mut self, bit_size: u64) -> Mpi;
}

impl<R: RngCore + ?Sized> RandMpi for R {
    fn gen_mpi(&mut self, bit_size: u64) -> Mpi {
        let bytes = bit_size.div_ceil(8) as usize;
        let rem = (bit_size % 8) as u8;

        let mut buf: Vec<u8> = alloc::vec![0u8; bytes];
        self.fill_bytes(&mut buf);
        if rem > 0 {
            buf[0] &= (1u8 << rem) - 1;
        }

        Mpi::from_bytes_be(&buf).expect("byte count bounded by bit_size")
    }
}

/// A generic trait for generating random primes.
///
/// *Warning*: the quality of the primes is entirely dependent on the
/// provided random number generator.
///
/// # Example
#[cfg_attr(feature = "std", doc = " ```")]
#[cfg_attr(not(feature = "std"), doc = " ```ignore")]
/// use num_mpi::RandPrime;
///
/// let mut rng = rand::rng();
/// let p = rng.gen_prime(256).unwrap();
/// assert_eq!(p.bits(), 256);
/// ```
#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub trait RandPrime {
    /// Generate a random probable prime with exactly `bits` bits.
    fn gen_prime(&mut self, bits: usize) -> Result<Mpi, Error>;
}

#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
impl<R: RngCore + ?Sized> RandPrime for R {
    #[inline]
    fn gen_prime(&mut self, bits: usize) -> Result<Mpi, Error> {
        crate::prime::gen_prime(bits, false, self)
    }
}
