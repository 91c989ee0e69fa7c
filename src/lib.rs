//! Arbitrary-precision integers for public-key cryptography.
//!
//! This crate implements the multi-precision integer ("MPI") arithmetic
//! needed by RSA, Diffie-Hellman, DSA and related primitives: signed
//! integers of unbounded width, modular arithmetic with Montgomery-based
//! modular exponentiation, a Miller-Rabin probable-prime test and random
//! prime generation, together with the constant-time conditional
//! assign/swap primitives that scalar-multiplication code needs to avoid
//! data-dependent memory traces.
//!
//! The central type is [`Mpi`]. Values are created in the zero state and
//! mutated in place; every operation that can allocate or receive invalid
//! arguments returns a [`Result`] with a crate [`Error`]. All limb buffers
//! are wiped before they are released.
//!
//! ```
//! use num_mpi::Mpi;
//!
//! let a = Mpi::from_str_radix("-1A", 16).unwrap();
//! assert_eq!(a.to_string_radix(10).unwrap(), "-26");
//!
//! let base = Mpi::from(3u32);
//! let exp = Mpi::from(7u32);
//! let modulus = Mpi::from(13u32);
//! let r = base.exp_mod(&exp, &modulus, None).unwrap();
//! assert_eq!(r, Mpi::from(3u32)); // 3^7 = 2187 = 3 (mod 13)
//! ```
//!
//! Apart from [`Mpi::cond_assign`], [`Mpi::cond_swap`] and the interior of
//! [`Mpi::exp_mod`], all operations here are value-dependent: their timing
//! and memory traffic vary with the operand values. Do not feed them secret
//! data directly; blind it first or go through the constant-time primitives.
//!
//! ## Crate features
//!
//! - `std` (default): `std::error::Error` for [`Error`].
//! - `rand` (default): [`Mpi::fill_random`] and the [`RandMpi`] trait.
//! - `prime` (default, implies `rand`): the [`prime`] module.
//! - `u64_digit` (default): 64-bit limbs; without it limbs are 32-bit.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

use core::fmt;

macro_rules! cfg_digit {
    ($item32:item $item64:item) => {
        #[cfg(not(feature = "u64_digit"))]
        $item32
        #[cfg(feature = "u64_digit")]
        $item64
    };
}

pub mod limb;

mod mpi;
mod traits;

pub mod algorithms;

mod bigrand;
pub mod prime;

pub use crate::algorithms::{gcd, mod_inverse};
pub use crate::mpi::{Mpi, Sign};

#[cfg(feature = "rand")]
pub use crate::bigrand::RandMpi;
#[cfg(feature = "prime")]
pub use crate::bigrand::RandPrime;

/// Hard ceiling on the number of limbs a single [`Mpi`] may hold.
///
/// Any operation that would grow a value past this bound fails with
/// [`Error::AllocationFailed`] instead of allocating.
pub const MAX_LIMBS: usize = 10_000;

/// Largest bit length accepted by [`prime::gen_prime`].
pub const MAX_BITS: usize = 8192;

/// Largest byte count accepted by [`Mpi::fill_random`].
pub const MAX_FILL_BYTES: usize = 1024;

/// Upper bound on the sliding-window size used by [`Mpi::exp_mod`].
pub(crate) const EXP_WINDOW_SIZE: usize = 6;

/// The error type shared by all fallible operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An argument was outside its documented domain (radix, bit value,
    /// shift position, modulus parity, prime size, ...).
    BadInput,
    /// A grow request exceeded [`MAX_LIMBS`].
    AllocationFailed,
    /// An output buffer was too small; `needed` is a sufficient size.
    BufferTooSmall {
        /// Number of bytes that would have been enough.
        needed: usize,
    },
    /// Division or reduction by zero.
    DivisionByZero,
    /// An unsigned subtraction would have gone negative, or a modulus
    /// operand was negative.
    NegativeValue,
    /// The operation is undefined for these operands (e.g. a modular
    /// inverse of non-coprime values).
    NotAcceptable,
    /// A character in an ASCII import was not a digit of the radix.
    InvalidCharacter,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::BadInput => f.write_str("invalid input argument"),
            Error::AllocationFailed => f.write_str("limb allocation limit exceeded"),
            Error::BufferTooSmall { needed } => {
                write!(f, "output buffer too small, {} bytes needed", needed)
            }
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::NegativeValue => f.write_str("result would be negative"),
            Error::NotAcceptable => f.write_str("operation undefined for these operands"),
            Error::InvalidCharacter => f.write_str("invalid digit character"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
