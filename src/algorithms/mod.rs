//! Low-level algorithms for multi-precision arithmetic.
//!
//! This module re-exports the internal limb-vector primitives used by
//! [`Mpi`](crate::Mpi), making them available for direct use on digit
//! slices, and hosts the number-theoretic routines built on top of them.

#![allow(clippy::many_single_char_names)]

// Re-export arithmetic primitives from their canonical locations.
//
// The implementations live inside the `mpi` submodules where they are used
// by the value-level operations. We simply widen their visibility here.

// --- addition ---
pub use crate::mpi::addition::{adc, add2};

// --- subtraction ---
pub use crate::mpi::subtraction::{sbb, sub2};

// --- multiplication ---
pub use crate::mpi::multiplication::{mac_digit, mac_with_carry};

// --- crypto algorithms ---
mod gcd;
mod mod_inverse;

pub use self::gcd::*;
pub use self::mod_inverse::*;
