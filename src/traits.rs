//! `num-traits` integration.
//!
//! [`Mpi`] plugs into the standard numeric traits so that generic code (and
//! the tests in this crate) can use it like any other integer type:
//! [`Zero`], [`One`], [`Num`] with its radix parser, and [`Signed`].

use core::str::FromStr;

use num_traits::{Num, One, Signed, Zero};

use crate::{Error, Mpi};

impl Zero for Mpi {
    #[inline]
    fn zero() -> Mpi {
        Mpi::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Mpi::is_zero(self)
    }

    #[inline]
    fn set_zero(&mut self) {
        self.set_int(0).expect("a one-limb value always fits");
    }
}

impl One for Mpi {
    #[inline]
    fn one() -> Mpi {
        Mpi::from(1u32)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.used() == 1 && self.limbs[0] == 1 && self.s > 0
    }
}

impl Num for Mpi {
    type FromStrRadixErr = Error;

    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<Mpi, Error> {
        Mpi::from_str_radix(s, radix)
    }
}

impl Signed for Mpi {
    #[inline]
    fn abs(&self) -> Mpi {
        Mpi::abs(self)
    }

    fn abs_sub(&self, other: &Mpi) -> Mpi {
        if self <= other {
            Mpi::new()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Mpi {
        if self.is_zero() {
            Mpi::new()
        } else if self.s > 0 {
            Mpi::from(1u32)
        } else {
            Mpi::from(-1i32)
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.s > 0 && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Mpi::is_negative(self)
    }
}

impl FromStr for Mpi {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Mpi, Error> {
        Mpi::from_str_radix(s, 10)
    }
}
