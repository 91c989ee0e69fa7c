//! Operator sugar over the fallible core operations.
//!
//! Arithmetic on [`Mpi`] values cannot fail except by exceeding
//! [`MAX_LIMBS`](crate::MAX_LIMBS) or dividing by zero, so the operator
//! impls unwrap those the way the primitive integer operators do. Code that
//! wants to handle the errors calls the named methods instead.

use core::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign};

use crate::Mpi;

impl Add<&Mpi> for &Mpi {
    type Output = Mpi;

    fn add(self, rhs: &Mpi) -> Mpi {
        let mut x = self.clone();
        x.add_assign_mpi(rhs).expect("mpi capacity exceeded");
        x
    }
}

impl Sub<&Mpi> for &Mpi {
    type Output = Mpi;

    fn sub(self, rhs: &Mpi) -> Mpi {
        let mut x = self.clone();
        x.sub_assign_mpi(rhs).expect("mpi capacity exceeded");
        x
    }
}

impl Mul<&Mpi> for &Mpi {
    type Output = Mpi;

    fn mul(self, rhs: &Mpi) -> Mpi {
        self.mul_mpi(rhs).expect("mpi capacity exceeded")
    }
}

impl Div<&Mpi> for &Mpi {
    type Output = Mpi;

    fn div(self, rhs: &Mpi) -> Mpi {
        self.div_rem(rhs).expect("mpi division by zero").0
    }
}

impl Rem<&Mpi> for &Mpi {
    type Output = Mpi;

    fn rem(self, rhs: &Mpi) -> Mpi {
        self.div_rem(rhs).expect("mpi division by zero").1
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Mpi> for Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: Mpi) -> Mpi {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&Mpi> for Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: &Mpi) -> Mpi {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Mpi> for &Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: Mpi) -> Mpi {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl AddAssign<&Mpi> for Mpi {
    #[inline]
    fn add_assign(&mut self, rhs: &Mpi) {
        self.add_assign_mpi(rhs).expect("mpi capacity exceeded");
    }
}

impl SubAssign<&Mpi> for Mpi {
    #[inline]
    fn sub_assign(&mut self, rhs: &Mpi) {
        self.sub_assign_mpi(rhs).expect("mpi capacity exceeded");
    }
}

impl Neg for Mpi {
    type Output = Mpi;

    fn neg(mut self) -> Mpi {
        self.s = -self.s;
        self.normalize();
        self
    }
}

impl Neg for &Mpi {
    type Output = Mpi;

    #[inline]
    fn neg(self) -> Mpi {
        -self.clone()
    }
}

impl Shl<usize> for &Mpi {
    type Output = Mpi;

    fn shl(self, count: usize) -> Mpi {
        let mut x = self.clone();
        x.shift_left(count).expect("mpi capacity exceeded");
        x
    }
}

impl Shl<usize> for Mpi {
    type Output = Mpi;

    #[inline]
    fn shl(mut self, count: usize) -> Mpi {
        self.shift_left(count).expect("mpi capacity exceeded");
        self
    }
}

impl Shr<usize> for &Mpi {
    type Output = Mpi;

    fn shr(self, count: usize) -> Mpi {
        let mut x = self.clone();
        x.shift_right(count);
        x
    }
}

impl Shr<usize> for Mpi {
    type Output = Mpi;

    #[inline]
    fn shr(mut self, count: usize) -> Mpi {
        self.shift_right(count);
        self
    }
}

impl ShlAssign<usize> for Mpi {
    #[inline]
    fn shl_assign(&mut self, count: usize) {
        self.shift_left(count).expect("mpi capacity exceeded");
    }
}

impl ShrAssign<usize> for Mpi {
    #[inline]
    fn shr_assign(&mut self, count: usize) {
        self.shift_right(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_sugar() {
        let a = Mpi::from(17u32);
        let b = Mpi::from(5u32);

        assert_eq!(&a + &b, Mpi::from(22u32));
        assert_eq!(&a - &b, Mpi::from(12u32));
        assert_eq!(&a * &b, Mpi::from(85u32));
        assert_eq!(&a / &b, Mpi::from(3u32));
        assert_eq!(&a % &b, Mpi::from(2u32));
        assert_eq!(-&b, Mpi::from(-5i32));
        assert_eq!(&b << 3, Mpi::from(40u32));
        assert_eq!(Mpi::from(40u32) >> 3, b);

        let mut c = a.clone();
        c += &b;
        c -= &b;
        assert_eq!(c, a);
    }

    #[test]
    fn negating_zero_stays_canonical() {
        let z = -Mpi::new();
        assert_eq!(z.sign(), crate::Sign::Plus);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_by_zero_panics() {
        let _ = Mpi::from(1u32) / Mpi::new();
    }
}
