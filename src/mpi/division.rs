//! Schoolbook long division and reduction.

use core::cmp::Ordering;

use crate::limb::{DoubleLimb, Limb, BITS};
use crate::{Error, Mpi};

/// `q * (hi:lo)` as a little-endian three-limb value.
#[inline]
fn mul_limb_pair(q: Limb, hi: Limb, lo: Limb) -> [Limb; 3] {
    let plo = (q as DoubleLimb) * (lo as DoubleLimb);
    let phi = (q as DoubleLimb) * (hi as DoubleLimb);
    let mid = (plo >> BITS) + phi;
    [plo as Limb, mid as Limb, (mid >> BITS) as Limb]
}

#[inline]
fn cmp3(a: &[Limb; 3], b: &[Limb; 3]) -> Ordering {
    for k in (0..3).rev() {
        match a[k].cmp(&b[k]) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl Mpi {
    /// Long division: returns `(Q, R)` with `self = Q * b + R` (HAC 14.20).
    ///
    /// `|R| < |b|`, the remainder keeps the sign of `self` and the quotient
    /// sign is the product of the operand signs; a zero quotient or
    /// remainder is positive. Fails with [`Error::DivisionByZero`] when
    /// `b` is zero.
    pub fn div_rem(&self, b: &Mpi) -> Result<(Mpi, Mpi), Error> {
        if b.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.cmp_abs(b) == Ordering::Less {
            let mut r = self.clone();
            r.normalize();
            return Ok((Mpi::new(), r));
        }

        let mut x = self.abs();
        let mut y = b.abs();

        let mut z = Mpi::new();
        z.grow(self.used() + 2)?;

        // Normalize so the divisor's top limb has its high bit set,
        // keeping the shift to undo on the remainder.
        let k = y.bits() % BITS;
        let k = if k < BITS - 1 {
            let k = BITS - 1 - k;
            x.shift_left(k)?;
            y.shift_left(k)?;
            k
        } else {
            0
        };

        let n = x.used() - 1;
        let t = y.used() - 1;
        y.shift_left(BITS * (n - t))?;

        while x.cmp(&y) != Ordering::Less {
            z.limbs[n - t] += 1;
            x.sub_assign_mpi(&y)?;
        }
        y.shift_right(BITS * (n - t));

        for i in (t + 1..=n).rev() {
            // Tentative quotient digit, capped at the limb maximum.
            let mut q = if x.limbs[i] >= y.limbs[t] {
                Limb::MAX
            } else {
                let num = ((x.limbs[i] as DoubleLimb) << BITS) | x.limbs[i - 1] as DoubleLimb;
                let r = num / y.limbs[t] as DoubleLimb;
                if r > Limb::MAX as DoubleLimb {
                    Limb::MAX
                } else {
                    r as Limb
                }
            };

            // Knuth correction: bring q within one of the true digit by
            // comparing q * (y[t]:y[t-1]) against the top three limbs of x.
            let y_hi = y.limbs[t];
            let y_lo = if t >= 1 { y.limbs[t - 1] } else { 0 };
            let x_top = [
                if i >= 2 { x.limbs[i - 2] } else { 0 },
                x.limbs[i - 1],
                x.limbs[i],
            ];
            while cmp3(&mul_limb_pair(q, y_hi, y_lo), &x_top) == Ordering::Greater {
                q -= 1;
            }

            let mut t1 = y.mul_int(q)?;
            t1.shift_left(BITS * (i - t - 1))?;
            x.sub_assign_mpi(&t1)?;

            if x.cmp_int(0) == Ordering::Less {
                let mut t1 = y.clone();
                t1.shift_left(BITS * (i - t - 1))?;
                x.add_assign_mpi(&t1)?;
                q -= 1;
            }

            z.limbs[i - t - 1] = q;
        }

        z.s = self.s * b.s;
        z.normalize();

        x.shift_right(k);
        x.s = self.s;
        x.normalize();

        Ok((z, x))
    }

    /// Division by a small integer. Unlike [`Mpi::mod_int`], a negative
    /// divisor is accepted.
    pub fn div_rem_int(&self, b: i64) -> Result<(Mpi, Mpi), Error> {
        self.div_rem(&Mpi::from(b))
    }

    /// Returns `self mod b`, canonicalized into `[0, b)`.
    ///
    /// Requires `b > 0`: zero fails with [`Error::DivisionByZero`], a
    /// negative modulus with [`Error::NegativeValue`].
    pub fn mod_mpi(&self, b: &Mpi) -> Result<Mpi, Error> {
        if b.is_negative() {
            return Err(Error::NegativeValue);
        }

        let (_, mut r) = self.div_rem(b)?;

        while r.cmp_int(0) == Ordering::Less {
            r.add_assign_mpi(b)?;
        }
        while r.cmp(b) != Ordering::Less {
            r.sub_assign_mpi(b)?;
        }

        Ok(r)
    }

    /// Returns `self mod b` for a small positive integer `b`, reducing the
    /// limbs top-down through a half-limb window.
    ///
    /// Intended for small moduli such as radix values and the trial-division
    /// primes. Requires `b > 0` and `b` representable in a limb; negative
    /// divisors fail with [`Error::NegativeValue`] (an asymmetry with
    /// [`Mpi::div_rem_int`] kept from the classic MPI interface).
    pub fn mod_int(&self, b: i64) -> Result<Limb, Error> {
        if b == 0 {
            return Err(Error::DivisionByZero);
        }
        if b < 0 {
            return Err(Error::NegativeValue);
        }
        let b = Limb::try_from(b).map_err(|_| Error::BadInput)?;

        if b == 1 {
            return Ok(0);
        }
        if b == 2 {
            return Ok(self.limbs.first().map_or(0, |&l| l & 1));
        }

        let h = BITS / 2;
        let mut y: Limb = 0;
        for i in (0..self.used()).rev() {
            let x = self.limbs[i];

            y = (y << h) | (x >> h);
            y -= (y / b) * b;

            y = (y << h) | ((x << h) >> h);
            y -= (y / b) * b;
        }

        // A negative value leaves a residue on the wrong side of zero.
        if self.s < 0 && y != 0 {
            y = b - y;
        }

        Ok(y)
    }
}
