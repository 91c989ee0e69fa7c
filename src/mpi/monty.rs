//! Montgomery multiplication and sliding-window modular exponentiation.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::limb::{Limb, BITS};
use crate::mpi::multiplication::mac_digit;
use crate::mpi::subtraction::sub2;
use crate::{Error, Mpi, EXP_WINDOW_SIZE};

/// `-N^(-1) mod 2^BITS` for odd N, by Hensel lifting: seed an inverse good
/// to four bits, then double the precision with `x <- x*(2 - N[0]*x)` until
/// the full limb is covered.
pub(crate) fn inv_limb(n: &Mpi) -> Limb {
    let m0 = n.limbs[0];

    let mut x = m0;
    x = x.wrapping_add((m0.wrapping_add(2) & 4) << 1);

    let mut i = BITS;
    while i >= 8 {
        x = x.wrapping_mul((2 as Limb).wrapping_sub(m0.wrapping_mul(x)));
        i /= 2;
    }

    x.wrapping_neg()
}

/// Accumulates `a * b * R^(-1)` into the scratch `t` (HAC 14.36). Reads
/// only; the caller folds `t` back into the output with [`mont_finish`].
fn mont_accumulate(a: &[Limb], b: &[Limb], n: &Mpi, mm: Limb, t: &mut Mpi) {
    let nn = n.used();
    let m = b.len().min(nn);
    let b0 = b.first().copied().unwrap_or(0);

    for l in &mut t.limbs {
        *l = 0;
    }

    for i in 0..nn {
        // t = (t + u0*b + u1*n) / 2^BITS, the division being the one-limb
        // slide of the working window
        let u0 = a[i];
        let d = &mut t.limbs[i..];
        let u1 = d[0]
            .wrapping_add(u0.wrapping_mul(b0))
            .wrapping_mul(mm);

        mac_digit(d, &b[..m], u0);
        mac_digit(d, &n.limbs[..nn], u1);

        d[0] = u0;
        d[nn + 2] = 0;
    }
}

/// Copies the accumulated window back into `a` and subtracts N once if the
/// result reached it, and otherwise performs the same subtraction against the
/// scratch so the memory trace does not reveal which case ran.
fn mont_finish(a: &mut Mpi, n: &Mpi, t: &mut Mpi) {
    let nn = n.used();

    a.limbs[..nn + 1].copy_from_slice(&t.limbs[nn..2 * nn + 1]);
    for l in &mut a.limbs[nn + 1..] {
        *l = 0;
    }

    if a.cmp_abs(n) != Ordering::Less {
        sub2(&mut a.limbs, &n.limbs[..nn]);
    } else {
        sub2(&mut t.limbs, &a.limbs[..nn]);
    }
}

/// `a = a * b * R^(-1) mod N`. Requires `a.limbs` and the scratch `t` to be
/// grown to `N.used() + 1` and `2 * (N.used() + 1)` limbs respectively.
pub(crate) fn montmul(a: &mut Mpi, b: &Mpi, n: &Mpi, mm: Limb, t: &mut Mpi) {
    mont_accumulate(&a.limbs, &b.limbs, n, mm, t);
    mont_finish(a, n, t);
}

/// `a = a^2 * R^(-1) mod N`.
pub(crate) fn montsqr(a: &mut Mpi, n: &Mpi, mm: Limb, t: &mut Mpi) {
    mont_accumulate(&a.limbs, &a.limbs, n, mm, t);
    mont_finish(a, n, t);
}

/// `a = a * R^(-1) mod N`: a Montgomery multiplication by one.
pub(crate) fn montred(a: &mut Mpi, n: &Mpi, mm: Limb, t: &mut Mpi) {
    let one = Mpi::from(1u32);
    montmul(a, &one, n, mm, t);
}

/// `R^2 mod N` for `R = 2^(BITS * N.used())`.
fn compute_rr(n: &Mpi) -> Result<Mpi, Error> {
    let mut rr = Mpi::from(1u32);
    rr.shift_left(n.used() * 2 * BITS)?;
    rr.mod_mpi(n)
}

impl Mpi {
    /// Sliding-window modular exponentiation: `self^e mod n` (HAC 14.85).
    ///
    /// `n` must be positive and odd, `e` nonnegative. A negative base is
    /// reduced as its magnitude and the result reflected back into
    /// `[0, n)`.
    ///
    /// `cache`, when given, receives `R^2 mod n` on first use and saves its
    /// recomputation on later calls with the same modulus; pass a fresh
    /// [`Mpi`] and reuse it. The exponent drives which precomputed window
    /// power is multiplied in, but every window entry has the same limb
    /// width, and the final reduction of each Montgomery step performs a
    /// balancing subtraction, so the memory trace does not depend on the
    /// exponent bits beyond their count.
    pub fn exp_mod(&self, e: &Mpi, n: &Mpi, cache: Option<&mut Mpi>) -> Result<Mpi, Error> {
        if n.cmp_int(0) != Ordering::Greater || n.is_even() {
            return Err(Error::BadInput);
        }
        if e.cmp_int(0) == Ordering::Less {
            return Err(Error::BadInput);
        }

        let mm = inv_limb(n);
        let nn = n.used();

        let ebits = e.bits();
        let mut wsize = if ebits > 671 {
            6
        } else if ebits > 239 {
            5
        } else if ebits > 79 {
            4
        } else if ebits > 23 {
            3
        } else {
            1
        };
        if wsize > EXP_WINDOW_SIZE {
            wsize = EXP_WINDOW_SIZE;
        }

        let j = nn + 1;
        let mut x = Mpi::new();
        x.grow(j)?;
        let mut t = Mpi::new();
        t.grow(2 * j)?;

        // Work on |A| and reflect at the end.
        let neg = self.is_negative();
        let apos;
        let a = if neg {
            apos = self.abs();
            &apos
        } else {
            self
        };

        let rr_owned;
        let rr: &Mpi = match cache {
            Some(c) => {
                if c.limbs.is_empty() {
                    *c = compute_rr(n)?;
                }
                c
            }
            None => {
                rr_owned = compute_rr(n)?;
                &rr_owned
            }
        };

        let win = 1usize << wsize;
        let mut w: Vec<Mpi> = alloc::vec![Mpi::new(); win];

        // W[1] = A*R mod N
        if a.cmp(n) != Ordering::Less {
            w[1] = a.mod_mpi(n)?;
        } else {
            w[1].assign(a)?;
        }
        // growing after the assign matters: copying a zero releases the
        // buffer, and the Montgomery core reads a full N.used() + 1 window
        w[1].grow(j)?;
        montmul(&mut w[1], rr, n, mm, &mut t);

        // X = R mod N
        x.assign(rr)?;
        x.grow(j)?;
        montred(&mut x, n, mm, &mut t);

        if wsize > 1 {
            // W[2^(wsize-1)] by repeated squaring, the rest by stepping
            let j0 = 1usize << (wsize - 1);
            {
                let (lo, hi) = w.split_at_mut(j0);
                hi[0].assign(&lo[1])?;
                hi[0].grow(j)?;
                for _ in 0..wsize - 1 {
                    montsqr(&mut hi[0], n, mm, &mut t);
                }
            }
            for k in j0 + 1..win {
                let (lo, hi) = w.split_at_mut(k);
                hi[0].assign(&lo[k - 1])?;
                hi[0].grow(j)?;
                montmul(&mut hi[0], &lo[1], n, mm, &mut t);
            }
        }

        let mut nblimbs = e.used();
        let mut bufsize = 0;
        let mut nbits = 0;
        let mut wbits = 0usize;
        let mut state = 0;

        loop {
            if bufsize == 0 {
                if nblimbs == 0 {
                    break;
                }
                nblimbs -= 1;
                bufsize = BITS;
            }
            bufsize -= 1;

            let ei = ((e.limbs[nblimbs] >> bufsize) & 1) as usize;

            // skip leading zeros
            if ei == 0 && state == 0 {
                continue;
            }

            if ei == 0 && state == 1 {
                // out of a window, just square
                montsqr(&mut x, n, mm, &mut t);
                continue;
            }

            // collect the bit into the current window
            state = 2;
            nbits += 1;
            wbits |= ei << (wsize - nbits);

            if nbits == wsize {
                for _ in 0..wsize {
                    montsqr(&mut x, n, mm, &mut t);
                }
                montmul(&mut x, &w[wbits], n, mm, &mut t);

                state = 1;
                nbits = 0;
                wbits = 0;
            }
        }

        // flush a partial window one bit at a time
        for _ in 0..nbits {
            montsqr(&mut x, n, mm, &mut t);

            wbits <<= 1;
            if wbits & (1 << wsize) != 0 {
                montmul(&mut x, &w[1], n, mm, &mut t);
            }
        }

        // drop the lingering R factor
        montred(&mut x, n, mm, &mut t);

        if neg && !x.is_zero() {
            x.s = -1;
            let mut r = n.clone();
            r.add_assign_mpi(&x)?;
            x = r;
        }

        Ok(x)
    }
}
