use core::cmp::Ordering;

use crate::{Error, Mpi};

/// Greatest common divisor by the binary algorithm (HAC 14.54).
///
/// Signs are ignored; the result is the nonnegative gcd of the magnitudes,
/// with `gcd(0, b) = |b|` and `gcd(0, 0) = 0`.
///
/// The common power of two is pulled out first, after which every round
/// strips the remaining factors of two from each operand and replaces the
/// larger by half the difference, so only shifts and subtractions are used.
pub fn gcd(a: &Mpi, b: &Mpi) -> Result<Mpi, Error> {
    if a.is_zero() {
        return Ok(b.abs());
    }
    if b.is_zero() {
        return Ok(a.abs());
    }

    let mut ta = a.abs();
    let mut tb = b.abs();

    let lz = ta.lsb().min(tb.lsb());

    ta.shift_right(lz);
    tb.shift_right(lz);

    while ta.cmp_int(0) != Ordering::Equal {
        ta.shift_right(ta.lsb());
        tb.shift_right(tb.lsb());

        if ta.cmp(&tb) != Ordering::Less {
            ta.sub_abs_assign(&tb)?;
            ta.shift_right(1);
        } else {
            tb.sub_abs_assign(&ta)?;
            tb.shift_right(1);
        }
    }

    tb.shift_left(lz)?;
    Ok(tb)
}
