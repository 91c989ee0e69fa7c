//! Probabilistic primality testing and prime generation.
#![cfg(feature = "prime")]
#![cfg_attr(docsrs, doc(cfg(feature = "prime")))]

use core::cmp::Ordering;

use rand::RngCore;

use crate::limb::{bits_to_limbs, BYTES};
use crate::{Error, Mpi};

/// All odd primes up to 1000. Trial division against these removes the bulk
/// of composite candidates before any Miller-Rabin round runs.
const SMALL_PRIMES: [i64; 167] = [
      3,    5,    7,   11,   13,   17,   19,   23,
     29,   31,   37,   41,   43,   47,   53,   59,
     61,   67,   71,   73,   79,   83,   89,   97,
    101,  103,  107,  109,  113,  127,  131,  137,
    139,  149,  151,  157,  163,  167,  173,  179,
    181,  191,  193,  197,  199,  211,  223,  227,
    229,  233,  239,  241,  251,  257,  263,  269,
    271,  277,  281,  283,  293,  307,  311,  313,
    317,  331,  337,  347,  349,  353,  359,  367,
    373,  379,  383,  389,  397,  401,  409,  419,
    421,  431,  433,  439,  443,  449,  457,  461,
    463,  467,  479,  487,  491,  499,  503,  509,
    521,  523,  541,  547,  557,  563,  569,  571,
    577,  587,  593,  599,  601,  607,  613,  617,
    619,  631,  641,  643,  647,  653,  659,  661,
    673,  677,  683,  691,  701,  709,  719,  727,
    733,  739,  743,  751,  757,  761,  769,  773,
    787,  797,  809,  811,  821,  823,  827,  829,
    839,  853,  857,  859,  863,  877,  881,  883,
    887,  907,  911,  919,  929,  937,  941,  947,
    953,  967,  971,  977,  983,  991,  997,
];

#[derive(PartialEq)]
enum Sieve {
    /// Equal to one of the trial primes.
    Prime,
    /// Even, or divisible by a trial prime.
    Composite,
    /// No small factor found; needs Miller-Rabin.
    Inconclusive,
}

/// Trial division of a positive odd candidate against [`SMALL_PRIMES`].
fn check_small_factors(x: &Mpi) -> Result<Sieve, Error> {
    if x.is_even() {
        return Ok(Sieve::Composite);
    }

    for &p in SMALL_PRIMES.iter() {
        if x.cmp_int(p) != Ordering::Greater {
            return Ok(Sieve::Prime);
        }
        if x.mod_int(p)? == 0 {
            return Ok(Sieve::Composite);
        }
    }

    Ok(Sieve::Inconclusive)
}

/// Miller-Rabin rounds for a positive odd `x` with no small factors
/// (HAC 4.24). Returns `false` as soon as a witness proves `x` composite.
///
/// The round count follows HAC table 4.4: larger candidates need fewer
/// rounds for the same error bound.
fn miller_rabin<R: RngCore + ?Sized>(x: &Mpi, rng: &mut R) -> Result<bool, Error> {
    // W = X - 1 = R * 2^s with R odd
    let mut w = x.clone();
    w.sub_assign_int(1)?;
    let s = w.lsb();
    let mut r = w.clone();
    r.shift_right(s);

    let xbits = x.bits();
    let rounds = if xbits >= 1300 {
        2
    } else if xbits >= 850 {
        3
    } else if xbits >= 650 {
        4
    } else if xbits >= 350 {
        8
    } else if xbits >= 250 {
        12
    } else if xbits >= 150 {
        18
    } else {
        27
    };

    let mut rr = Mpi::new();
    let mut a = Mpi::new();

    for _ in 0..rounds {
        // pick a random base 1 < A < X - 1
        a.fill_random(x.used() * BYTES, rng)?;

        if a.cmp(&w) != Ordering::Less {
            let j = a.bits() - w.bits();
            a.shift_right(j + 1);
        }
        a.grow(1)?;
        a.limbs[0] |= 3;

        // A = A^R mod X
        let mut y = a.exp_mod(&r, x, Some(&mut rr))?;

        if y.cmp(&w) == Ordering::Equal || y.cmp_int(1) == Ordering::Equal {
            continue;
        }

        let mut j = 1;
        while j < s && y.cmp(&w) != Ordering::Equal {
            y = y.mul_mpi(&y)?.mod_mpi(x)?;

            if y.cmp_int(1) == Ordering::Equal {
                break;
            }
            j += 1;
        }

        // composite unless the squaring chain hit X - 1
        if y.cmp(&w) != Ordering::Equal || y.cmp_int(1) == Ordering::Equal {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Probable-prime test: small-factor sieve, then Miller-Rabin on `|x|`.
///
/// Returns `Ok(false)` for composites (and for 0 and 1), `Ok(true)` when
/// `x` is prime or passes every Miller-Rabin round.
pub fn is_prime<R: RngCore + ?Sized>(x: &Mpi, rng: &mut R) -> Result<bool, Error> {
    let xx = x.abs();

    if xx.cmp_int(0) == Ordering::Equal || xx.cmp_int(1) == Ordering::Equal {
        return Ok(false);
    }
    if xx.cmp_int(2) == Ordering::Equal {
        return Ok(true);
    }

    match check_small_factors(&xx)? {
        Sieve::Prime => Ok(true),
        Sieve::Composite => Ok(false),
        Sieve::Inconclusive => miller_rabin(&xx, rng),
    }
}

/// Generates a random probable prime with exactly `nbits` bits,
/// `3 <= nbits <=` [`MAX_BITS`](crate::MAX_BITS).
///
/// The candidate gets its top bit forced high and both low bits set, then
/// walks upward in steps of 2 until [`is_prime`] accepts it. With `safe`
/// set, the result X additionally has (X-1)/2 prime: candidates are aligned
/// to X = 3 (mod 4) and X = 2 (mod 3), necessary conditions for a safe
/// prime, and X steps by 12 while Y = (X-1)/2 steps by 6, preserving both
/// residues.
pub fn gen_prime<R: RngCore + ?Sized>(
    nbits: usize,
    safe: bool,
    rng: &mut R,
) -> Result<Mpi, Error> {
    if nbits < 3 || nbits > crate::MAX_BITS {
        return Err(Error::BadInput);
    }

    let n = bits_to_limbs(nbits);

    let mut x = Mpi::new();
    x.fill_random(n * BYTES, rng)?;

    let k = x.bits();
    if k < nbits {
        x.shift_left(nbits - k)?;
    }
    if k > nbits {
        x.shift_right(k - nbits);
    }

    x.grow(1)?;
    x.limbs[0] |= 3;

    if !safe {
        while !is_prime(&x, rng)? {
            x.add_assign_int(2)?;
        }
    } else {
        // A necessary condition for Y and X = 2Y + 1 to both be prime is
        // X = 2 mod 3; make sure of it while keeping X = 3 mod 4.
        match x.mod_int(3)? {
            0 => x.add_assign_int(8)?,
            1 => x.add_assign_int(4)?,
            _ => {}
        }

        let mut y = x.clone();
        y.shift_right(1);

        loop {
            if is_prime(&x, rng)? && is_prime(&y, rng)? {
                break;
            }
            x.add_assign_int(12)?;
            y.add_assign_int(6)?;
        }
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn small_values() {
        let mut rng = XorShiftRng::from_seed([17u8; 16]);
        for (v, prime) in [
            (0i64, false),
            (1, false),
            (2, true),
            (3, true),
            (4, false),
            (9, false),
            (17, true),
            (561, false), // Carmichael
            (997, true),
            (1001, false),
            (7919, true),
        ] {
            assert_eq!(
                is_prime(&Mpi::from(v), &mut rng).unwrap(),
                prime,
                "is_prime({})",
                v
            );
        }

        // the sign is ignored
        assert!(is_prime(&Mpi::from(-13i64), &mut rng).unwrap());
    }

    #[test]
    fn sieve_catches_small_factors() {
        assert!(check_small_factors(&Mpi::from(997u32 * 3)).unwrap() == Sieve::Composite);
        assert!(check_small_factors(&Mpi::from(104729u32)).unwrap() == Sieve::Inconclusive);
        assert!(check_small_factors(&Mpi::from(104731u32)).unwrap() == Sieve::Composite);
    }

    #[test]
    fn mersenne_exponent_521() {
        // 2^521 - 1 is a Mersenne prime
        let mut rng = XorShiftRng::from_seed([18u8; 16]);
        let mut m = Mpi::from(1u32);
        m.shift_left(521).unwrap();
        m.sub_assign_int(1).unwrap();
        assert!(is_prime(&m, &mut rng).unwrap());

        // 2^523 - 1 is not
        let mut c = Mpi::from(1u32);
        c.shift_left(523).unwrap();
        c.sub_assign_int(1).unwrap();
        assert!(!is_prime(&c, &mut rng).unwrap());
    }

    #[test]
    fn generated_prime_shape() {
        let mut rng = XorShiftRng::from_seed([19u8; 16]);
        let p = gen_prime(128, false, &mut rng).unwrap();

        assert_eq!(p.bits(), 128);
        assert!(p.is_odd());
        assert!(is_prime(&p, &mut rng).unwrap());
    }

    #[test]
    fn generated_safe_prime_shape() {
        let mut rng = XorShiftRng::from_seed([20u8; 16]);
        let p = gen_prime(80, true, &mut rng).unwrap();

        assert!(is_prime(&p, &mut rng).unwrap());
        assert_eq!(p.mod_int(4).unwrap(), 3);

        let mut y = p.clone();
        y.sub_assign_int(1).unwrap();
        y.shift_right(1);
        assert!(is_prime(&y, &mut rng).unwrap());
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        let mut rng = XorShiftRng::from_seed([21u8; 16]);
        assert_eq!(gen_prime(2, false, &mut rng), Err(Error::BadInput));
        assert_eq!(
            gen_prime(crate::MAX_BITS + 1, false, &mut rng),
            Err(Error::BadInput)
        );
    }
}
