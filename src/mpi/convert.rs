//! ASCII and big-endian byte-string import/export.

use alloc::string::String;
use alloc::vec::Vec;

use crate::limb::{bytes_to_limbs, Limb, BYTES};
use crate::{Error, Mpi};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn digit_val(radix: u32, c: u8) -> Result<Limb, Error> {
    let d = match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        _ => return Err(Error::InvalidCharacter),
    };
    if d as u32 >= radix {
        return Err(Error::InvalidCharacter);
    }
    Ok(d as Limb)
}

impl Mpi {
    /// Parses an ASCII string in the given radix (2 to 16), with an
    /// optional leading `-`. Hex digits are accepted in either case.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Mpi, Error> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadInput);
        }

        let (neg, digits) = match s.as_bytes() {
            [b'-', rest @ ..] => (true, rest),
            rest => (false, rest),
        };

        let mut x = Mpi::new();

        if radix == 16 {
            // Two hex digits per byte, packed straight from the tail.
            x.grow(bytes_to_limbs((digits.len() + 1) / 2))?;
            for (j, &c) in digits.iter().rev().enumerate() {
                let d = digit_val(radix, c)?;
                x.limbs[j / (2 * BYTES)] |= d << ((j % (2 * BYTES)) * 4);
            }
        } else {
            for &c in digits {
                let d = digit_val(radix, c)?;
                x = x.mul_int(radix as Limb)?;
                x.add_assign_int(d as i64)?;
            }
        }

        if neg && !x.is_zero() {
            x.s = -1;
        }
        Ok(x)
    }

    /// Writes the value in ASCII in the given radix (2 to 16, digits
    /// uppercase) into `buf`, returning the number of bytes written.
    ///
    /// On a short buffer no bytes are written and
    /// [`Error::BufferTooSmall`] carries a sufficient size, computed from
    /// the bit length the way the classic MPI interface does (a small
    /// overestimate).
    pub fn write_string(&self, radix: u32, buf: &mut [u8]) -> Result<usize, Error> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadInput);
        }

        let mut n = self.bits();
        if radix >= 4 {
            n >>= 1;
        }
        if radix >= 16 {
            n >>= 1;
        }
        n += 3;

        if buf.len() < n {
            return Err(Error::BufferTooSmall { needed: n });
        }

        let mut p = 0;
        if self.is_negative() {
            buf[p] = b'-';
            p += 1;
        }

        if radix == 16 {
            let mut leading = true;
            for i in (0..self.used()).rev() {
                for j in (0..BYTES).rev() {
                    let c = (self.limbs[i] >> (j * 8)) as u8;
                    if c == 0 && leading {
                        continue;
                    }
                    buf[p] = DIGITS[(c >> 4) as usize];
                    buf[p + 1] = DIGITS[(c & 0xF) as usize];
                    p += 2;
                    leading = false;
                }
            }
            if leading {
                buf[p] = b'0';
                p += 1;
            } else if buf[if self.is_negative() { 1 } else { 0 }] == b'0' {
                // drop one leading zero nibble from the top byte
                let start = if self.is_negative() { 1 } else { 0 };
                buf.copy_within(start + 1..p, start);
                p -= 1;
            }
        } else {
            let mut t = self.abs();
            let mut digits = Vec::new();
            loop {
                let r = t.mod_int(radix as i64)?;
                (t, _) = t.div_rem_int(radix as i64)?;
                digits.push(DIGITS[r as usize]);
                if t.is_zero() {
                    break;
                }
            }
            for &d in digits.iter().rev() {
                buf[p] = d;
                p += 1;
            }
        }

        Ok(p)
    }

    /// [`Mpi::write_string`] into a freshly allocated `String`.
    pub fn to_string_radix(&self, radix: u32) -> Result<String, Error> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadInput);
        }

        let mut n = self.bits();
        if radix >= 4 {
            n >>= 1;
        }
        if radix >= 16 {
            n >>= 1;
        }
        // radix 2 and 3 need every bit spelled out
        let mut buf = alloc::vec![0u8; self.bits() + n + 3];
        let written = self.write_string(radix, &mut buf)?;
        buf.truncate(written);
        Ok(String::from_utf8(buf).expect("radix digits are ASCII"))
    }

    /// Imports an unsigned big-endian byte string. Leading zero bytes are
    /// skipped when sizing the limb buffer.
    pub fn from_bytes_be(buf: &[u8]) -> Result<Mpi, Error> {
        let skip = buf.iter().position(|&b| b != 0).unwrap_or(buf.len());
        let buf = &buf[skip..];

        let mut x = Mpi::new();
        x.grow(bytes_to_limbs(buf.len()))?;

        for (j, &b) in buf.iter().rev().enumerate() {
            x.limbs[j / BYTES] |= (b as Limb) << ((j % BYTES) * 8);
        }

        Ok(x)
    }

    /// Exports the magnitude as an unsigned big-endian byte string,
    /// left-padded with zeros to fill `buf`.
    ///
    /// Fails with [`Error::BufferTooSmall`] when `buf` is shorter than
    /// [`Mpi::byte_len`].
    pub fn to_bytes_be(&self, buf: &mut [u8]) -> Result<(), Error> {
        let n = self.byte_len();
        if buf.len() < n {
            return Err(Error::BufferTooSmall { needed: n });
        }

        buf.fill(0);
        let len = buf.len();
        for j in 0..n {
            buf[len - 1 - j] = (self.limbs[j / BYTES] >> ((j % BYTES) * 8)) as u8;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::RandMpi;

    #[test]
    fn hex_to_decimal() {
        let x = Mpi::from_str_radix("-1A", 16).unwrap();
        assert_eq!(x.to_string_radix(10).unwrap(), "-26");
    }

    #[test]
    fn zero_renders_as_one_digit() {
        for radix in [2u32, 8, 10, 16] {
            assert_eq!(Mpi::new().to_string_radix(radix).unwrap(), "0");
        }
        assert_eq!(Mpi::from_str_radix("", 10).unwrap(), Mpi::new());
        assert_eq!(Mpi::from_str_radix("-0", 10).unwrap().sign(), crate::Sign::Plus);
    }

    #[test]
    fn rejects_bad_radix_and_digits() {
        assert_eq!(Mpi::from_str_radix("1", 17), Err(Error::BadInput));
        assert_eq!(Mpi::from_str_radix("1", 1), Err(Error::BadInput));
        assert_eq!(Mpi::from_str_radix("12G", 16), Err(Error::InvalidCharacter));
        assert_eq!(Mpi::from_str_radix("129", 8), Err(Error::InvalidCharacter));
        assert_eq!(Mpi::new().write_string(1, &mut [0u8; 8]), Err(Error::BadInput));
    }

    #[test]
    fn short_buffer_reports_needed_size() {
        let x = Mpi::from_str_radix("FFFFFFFFFFFFFFFF", 16).unwrap();
        match x.write_string(16, &mut [0u8; 4]) {
            Err(Error::BufferTooSmall { needed }) => assert!(needed >= 16),
            other => panic!("expected BufferTooSmall, got {:?}", other),
        }
        match x.to_bytes_be(&mut [0u8; 4]) {
            Err(Error::BufferTooSmall { needed }) => assert_eq!(needed, 8),
            other => panic!("expected BufferTooSmall, got {:?}", other),
        }
    }

    #[test]
    fn string_round_trips() {
        let mut rng = XorShiftRng::from_seed([5u8; 16]);
        for bits in [1u64, 8, 64, 65, 192, 521] {
            let mut x = rng.gen_mpi(bits);
            if bits % 2 == 0 {
                x.s = -1;
            }
            x.normalize();
            for radix in [2u32, 8, 10, 16] {
                let s = x.to_string_radix(radix).unwrap();
                assert_eq!(Mpi::from_str_radix(&s, radix).unwrap(), x, "radix {}", radix);
            }
        }
    }

    #[test]
    fn mixed_case_hex() {
        assert_eq!(
            Mpi::from_str_radix("aBcDeF", 16).unwrap(),
            Mpi::from(0xABCDEFu32)
        );
    }

    #[test]
    fn binary_round_trips() {
        let mut rng = XorShiftRng::from_seed([9u8; 16]);
        for bits in [1u64, 7, 64, 100, 256] {
            let x = rng.gen_mpi(bits);
            let n = x.byte_len();

            let mut exact = alloc::vec![0u8; n];
            x.to_bytes_be(&mut exact).unwrap();
            assert_eq!(Mpi::from_bytes_be(&exact).unwrap(), x);

            // padded output must round-trip too
            let mut padded = alloc::vec![0u8; n + 5];
            x.to_bytes_be(&mut padded).unwrap();
            assert_eq!(&padded[..5], &[0u8; 5]);
            assert_eq!(Mpi::from_bytes_be(&padded).unwrap(), x);
        }

        // the zero value writes only padding
        let mut buf = [0xAAu8; 3];
        Mpi::new().to_bytes_be(&mut buf).unwrap();
        assert_eq!(buf, [0u8; 3]);
        assert!(Mpi::from_bytes_be(&[]).unwrap().is_zero());
    }
}
