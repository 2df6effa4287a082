//! Hexadecimal encoding of integer sequences, handy for logging binary
//! patterns and corpora.
//!
//! Each value is written as `2 * size_of::<T>()` upper-case digits, most
//! significant first. Decoding accepts either case and reads the same number
//! of digits per value, so the element type of the output decides how the
//! input is split.

use thiserror::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("non-hex character {found:?} at position {position}")]
    NonHexInput { position: usize, found: char },

    #[error("not enough input: {needed} hex digits needed, {remaining} remaining")]
    NotEnoughInput { needed: usize, remaining: usize },
}

pub type HexResult<T> = Result<T, HexError>;

/// Integer types the codec can read and write.
pub trait HexInt: Copy {
    /// Hex digits per value.
    const DIGITS: usize;

    fn to_bits(self) -> u128;
    /// Keeps the low `4 * DIGITS` bits.
    fn from_bits(bits: u128) -> Self;
}

macro_rules! hex_int {
    ($($t:ty => $u:ty),*) => {
        $(impl HexInt for $t {
            const DIGITS: usize = 2 * size_of::<$t>();

            #[inline]
            fn to_bits(self) -> u128 {
                self as $u as u128
            }

            #[inline]
            fn from_bits(bits: u128) -> Self {
                bits as $u as $t
            }
        })*
    };
}

hex_int!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize
);

/// Appends the hex digits of every value in `input` to `out`.
pub fn hex_into<T: HexInt, E: Extend<char>>(input: &[T], out: &mut E) {
    for &value in input {
        let bits = value.to_bits();
        out.extend((0..T::DIGITS).rev().map(|nibble| {
            let digit = (bits >> (4 * nibble)) & 0x0F;
            HEX_DIGITS[digit as usize] as char
        }));
    }
}

pub fn hex<T: HexInt>(input: &[T]) -> String {
    let mut out = String::with_capacity(input.len() * T::DIGITS);
    hex_into(input, &mut out);
    out
}

fn digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Decodes `input` into values of type `T`, appending each completed value to
/// `out`. On error, values decoded before the failing one stay in `out`.
pub fn unhex_into<T: HexInt>(input: &str, out: &mut Vec<T>) -> HexResult<()> {
    let bytes = input.as_bytes();
    out.reserve(bytes.len() / T::DIGITS);

    let mut pos = 0;
    while pos < bytes.len() {
        let remaining = bytes.len() - pos;
        let mut bits = 0u128;

        for offset in 0..T::DIGITS {
            let Some(&c) = bytes.get(pos + offset) else {
                return Err(HexError::NotEnoughInput {
                    needed: T::DIGITS,
                    remaining,
                });
            };
            let Some(value) = digit_value(c) else {
                let found = input[pos + offset..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(HexError::NonHexInput {
                    position: pos + offset,
                    found,
                });
            };
            bits = (bits << 4) | value as u128;
        }

        out.push(T::from_bits(bits));
        pos += T::DIGITS;
    }

    Ok(())
}

pub fn unhex<T: HexInt>(input: &str) -> HexResult<Vec<T>> {
    let mut out = Vec::new();
    unhex_into(input, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_upper_case_fixed_width() {
        assert_eq!(hex(b"ABC"), "414243");
        assert_eq!(hex(&[0x0Fu8, 0xA0]), "0FA0");
        assert_eq!(hex(&[0x1234u16, 0x00FF]), "123400FF");
        assert_eq!(hex(&[-1i8, -128]), "FF80");
        assert_eq!(hex(&[-2i32]), "FFFFFFFE");
        assert_eq!(hex::<u8>(&[]), "");
    }

    #[test]
    fn hex_into_appends() {
        let mut out = String::from("pattern=");
        hex_into(&[0xDEu8, 0xAD], &mut out);
        assert_eq!(out, "pattern=DEAD");

        let mut chars: Vec<char> = Vec::new();
        hex_into(&[0xBEEFu16], &mut chars);
        assert_eq!(chars, vec!['B', 'E', 'E', 'F']);
    }

    #[test]
    fn decodes_either_case() {
        assert_eq!(unhex::<u8>("414243"), Ok(b"ABC".to_vec()));
        assert_eq!(unhex::<u8>("deADbeEF"), Ok(vec![0xDE, 0xAD, 0xBE, 0xEF]));
        assert_eq!(unhex::<u16>("deADbeEF"), Ok(vec![0xDEAD, 0xBEEF]));
        assert_eq!(unhex::<i8>("FF80"), Ok(vec![-1, -128]));
        assert_eq!(unhex::<u32>(""), Ok(vec![]));
    }

    #[test]
    fn decode_reverses_encode() {
        let values = [0u64, 1, u64::MAX, 0x0123_4567_89AB_CDEF];
        assert_eq!(unhex::<u64>(&hex(&values)), Ok(values.to_vec()));

        let values = [i16::MIN, -1, 0, i16::MAX];
        assert_eq!(unhex::<i16>(&hex(&values)), Ok(values.to_vec()));
    }

    #[test]
    fn rejects_non_hex_input() {
        assert_eq!(
            unhex::<u8>("01z3"),
            Err(HexError::NonHexInput {
                position: 2,
                found: 'z'
            })
        );
        assert_eq!(
            unhex::<u8>("0é"),
            Err(HexError::NonHexInput {
                position: 1,
                found: 'é'
            })
        );
    }

    #[test]
    fn rejects_truncated_input() {
        assert_eq!(
            unhex::<u8>("012"),
            Err(HexError::NotEnoughInput {
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(
            unhex::<u32>("0102030405"),
            Err(HexError::NotEnoughInput {
                needed: 8,
                remaining: 2
            })
        );
    }

    #[test]
    fn keeps_values_decoded_before_failure() {
        let mut out = vec![7u8];
        let err = unhex_into("0A0B1", &mut out).unwrap_err();
        assert_eq!(out, vec![7, 0x0A, 0x0B]);
        assert_eq!(
            err.to_string(),
            "not enough input: 2 hex digits needed, 1 remaining"
        );
    }

    #[test]
    fn error_messages() {
        let err = unhex::<u8>("0g").unwrap_err();
        assert_eq!(err.to_string(), "non-hex character 'g' at position 1");
    }
}
