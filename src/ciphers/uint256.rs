//! Fixed-width 256-bit unsigned integer used as a key/block container by the
//! cipher code. Only storage, ordering and formatting are provided.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder};
use itertools::Itertools;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

const WORDS: usize = 4;
pub const BYTES: usize = 32;
const HEX_DIGITS: usize = BYTES * 2;
/// Largest power of ten that fits in a `u64`.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseU256Error {
    #[error("empty hex string")]
    Empty,
    #[error("{0} hex digits do not fit in 256 bits")]
    TooLong(usize),
    #[error("invalid hex: {0}")]
    InvalidDigit(#[from] hex::FromHexError),
}

/// Little-endian words: `words[0]` is the least significant.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256 {
    words: [u64; WORDS],
}

impl U256 {
    pub const ZERO: Self = U256 { words: [0; WORDS] };
    pub const MAX: Self = U256 {
        words: [u64::MAX; WORDS],
    };

    pub const fn from_u64(value: u64) -> Self {
        U256 {
            words: [value, 0, 0, 0],
        }
    }

    pub const fn from_words(words: [u64; WORDS]) -> Self {
        U256 { words }
    }

    pub const fn words(&self) -> [u64; WORDS] {
        self.words
    }

    pub fn from_be_bytes(bytes: [u8; BYTES]) -> Self {
        let mut words = [0u64; WORDS];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            words[WORDS - 1 - i] = BigEndian::read_u64(chunk);
        }
        U256 { words }
    }

    pub fn to_be_bytes(&self) -> [u8; BYTES] {
        let mut out = [0u8; BYTES];
        for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
            BigEndian::write_u64(chunk, self.words[WORDS - 1 - i]);
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of significant bits; zero for `U256::ZERO`.
    pub fn bits(&self) -> u32 {
        match self.words.iter().rposition(|&w| w != 0) {
            Some(i) => 64 * i as u32 + (64 - self.words[i].leading_zeros()),
            None => 0,
        }
    }

    /// All 64 hex digits, big-endian, no prefix.
    pub fn to_hex_padded(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    fn hex_digits(&self, upper: bool) -> String {
        let mut words = self.words.iter().rev().skip_while(|&&w| w == 0);
        let Some(first) = words.next() else {
            return "0".to_string();
        };
        let mut digits = if upper {
            format!("{first:X}")
        } else {
            format!("{first:x}")
        };
        for w in words {
            if upper {
                digits.push_str(&format!("{w:016X}"));
            } else {
                digits.push_str(&format!("{w:016x}"));
            }
        }
        digits
    }

    fn decimal_digits(&self) -> String {
        let mut words = self.words;
        let mut chunks = Vec::new();
        loop {
            chunks.push(div_rem_in_place(&mut words, DECIMAL_CHUNK));
            if words.iter().all(|&w| w == 0) {
                break;
            }
        }
        // the most significant chunk is unpadded, the rest carry leading zeros
        let mut chunks = chunks.into_iter().rev();
        let head = chunks.next().unwrap_or(0).to_string();
        let tail = chunks
            .map(|c| format!("{c:0width$}", width = DECIMAL_CHUNK_DIGITS))
            .join("");
        head + &tail
    }
}

/// Divides the little-endian `words` by `divisor` in place, returning the remainder.
fn div_rem_in_place(words: &mut [u64; WORDS], divisor: u64) -> u64 {
    let divisor = divisor as u128;
    let mut rem: u128 = 0;
    for w in words.iter_mut().rev() {
        let cur = (rem << 64) | *w as u128;
        *w = (cur / divisor) as u64;
        rem = cur % divisor;
    }
    rem as u64
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::from_u64(value)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256 {
            words: [value as u64, (value >> 64) as u64, 0, 0],
        }
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.words.iter().rev().cmp(other.words.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.decimal_digits())
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(false))
    }
}

impl fmt::UpperHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(true))
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({self:#x})")
    }
}

impl FromStr for U256 {
    type Err = ParseU256Error;

    /// Parses hex digits, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(ParseU256Error::Empty);
        }
        if digits.len() > HEX_DIGITS {
            return Err(ParseU256Error::TooLong(digits.len()));
        }
        let padded = format!("{digits:0>width$}", width = HEX_DIGITS);
        let mut bytes = [0u8; BYTES];
        hex::decode_to_slice(padded, &mut bytes)?;
        Ok(U256::from_be_bytes(bytes))
    }
}

impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{self:#x}"))
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_as_single_digit() {
        assert_eq!(U256::ZERO.to_string(), "0");
        assert_eq!(format!("{:x}", U256::ZERO), "0");
        assert_eq!(format!("{:#x}", U256::ZERO), "0x0");
        assert!(U256::ZERO.is_zero());
        assert_eq!(U256::default(), U256::ZERO);
    }

    #[test]
    fn decimal_formatting() {
        assert_eq!(U256::from_u64(42).to_string(), "42");
        assert_eq!(U256::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(
            U256::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
        assert_eq!(
            U256::MAX.to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        // 10^19 sits exactly on a chunk boundary
        assert_eq!(
            U256::from(10_000_000_000_000_000_000u128).to_string(),
            "10000000000000000000"
        );
    }

    #[test]
    fn hex_formatting_skips_leading_zero_words() {
        let value = U256::from_words([0x1, 0x0, 0xab, 0x0]);
        assert_eq!(
            format!("{value:x}"),
            "ab00000000000000000000000000000001"
        );
        assert_eq!(
            format!("{value:#X}"),
            "0xAB00000000000000000000000000000001"
        );
        assert_eq!(format!("{:#x}", U256::from_u64(255)), "0xff");
        assert_eq!(format!("{:>6x}", U256::from_u64(255)), "    ff");
    }

    #[test]
    fn debug_uses_prefixed_hex() {
        assert_eq!(format!("{:?}", U256::from_u64(16)), "U256(0x10)");
    }

    #[test]
    fn byte_layout_is_big_endian() {
        let value = U256::from_u64(0x0102);
        let bytes = value.to_be_bytes();
        assert_eq!(bytes[BYTES - 2..], [0x01, 0x02]);
        assert!(bytes[..BYTES - 2].iter().all(|&b| b == 0));
        assert_eq!(U256::from_be_bytes(bytes), value);
        assert_eq!(value.to_hex_padded(), format!("{:0>64}", "102"));
    }

    #[test]
    fn ordering_starts_at_most_significant_word() {
        let low_heavy = U256::from_words([u64::MAX, 0, 0, 0]);
        let high_light = U256::from_words([0, 0, 0, 1]);
        assert!(low_heavy < high_light);
        assert!(U256::ZERO < U256::from_u64(1));
        assert_eq!(U256::MAX.cmp(&U256::MAX), Ordering::Equal);
    }

    #[test]
    fn bit_length() {
        assert_eq!(U256::ZERO.bits(), 0);
        assert_eq!(U256::from_u64(1).bits(), 1);
        assert_eq!(U256::from(1u128 << 64).bits(), 65);
        assert_eq!(U256::MAX.bits(), 256);
    }

    #[test]
    fn parses_hex_with_and_without_prefix() {
        assert_eq!("0xff".parse::<U256>(), Ok(U256::from_u64(255)));
        assert_eq!("FF".parse::<U256>(), Ok(U256::from_u64(255)));
        assert_eq!("0X1".parse::<U256>(), Ok(U256::from_u64(1)));
        assert_eq!("f".repeat(64).parse::<U256>(), Ok(U256::MAX));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!("0x".parse::<U256>(), Err(ParseU256Error::Empty));
        assert_eq!(
            "1".repeat(65).parse::<U256>(),
            Err(ParseU256Error::TooLong(65))
        );
        assert!(matches!(
            "0xzz".parse::<U256>(),
            Err(ParseU256Error::InvalidDigit(_))
        ));
    }

    #[test]
    fn serde_uses_hex_string() {
        let value = U256::from_u64(0xbeef);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"0xbeef\"");
        let back: U256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        assert!(serde_json::from_str::<U256>("\"0xnope\"").is_err());
    }
}
