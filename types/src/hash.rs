//! 256-bit hash type used for transaction, ledger and set identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitXor, BitXorAssign};
use std::str::FromStr;

use crate::error::LumenError;

/// A 32-byte hash.
///
/// Ordering is lexicographic over the raw bytes, i.e. the hash compared as an
/// unsigned big-endian 256-bit integer. Canonical transaction-set order relies
/// on exactly this comparison.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash256(#[serde(with = "crate::serde_hex")] [u8; 32]);

impl Hash256 {
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, LumenError> {
        crate::serde_hex::decode(s).map(Self)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First four bytes in hex, for log lines.
    pub fn abbrev(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.abbrev())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Hash256 {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl BitXorAssign for Hash256 {
    fn bitxor_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a ^= b;
        }
    }
}

impl BitXor for Hash256 {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

/// Returns true if `(l ^ x) < (r ^ x)`, comparing bytewise as unsigned values.
pub fn less_than_xored(l: &Hash256, r: &Hash256, x: &Hash256) -> bool {
    (*l ^ *x) < (*r ^ *x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_with_self_is_zero() {
        let mut h1 = Hash256::new([0xff; 32]);
        h1 ^= Hash256::new([0xff; 32]);
        assert!(h1.is_zero());

        let result = Hash256::new([0x0f; 32]) ^ Hash256::new([0xf0; 32]);
        assert_eq!(result.as_bytes(), &[0xff; 32]);
    }

    #[test]
    fn less_than_xored_flips_with_mask() {
        let x = Hash256::new([0x80; 32]);
        let l = Hash256::new([0x00; 32]); // l ^ x = 0x80..
        let r = Hash256::new([0x01; 32]); // r ^ x = 0x81..
        assert!(less_than_xored(&l, &r, &x));
        assert!(!less_than_xored(&r, &l, &x));

        // 0xff mask inverts the plain order
        let inv = Hash256::new([0xff; 32]);
        assert!(l < r);
        assert!(!less_than_xored(&l, &r, &inv));
    }

    #[test]
    fn ordering_is_unsigned_bytewise() {
        let mut low = [0u8; 32];
        low[0] = 0x7f;
        let mut high = [0u8; 32];
        high[0] = 0x80;
        assert!(Hash256::new(low) < Hash256::new(high));
    }

    #[test]
    fn hex_roundtrip_and_errors() {
        let h = Hash256::new([0xab; 32]);
        assert_eq!(Hash256::from_hex(&h.to_hex()).unwrap(), h);
        assert!(matches!(
            Hash256::from_hex("abcd"),
            Err(LumenError::InvalidLength { expected: 32, actual: 2 })
        ));
        assert!(matches!(Hash256::from_hex("zz"), Err(LumenError::InvalidHex(_))));
    }

    #[test]
    fn json_uses_hex_and_bincode_uses_raw_bytes() {
        let h = Hash256::new([0x01; 32]);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        assert_eq!(serde_json::from_str::<Hash256>(&json).unwrap(), h);

        let bin = bincode::serialize(&h).unwrap();
        assert_eq!(bin.len(), 32);
        assert_eq!(bincode::deserialize::<Hash256>(&bin).unwrap(), h);
    }
}
