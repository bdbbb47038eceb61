//! Hex encoding of 32-byte identifiers for human-readable formats.
//!
//! JSON and TOML see a lowercase hex string; binary formats (bincode) see the
//! raw 32-byte array with no length prefix, which keeps wire encodings fixed-width.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::LumenError;

pub(crate) fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
    if serializer.is_human_readable() {
        serializer.serialize_str(&hex::encode(bytes))
    } else {
        bytes.serialize(serializer)
    }
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
    if deserializer.is_human_readable() {
        let s = String::deserialize(deserializer)?;
        decode(&s).map_err(de::Error::custom)
    } else {
        <[u8; 32]>::deserialize(deserializer)
    }
}

pub(crate) fn decode(s: &str) -> Result<[u8; 32], LumenError> {
    let bytes = hex::decode(s).map_err(|e| LumenError::InvalidHex(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|v: Vec<u8>| LumenError::InvalidLength {
            expected: 32,
            actual: v.len(),
        })
}
