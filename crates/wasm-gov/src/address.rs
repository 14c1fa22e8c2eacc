//! Account and contract addresses
//!
//! Addresses are opaque byte identifiers. Their textual form is bech32 with
//! the `cosmos` prefix; any prefix is accepted when parsing since prefix
//! policy belongs to the chain's address codec, not to this module.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::WasmError;

/// Expected length in bytes of a valid account or contract address
pub const ADDRESS_LEN: usize = 20;

/// Default bech32 prefix used when rendering addresses
pub const DEFAULT_BECH32_PREFIX: &str = "cosmos";

/// Raw address bytes. Length is not enforced here; validation happens at
/// the boundaries that require a well-formed address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(Vec<u8>);

impl Address {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode a bech32 string. The empty string maps to the empty address.
    pub fn from_bech32(addr: &str) -> Result<Self, WasmError> {
        use bech32::FromBase32;

        if addr.is_empty() {
            return Ok(Self::default());
        }

        let (_hrp, data, variant) = bech32::decode(addr)
            .map_err(|e| WasmError::InvalidAddress(format!("invalid bech32 address {}: {}", addr, e)))?;

        if variant != bech32::Variant::Bech32 {
            return Err(WasmError::InvalidAddress("invalid bech32 variant".to_string()));
        }

        let bytes = Vec::<u8>::from_base32(&data)
            .map_err(|e| WasmError::InvalidAddress(format!("invalid base32 data: {}", e)))?;

        Ok(Self(bytes))
    }

    /// Encode as bech32 with the given human readable prefix
    pub fn to_bech32(&self, prefix: &str) -> Result<String, WasmError> {
        use bech32::ToBase32;

        if self.0.is_empty() {
            return Ok(String::new());
        }

        bech32::encode(prefix, self.0.to_base32(), bech32::Variant::Bech32)
            .map_err(|e| WasmError::InvalidAddress(format!("bech32 encoding failed: {}", e)))
    }
}

impl From<Vec<u8>> for Address {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Address {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Address {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = WasmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.to_bech32(DEFAULT_BECH32_PREFIX).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self
            .to_bech32(DEFAULT_BECH32_PREFIX)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_bech32(&s).map_err(serde::de::Error::custom)
    }
}
