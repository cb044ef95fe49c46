//! CIP-30 boundary types.
//!
//! Everything crossing the wallet boundary is either a small serde struct or
//! an opaque hex string. Payload contents are never decoded here: `Cbor` and
//! `HexBytes` only check that the string is well-formed hex (even length,
//! hex digits) so a typo fails at the call site instead of inside the wallet.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConnectorError;

/// Hex-encoded CBOR value (address, transaction, UTXO, witness set, value).
///
/// Opaque: this crate never parses the CBOR inside. Construction validates
/// the hex shape only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cbor(String);

impl Cbor {
    /// Wrap a hex string, rejecting anything that is not even-length hex.
    pub fn new(hex_str: impl Into<String>) -> Result<Self, ConnectorError> {
        let s = hex_str.into();
        check_hex(&s)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cbor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hex-encoded raw bytes, the payload form `signData` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexBytes(String);

impl HexBytes {
    pub fn new(hex_str: impl Into<String>) -> Result<Self, ConnectorError> {
        let s = hex_str.into();
        check_hex(&s)?;
        Ok(Self(s))
    }

    /// Hex-encode raw bytes into the wire form.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_hex(s: &str) -> Result<(), ConnectorError> {
    if s.len() % 2 != 0 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConnectorError::MalformedHex(truncate_for_error(s)));
    }
    Ok(())
}

// Error messages should name the offending input without dumping a whole
// transaction into the log line.
fn truncate_for_error(s: &str) -> String {
    const MAX: usize = 32;
    if s.chars().count() <= MAX {
        s.to_string()
    } else {
        let head: String = s.chars().take(MAX).collect();
        format!("{}...", head)
    }
}

/// A numbered CIP-30 extension, requested at enable time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extension {
    pub cip: u32,
}

impl Extension {
    pub fn new(cip: u32) -> Self {
        Self { cip }
    }
}

/// Pagination hint for address/UTXO listing. The wallet may ignore it; this
/// crate forwards it untouched and never paginates locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginate {
    pub limit: u32,
    pub page: u32,
}

impl Paginate {
    pub fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }
}

/// Result of a `signData` request: the signing key reference and the
/// detached signature, both opaque CBOR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSignature {
    pub key: Cbor,
    pub signature: Cbor,
}

/// Network the wallet is connected to. 0 = testnet, 1 = mainnet by
/// convention of the standard; other values pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u8);

impl NetworkId {
    pub const TESTNET: NetworkId = NetworkId(0);
    pub const MAINNET: NetworkId = NetworkId(1);

    pub fn is_mainnet(&self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "testnet"),
            1 => write!(f, "mainnet"),
            n => write!(f, "network-{}", n),
        }
    }
}
