//! Wasm Governance Proposals
//!
//! The fixed catalogue of governance content the wasm module defines:
//! storing code, instantiating and migrating contracts, and changing or
//! clearing a contract admin. Every kind shares the `Content` contract and
//! is dispatched through the closed `WasmProposal` enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::address::Address;
use crate::error::{Result, WasmError};
use crate::validation::{ContentLimits, ValidationRules};

pub mod admin;
pub mod instantiate;
pub mod migrate;
pub mod store_code;

pub use admin::{ClearAdminProposal, UpdateAdminProposal};
pub use instantiate::InstantiateContractProposal;
pub use migrate::MigrateContractProposal;
pub use store_code::StoreCodeProposal;

/// Routing key the governance dispatcher uses for this module
pub const ROUTER_KEY: &str = "wasm";

/// ProposalKind identifies one of the wasm proposal payloads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProposalKind {
    StoreCode,
    InstantiateContract,
    MigrateContract,
    UpdateAdmin,
    ClearAdmin,
}

impl ProposalKind {
    pub const ALL: [ProposalKind; 5] = [
        ProposalKind::StoreCode,
        ProposalKind::InstantiateContract,
        ProposalKind::MigrateContract,
        ProposalKind::UpdateAdmin,
        ProposalKind::ClearAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalKind::StoreCode => "StoreCode",
            ProposalKind::InstantiateContract => "InstantiateContract",
            ProposalKind::MigrateContract => "MigrateContract",
            ProposalKind::UpdateAdmin => "UpdateAdmin",
            ProposalKind::ClearAdmin => "ClearAdmin",
        }
    }

    /// Codec name of the payload registered with the governance dispatcher
    pub fn type_name(&self) -> &'static str {
        match self {
            ProposalKind::StoreCode => "wasm/StoreCodeProposal",
            ProposalKind::InstantiateContract => "wasm/InstantiateContractProposal",
            ProposalKind::MigrateContract => "wasm/MigrateContractProposal",
            ProposalKind::UpdateAdmin => "wasm/UpdateAdminProposal",
            ProposalKind::ClearAdmin => "wasm/ClearAdminProposal",
        }
    }
}

impl FromStr for ProposalKind {
    type Err = WasmError;

    /// Exact, case-sensitive match against the five kind tokens
    fn from_str(s: &str) -> Result<Self> {
        ProposalKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| WasmError::InvalidRequest(format!("'{}' is not a valid ProposalType", s)))
    }
}

impl fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content is the contract every governance payload of this module fulfils
pub trait Content: fmt::Display {
    fn proposal_route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn proposal_kind(&self) -> ProposalKind;

    fn proposal_type(&self) -> &'static str {
        self.proposal_kind().as_str()
    }

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Stateless structural validation; the first violated rule is reported
    fn validate_basic_with(&self, rules: &dyn ValidationRules) -> Result<()>;

    fn validate_basic(&self) -> Result<()> {
        self.validate_basic_with(&ContentLimits::default())
    }
}

/// Closed set of wasm proposals, tagged with the payload codec name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum WasmProposal {
    #[serde(rename = "wasm/StoreCodeProposal")]
    StoreCode(StoreCodeProposal),
    #[serde(rename = "wasm/InstantiateContractProposal")]
    InstantiateContract(InstantiateContractProposal),
    #[serde(rename = "wasm/MigrateContractProposal")]
    MigrateContract(MigrateContractProposal),
    #[serde(rename = "wasm/UpdateAdminProposal")]
    UpdateAdmin(UpdateAdminProposal),
    #[serde(rename = "wasm/ClearAdminProposal")]
    ClearAdmin(ClearAdminProposal),
}

impl WasmProposal {
    fn content(&self) -> &dyn Content {
        match self {
            WasmProposal::StoreCode(p) => p,
            WasmProposal::InstantiateContract(p) => p,
            WasmProposal::MigrateContract(p) => p,
            WasmProposal::UpdateAdmin(p) => p,
            WasmProposal::ClearAdmin(p) => p,
        }
    }
}

impl Content for WasmProposal {
    fn proposal_kind(&self) -> ProposalKind {
        self.content().proposal_kind()
    }

    fn title(&self) -> &str {
        self.content().title()
    }

    fn description(&self) -> &str {
        self.content().description()
    }

    fn validate_basic_with(&self, rules: &dyn ValidationRules) -> Result<()> {
        self.content().validate_basic_with(rules)
    }
}

impl fmt::Display for WasmProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.content(), f)
    }
}

impl From<StoreCodeProposal> for WasmProposal {
    fn from(p: StoreCodeProposal) -> Self {
        WasmProposal::StoreCode(p)
    }
}

impl From<InstantiateContractProposal> for WasmProposal {
    fn from(p: InstantiateContractProposal) -> Self {
        WasmProposal::InstantiateContract(p)
    }
}

impl From<MigrateContractProposal> for WasmProposal {
    fn from(p: MigrateContractProposal) -> Self {
        WasmProposal::MigrateContract(p)
    }
}

impl From<UpdateAdminProposal> for WasmProposal {
    fn from(p: UpdateAdminProposal) -> Self {
        WasmProposal::UpdateAdmin(p)
    }
}

impl From<ClearAdminProposal> for WasmProposal {
    fn from(p: ClearAdminProposal) -> Self {
        WasmProposal::ClearAdmin(p)
    }
}

/// Required address: empty is a missing field, anything else must pass the
/// address rules. Errors carry `field` as context.
pub(crate) fn require_address(addr: &Address, field: &str, rules: &dyn ValidationRules) -> Result<()> {
    if addr.is_empty() {
        return Err(WasmError::MissingField(format!("{} is required", field)));
    }
    rules.verify_address(addr).map_err(|e| e.wrap(field))
}

/// Byte fields travel as base64 strings in JSON
pub(crate) mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tokens() {
        for kind in ProposalKind::ALL {
            assert_eq!(kind.as_str().parse::<ProposalKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
            assert!(kind.type_name().starts_with("wasm/"));
        }
    }

    #[test]
    fn test_kind_parse_is_exact() {
        for token in ["storecode", " StoreCode", "StoreCode ", "", "Bogus"] {
            let err = token.parse::<ProposalKind>().unwrap_err();
            assert_eq!(
                err,
                WasmError::InvalidRequest(format!("'{}' is not a valid ProposalType", token))
            );
        }
    }

    #[test]
    fn test_kind_json_is_token() {
        let json = serde_json::to_string(&ProposalKind::InstantiateContract).unwrap();
        assert_eq!(json, r#""InstantiateContract""#);
    }
}
