//! Access Control Types
//!
//! Following the Cosmos SDK x/wasm module: an `AccessType` names who may
//! perform a gated action (code upload, instantiation) and an `AccessConfig`
//! pairs it with the address it binds when the type requires one.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::address::Address;
use crate::error::{Result, WasmError};
use crate::validation::{ContentLimits, ValidationRules};

/// AccessType defines who can perform a gated action
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Sentinel for "not configured"; never valid
    #[default]
    Undefined,
    Nobody,
    OnlyAddress,
    Everybody,
}

impl AccessType {
    pub const ALL: [AccessType; 4] = [
        AccessType::Undefined,
        AccessType::Nobody,
        AccessType::OnlyAddress,
        AccessType::Everybody,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Undefined => "Undefined",
            AccessType::Nobody => "Nobody",
            AccessType::OnlyAddress => "OnlyAddress",
            AccessType::Everybody => "Everybody",
        }
    }

    /// Text token for this type. `Undefined` encodes as `"Undefined"`.
    pub fn encode(&self) -> String {
        self.as_str().to_string()
    }

    /// Never fails: empty or unrecognized text decodes to `Undefined`
    pub fn decode(token: &str) -> Self {
        match token {
            "Nobody" => AccessType::Nobody,
            "OnlyAddress" => AccessType::OnlyAddress,
            "Everybody" => AccessType::Everybody,
            _ => AccessType::Undefined,
        }
    }

    pub fn is_defined(&self) -> bool {
        *self != AccessType::Undefined
    }

    /// Bind an address to this type, producing an unvalidated config
    pub fn with(self, addr: Address) -> AccessConfig {
        AccessConfig::new(self, Some(addr))
    }
}

impl From<&str> for AccessType {
    fn from(token: &str) -> Self {
        Self::decode(token)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AccessType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccessType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::decode(&token))
    }
}

/// AccessConfig defines an access type with its optional bound address.
///
/// Construction does not validate so that partially decoded values can
/// exist; `validate` is the invariant boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    pub permission: AccessType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

pub const ALLOW_EVERYBODY: AccessConfig = AccessConfig {
    permission: AccessType::Everybody,
    address: None,
};

pub const ALLOW_NOBODY: AccessConfig = AccessConfig {
    permission: AccessType::Nobody,
    address: None,
};

impl AccessConfig {
    pub fn new(permission: AccessType, address: Option<Address>) -> Self {
        Self { permission, address }
    }

    pub fn everybody() -> Self {
        ALLOW_EVERYBODY
    }

    pub fn nobody() -> Self {
        ALLOW_NOBODY
    }

    pub fn only_address(addr: Address) -> Self {
        AccessType::OnlyAddress.with(addr)
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_with(&ContentLimits::default())
    }

    /// Enforces the type/address coupling:
    /// `OnlyAddress` needs a valid address, `Everybody` and `Nobody` must
    /// not carry one, `Undefined` is always rejected.
    pub fn validate_with(&self, rules: &dyn ValidationRules) -> Result<()> {
        match self.permission {
            AccessType::Undefined => Err(WasmError::UndefinedAccessType(
                "permission must be defined".to_string(),
            )),
            AccessType::Nobody | AccessType::Everybody => match self.bound_address() {
                Some(_) => Err(WasmError::ObsoleteAddress(format!(
                    "address not allowed for {}",
                    self.permission
                ))),
                None => Ok(()),
            },
            AccessType::OnlyAddress => match self.bound_address() {
                Some(addr) => rules.verify_address(addr),
                None => Err(WasmError::InvalidAddress(
                    "address required for OnlyAddress".to_string(),
                )),
            },
        }
    }

    /// The bound address, if any. An empty address binds nothing.
    pub fn bound_address(&self) -> Option<&Address> {
        self.address.as_ref().filter(|addr| !addr.is_empty())
    }

    /// Whether `actor` may perform the action this config gates
    pub fn allowed(&self, actor: &Address) -> bool {
        match self.permission {
            AccessType::Nobody | AccessType::Undefined => false,
            AccessType::Everybody => true,
            AccessType::OnlyAddress => self.bound_address() == Some(actor),
        }
    }
}

impl fmt::Display for AccessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bound_address() {
            Some(addr) => write!(f, "{} {}", self.permission, addr),
            None => write!(f, "{}", self.permission),
        }
    }
}

/// Validated access configuration. Every value of this type satisfies the
/// `AccessConfig` invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Permission {
    Nobody,
    Everybody,
    OnlyAddress(Address),
}

impl Permission {
    pub fn allowed(&self, actor: &Address) -> bool {
        match self {
            Permission::Nobody => false,
            Permission::Everybody => true,
            Permission::OnlyAddress(addr) => addr == actor,
        }
    }

    pub fn access_type(&self) -> AccessType {
        match self {
            Permission::Nobody => AccessType::Nobody,
            Permission::Everybody => AccessType::Everybody,
            Permission::OnlyAddress(_) => AccessType::OnlyAddress,
        }
    }
}

impl TryFrom<AccessConfig> for Permission {
    type Error = WasmError;

    fn try_from(config: AccessConfig) -> Result<Self> {
        config.validate()?;
        match (config.permission, config.address) {
            (AccessType::Nobody, _) => Ok(Permission::Nobody),
            (AccessType::Everybody, _) => Ok(Permission::Everybody),
            (AccessType::OnlyAddress, Some(addr)) => Ok(Permission::OnlyAddress(addr)),
            (AccessType::OnlyAddress, None) => Err(WasmError::InvalidAddress(
                "address required for OnlyAddress".to_string(),
            )),
            (AccessType::Undefined, _) => Err(WasmError::UndefinedAccessType(
                "permission must be defined".to_string(),
            )),
        }
    }
}

impl From<Permission> for AccessConfig {
    fn from(permission: Permission) -> Self {
        match permission {
            Permission::Nobody => ALLOW_NOBODY,
            Permission::Everybody => ALLOW_EVERYBODY,
            Permission::OnlyAddress(addr) => AccessConfig::only_address(addr),
        }
    }
}
