// Module parameters: default upload and instantiate policy

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::access::{AccessConfig, AccessType, Permission, ALLOW_EVERYBODY};
use crate::address::Address;
use crate::error::{Result, WasmError};
use crate::validation::{ContentLimits, ValidationRules};

/// Parameter subspace of the wasm module
pub const DEFAULT_PARAMSPACE: &str = "wasm";

pub const PARAM_STORE_KEY_UPLOAD_ACCESS: &str = "uploadAccess";
pub const PARAM_STORE_KEY_INSTANTIATE_ACCESS: &str = "instantiateAccess";

/// Params defines the set of wasm parameters.
///
/// `code_upload_access` may bind an address; `instantiate_default_permission`
/// is only the access type assigned to newly stored code, so `OnlyAddress`
/// is valid there without an address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub code_upload_access: AccessConfig,
    pub instantiate_default_permission: AccessType,
}

impl Default for Params {
    fn default() -> Self {
        default_params()
    }
}

/// Baseline used when no governance parameter has been set
pub fn default_params() -> Params {
    Params {
        code_upload_access: ALLOW_EVERYBODY,
        instantiate_default_permission: AccessType::Everybody,
    }
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&ContentLimits::default())
    }

    pub fn validate_with(&self, rules: &dyn ValidationRules) -> Result<()> {
        validate_access_config(&self.code_upload_access, rules)
            .map_err(|e| e.wrap("upload access"))?;
        validate_access_type(self.instantiate_default_permission)
            .map_err(|e| e.wrap("instantiate default permission"))?;
        Ok(())
    }

    /// Whether `actor` may store new code under these params
    pub fn can_upload(&self, actor: &Address) -> bool {
        self.code_upload_access.allowed(actor)
    }

    /// Validated upload permission
    pub fn upload_permission(&self) -> Result<Permission> {
        Permission::try_from(self.code_upload_access.clone())
    }

    /// Apply a governance parameter change for `key`, given the JSON encoded
    /// value. Returns the superseding params; `self` is left untouched.
    pub fn apply_change(&self, key: &str, value: &str) -> Result<Params> {
        let mut next = self.clone();
        match key {
            PARAM_STORE_KEY_UPLOAD_ACCESS => {
                next.code_upload_access = serde_json::from_str(value).map_err(|e| {
                    WasmError::InvalidRequest(format!("decode {}: {}", key, e))
                })?;
            }
            PARAM_STORE_KEY_INSTANTIATE_ACCESS => {
                next.instantiate_default_permission = serde_json::from_str(value).map_err(|e| {
                    WasmError::InvalidRequest(format!("decode {}: {}", key, e))
                })?;
            }
            _ => {
                return Err(WasmError::InvalidRequest(format!(
                    "unknown parameter key {}/{}",
                    DEFAULT_PARAMSPACE, key
                )));
            }
        }

        next.validate()?;
        info!("Wasm params: {} changed to {}", key, value);
        Ok(next)
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Params:\n  Code Upload Access:             {}\n  Instantiate Default Permission: {}\n",
            self.code_upload_access, self.instantiate_default_permission
        )
    }
}

fn validate_access_config(config: &AccessConfig, rules: &dyn ValidationRules) -> Result<()> {
    config.validate_with(rules)
}

/// Unknown tokens decode to `Undefined` and are rejected the same way
fn validate_access_type(access_type: AccessType) -> Result<()> {
    if !access_type.is_defined() {
        return Err(WasmError::UndefinedAccessType(format!(
            "type: {}",
            access_type
        )));
    }
    Ok(())
}
