use serde::{Deserialize, Serialize};
use std::fmt;

use super::{base64_bytes, require_address, Content, ProposalKind};
use crate::access::AccessConfig;
use crate::address::Address;
use crate::error::Result;
use crate::validation::{validate_proposal_commons, ValidationRules};

/// StoreCodeProposal uploads wasm byte code on behalf of `run_as`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCodeProposal {
    pub title: String,
    pub description: String,
    /// Address on whose behalf the code is stored
    #[serde(default)]
    pub run_as: Address,
    #[serde(default, with = "base64_bytes")]
    pub wasm_byte_code: Vec<u8>,
    /// Optional https URL to the contract source
    #[serde(default)]
    pub source: String,
    /// Optional docker image used for a reproducible build
    #[serde(default)]
    pub builder: String,
    /// Overrides the default instantiate permission of the module params
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instantiate_permission: Option<AccessConfig>,
}

impl Content for StoreCodeProposal {
    fn proposal_kind(&self) -> ProposalKind {
        ProposalKind::StoreCode
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn validate_basic_with(&self, rules: &dyn ValidationRules) -> Result<()> {
        validate_proposal_commons(&self.title, &self.description, rules)?;
        require_address(&self.run_as, "run as", rules)?;
        rules.validate_code(&self.wasm_byte_code)?;
        rules.validate_source_url(&self.source)?;
        rules.validate_builder(&self.builder)?;
        if let Some(permission) = &self.instantiate_permission {
            permission
                .validate_with(rules)
                .map_err(|e| e.wrap("instantiate permission"))?;
        }
        Ok(())
    }
}

impl fmt::Display for StoreCodeProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Store Code Proposal:")?;
        writeln!(f, "  Title:       {}", self.title)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Run as:      {}", self.run_as)?;
        writeln!(f, "  WasmCode:    {}", hex::encode_upper(&self.wasm_byte_code))?;
        writeln!(f, "  Source:      {}", self.source)?;
        writeln!(f, "  Builder:     {}", self.builder)?;
        if let Some(permission) = &self.instantiate_permission {
            writeln!(f, "  Instantiate Permission: {}", permission)?;
        }
        Ok(())
    }
}
