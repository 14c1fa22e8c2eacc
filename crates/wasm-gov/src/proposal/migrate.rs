use serde::{Deserialize, Serialize};
use std::fmt;

use super::{base64_bytes, require_address, Content, ProposalKind};
use crate::address::Address;
use crate::error::{Result, WasmError};
use crate::validation::{validate_proposal_commons, ValidationRules};

/// MigrateContractProposal moves a contract instance to new code
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrateContractProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub contract: Address,
    /// Code the contract migrates to
    #[serde(default)]
    pub code_id: u64,
    #[serde(default)]
    pub run_as: Address,
    #[serde(default, with = "base64_bytes")]
    pub migrate_msg: Vec<u8>,
}

impl Content for MigrateContractProposal {
    fn proposal_kind(&self) -> ProposalKind {
        ProposalKind::MigrateContract
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn validate_basic_with(&self, rules: &dyn ValidationRules) -> Result<()> {
        validate_proposal_commons(&self.title, &self.description, rules)?;
        if self.code_id == 0 {
            return Err(WasmError::MissingField("code id is required".to_string()));
        }
        require_address(&self.contract, "contract", rules)?;
        require_address(&self.run_as, "run as", rules)?;
        Ok(())
    }
}

impl fmt::Display for MigrateContractProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Migrate Contract Proposal:")?;
        writeln!(f, "  Title:       {}", self.title)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Contract:    {}", self.contract)?;
        writeln!(f, "  Code id:     {}", self.code_id)?;
        writeln!(f, "  Run as:      {}", self.run_as)?;
        writeln!(f, "  MigrateMsg   {:?}", String::from_utf8_lossy(&self.migrate_msg))
    }
}
