use serde::{Deserialize, Serialize};
use std::fmt;

use super::{base64_bytes, require_address, Content, ProposalKind};
use crate::address::Address;
use crate::coins::Coins;
use crate::error::{Result, WasmError};
use crate::validation::{validate_proposal_commons, ValidationRules};

/// InstantiateContractProposal creates a contract instance from stored code
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiateContractProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub run_as: Address,
    /// Admin allowed to migrate the instance later, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Address>,
    #[serde(default)]
    pub code_id: u64,
    #[serde(default)]
    pub label: String,
    /// JSON encoded init message passed to the contract
    #[serde(default, with = "base64_bytes")]
    pub init_msg: Vec<u8>,
    #[serde(default)]
    pub init_funds: Coins,
}

impl Content for InstantiateContractProposal {
    fn proposal_kind(&self) -> ProposalKind {
        ProposalKind::InstantiateContract
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

        if self.code_id == 0 {
            return Err(WasmError::MissingField("code id is required".to_string()));
        }

        rules.validate_label(&self.label)?;

        if !rules.is_valid_coin_set(&self.init_funds) {
            return Err(WasmError::InvalidRequest(format!(
                "invalid init funds: {}",
                self.init_funds
            )));
        }

        if let Some(admin) = self.admin.as_ref().filter(|a| !a.is_empty()) {
            rules.verify_address(admin).map_err(|e| e.wrap("admin"))?;
        }
        Ok(())
    }
}

impl fmt::Display for InstantiateContractProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let admin = self.admin.as_ref().map(|a| a.to_string()).unwrap_or_default();

        writeln!(f, "Instantiate Code Proposal:")?;
        writeln!(f, "  Title:       {}", self.title)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Run as:      {}", self.run_as)?;
        writeln!(f, "  Admin:       {}", admin)?;
        writeln!(f, "  Code id:     {}", self.code_id)?;
        writeln!(f, "  Label:       {}", self.label)?;
        writeln!(f, "  InitMsg:     {:?}", String::from_utf8_lossy(&self.init_msg))?;
        writeln!(f, "  InitFunds:   {}", self.init_funds)
    }
}
