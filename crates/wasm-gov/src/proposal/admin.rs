// Contract admin proposals

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{require_address, Content, ProposalKind};
use crate::address::Address;
use crate::error::Result;
use crate::validation::{validate_proposal_commons, ValidationRules};

/// UpdateAdminProposal sets a new admin for a contract
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAdminProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub new_admin: Address,
    #[serde(default)]
    pub contract: Address,
}

impl Content for UpdateAdminProposal {
    fn proposal_kind(&self) -> ProposalKind {
        ProposalKind::UpdateAdmin
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn validate_basic_with(&self, rules: &dyn ValidationRules) -> Result<()> {
        validate_proposal_commons(&self.title, &self.description, rules)?;
        require_address(&self.contract, "contract", rules)?;
        require_address(&self.new_admin, "new admin", rules)?;
        Ok(())
    }
}

impl fmt::Display for UpdateAdminProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Update Contract Admin Proposal:")?;
        writeln!(f, "  Title:       {}", self.title)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Contract:    {}", self.contract)?;
        writeln!(f, "  New Admin:   {}", self.new_admin)
    }
}

/// ClearAdminProposal removes the admin of a contract, freezing its code
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearAdminProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub contract: Address,
}

impl Content for ClearAdminProposal {
    fn proposal_kind(&self) -> ProposalKind {
        ProposalKind::ClearAdmin
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn validate_basic_with(&self, rules: &dyn ValidationRules) -> Result<()> {
        validate_proposal_commons(&self.title, &self.description, rules)?;
        require_address(&self.contract, "contract", rules)
    }
}

impl fmt::Display for ClearAdminProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clear Contract Admin Proposal:")?;
        writeln!(f, "  Title:       {}", self.title)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Contract:    {}", self.contract)
    }
}
