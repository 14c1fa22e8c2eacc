//! Proposal Allow-List
//!
//! Decides which wasm proposal kinds a deployment accepts for submission.
//! The configuration is a tri-state flag: `"true"` enables every kind,
//! `"false"` none, and anything else selects the comma-separated kinds of
//! the specific list.

use tracing::{debug, info, warn};

use crate::config::ProposalsConfig;
use crate::error::{Result, WasmError};
use crate::proposal::{Content, ProposalKind, WasmProposal};
use crate::validation::{ContentLimits, ValidationRules};

/// Every wasm governance proposal kind
pub const ENABLE_ALL_PROPOSALS: [ProposalKind; 5] = ProposalKind::ALL;

/// No wasm governance proposal kind
pub const DISABLE_ALL_PROPOSALS: [ProposalKind; 0] = [];

/// Map each key to a proposal kind, preserving order and duplicates.
/// Fails on the first key that is not one of the known kinds.
pub fn convert_to_proposals<S: AsRef<str>>(keys: &[S]) -> Result<Vec<ProposalKind>> {
    keys.iter().map(|key| key.as_ref().parse()).collect()
}

/// Resolve the enabled proposal kinds from the configuration strings
pub fn get_enabled_proposals(proposals_enabled: &str, enable_specific: &str) -> Result<Vec<ProposalKind>> {
    match proposals_enabled {
        "true" => Ok(ENABLE_ALL_PROPOSALS.to_vec()),
        "false" => Ok(DISABLE_ALL_PROPOSALS.to_vec()),
        _ if enable_specific.is_empty() => Ok(DISABLE_ALL_PROPOSALS.to_vec()),
        _ => {
            let keys: Vec<&str> = enable_specific.split(',').collect();
            convert_to_proposals(&keys)
        }
    }
}

/// The accepted proposal kinds of a deployment and the limits admitted
/// proposals are validated against
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProposalGate {
    enabled: Vec<ProposalKind>,
    limits: ContentLimits,
}

impl ProposalGate {
    pub fn new(enabled: Vec<ProposalKind>) -> Self {
        Self {
            enabled,
            limits: ContentLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ContentLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn enable_all() -> Self {
        Self::new(ENABLE_ALL_PROPOSALS.to_vec())
    }

    pub fn disable_all() -> Self {
        Self::new(DISABLE_ALL_PROPOSALS.to_vec())
    }

    pub fn from_config(config: &ProposalsConfig, limits: ContentLimits) -> Result<Self> {
        let enabled = get_enabled_proposals(&config.enabled, &config.enable_specific)?;
        let names: Vec<&str> = enabled.iter().map(|k| k.as_str()).collect();
        info!("Wasm proposals enabled: [{}]", names.join(", "));
        Ok(Self::new(enabled).with_limits(limits))
    }

    pub fn enabled(&self) -> &[ProposalKind] {
        &self.enabled
    }

    pub fn limits(&self) -> &ContentLimits {
        &self.limits
    }

    pub fn is_enabled(&self, kind: ProposalKind) -> bool {
        self.enabled.contains(&kind)
    }

    pub fn check(&self, kind: ProposalKind) -> Result<()> {
        if !self.is_enabled(kind) {
            return Err(WasmError::InvalidRequest(format!(
                "proposal type {} is not enabled",
                kind
            )));
        }
        Ok(())
    }

    pub fn admit(&self, proposal: &WasmProposal) -> Result<()> {
        self.admit_with(proposal, &self.limits)
    }

    /// Both the allow-list and `validate_basic` must pass before a proposal
    /// may enter governance state
    pub fn admit_with(&self, proposal: &WasmProposal, rules: &dyn ValidationRules) -> Result<()> {
        let kind = proposal.proposal_kind();
        let result = self
            .check(kind)
            .and_then(|_| proposal.validate_basic_with(rules));

        match &result {
            Ok(()) => debug!("Admitted {} proposal '{}'", kind, proposal.title()),
            Err(e) => warn!("Rejected {} proposal '{}': {}", kind, proposal.title(), e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", "", ENABLE_ALL_PROPOSALS.to_vec())]
    #[case("false", "", vec![])]
    #[case("false", "StoreCode", vec![])]
    #[case("okay", "StoreCode,InstantiateContract", vec![ProposalKind::StoreCode, ProposalKind::InstantiateContract])]
    #[case("okay", "ClearAdmin,StoreCode,ClearAdmin", vec![ProposalKind::ClearAdmin, ProposalKind::StoreCode, ProposalKind::ClearAdmin])]
    #[case("okay", "", vec![])]
    fn test_get_enabled_proposals(
        #[case] enabled: &str,
        #[case] specific: &str,
        #[case] expected: Vec<ProposalKind>,
    ) {
        assert_eq!(get_enabled_proposals(enabled, specific).unwrap(), expected);
    }

    #[test]
    fn test_selective_rejects_untrimmed_tokens() {
        let err = get_enabled_proposals("okay", "StoreCode, InstantiateContract").unwrap_err();
        assert_eq!(
            err,
            WasmError::InvalidRequest("' InstantiateContract' is not a valid ProposalType".to_string())
        );
    }

    #[test]
    fn test_convert_reports_first_bad_key() {
        let err = convert_to_proposals(&["StoreCode", "Bogus", "Other"]).unwrap_err();
        assert_eq!(err.detail(), "'Bogus' is not a valid ProposalType");
    }

    #[test]
    fn test_check() {
        let gate = ProposalGate::new(vec![ProposalKind::UpdateAdmin]);
        assert!(gate.check(ProposalKind::UpdateAdmin).is_ok());
        assert!(gate.check(ProposalKind::StoreCode).is_err());
        assert!(ProposalGate::disable_all().check(ProposalKind::ClearAdmin).is_err());
        assert!(ProposalGate::enable_all().check(ProposalKind::ClearAdmin).is_ok());
    }

    #[test]
    fn test_admit_uses_gate_limits() {
        let proposal = WasmProposal::from(crate::proposal::ClearAdminProposal {
            title: "LongTitle".to_string(),
            description: "Bar".to_string(),
            contract: crate::address::Address::from([1u8; crate::address::ADDRESS_LEN]),
        });
        assert!(ProposalGate::enable_all().admit(&proposal).is_ok());

        let limits = ContentLimits { max_title_len: 3, ..Default::default() };
        let gate = ProposalGate::enable_all().with_limits(limits.clone());
        assert_eq!(gate.limits(), &limits);

        let err = gate.admit(&proposal).unwrap_err();
        assert_eq!(err, WasmError::InvalidRequest("proposal title is longer than max length of 3".to_string()));
    }
}
