// Registry of wasm proposal kinds known to the governance dispatcher

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{Result, WasmError};
use crate::proposal::{
    ClearAdminProposal, InstantiateContractProposal, MigrateContractProposal, ProposalKind,
    StoreCodeProposal, UpdateAdminProposal, WasmProposal,
};

/// Maps proposal kinds to their payload codec names.
///
/// Built once during module setup and passed along by value; read-only
/// after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProposalRegistry {
    entries: BTreeMap<ProposalKind, &'static str>,
}

impl ProposalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a kind and its payload layout; each kind registers once
    pub fn register(&mut self, kind: ProposalKind) -> Result<()> {
        if self.entries.contains_key(&kind) {
            return Err(WasmError::InvalidRequest(format!(
                "proposal type {} already registered",
                kind
            )));
        }
        self.entries.insert(kind, kind.type_name());
        debug!("Registered proposal type {} as {}", kind, kind.type_name());
        Ok(())
    }

    pub fn is_registered(&self, kind: ProposalKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn type_name(&self, kind: ProposalKind) -> Option<&'static str> {
        self.entries.get(&kind).copied()
    }

    pub fn kind_for_type_name(&self, type_name: &str) -> Option<ProposalKind> {
        self.entries
            .iter()
            .find(|(_, name)| **name == type_name)
            .map(|(kind, _)| *kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProposalKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a JSON payload according to the layout registered for the
    /// kind token
    pub fn decode(&self, kind_token: &str, payload: &[u8]) -> Result<WasmProposal> {
        let kind: ProposalKind = kind_token.parse()?;
        if !self.is_registered(kind) {
            return Err(WasmError::InvalidRequest(format!(
                "proposal type {} is not registered",
                kind
            )));
        }

        let decode_err =
            |e: serde_json::Error| WasmError::InvalidRequest(format!("decode {}: {}", kind.type_name(), e));

        let proposal = match kind {
            ProposalKind::StoreCode => {
                WasmProposal::from(serde_json::from_slice::<StoreCodeProposal>(payload).map_err(decode_err)?)
            }
            ProposalKind::InstantiateContract => WasmProposal::from(
                serde_json::from_slice::<InstantiateContractProposal>(payload).map_err(decode_err)?,
            ),
            ProposalKind::MigrateContract => WasmProposal::from(
                serde_json::from_slice::<MigrateContractProposal>(payload).map_err(decode_err)?,
            ),
            ProposalKind::UpdateAdmin => {
                WasmProposal::from(serde_json::from_slice::<UpdateAdminProposal>(payload).map_err(decode_err)?)
            }
            ProposalKind::ClearAdmin => {
                WasmProposal::from(serde_json::from_slice::<ClearAdminProposal>(payload).map_err(decode_err)?)
            }
        };
        Ok(proposal)
    }
}

/// Register every wasm proposal kind. Called once during module setup.
pub fn register_wasm_proposals() -> Result<ProposalRegistry> {
    let mut registry = ProposalRegistry::new();
    for kind in ProposalKind::ALL {
        registry.register(kind)?;
    }
    Ok(registry)
}
