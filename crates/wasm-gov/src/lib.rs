// Wasm Governance Library
// Access control for code upload and instantiation, module params, and the
// validation and allow-listing of wasm governance proposals

pub mod access;
pub mod address;
pub mod coins;
pub mod config;
pub mod error;
pub mod gate;
pub mod params;
pub mod proposal;
pub mod registry;
pub mod validation;

// Re-export commonly used types for convenience
pub use access::{AccessConfig, AccessType, Permission, ALLOW_EVERYBODY, ALLOW_NOBODY};
pub use address::{Address, ADDRESS_LEN};
pub use coins::{Coin, Coins};
pub use config::{GlobalConfig, ProposalsConfig, WasmConfig};
pub use error::{Result, WasmError};
pub use gate::{
    convert_to_proposals, get_enabled_proposals, ProposalGate, DISABLE_ALL_PROPOSALS,
    ENABLE_ALL_PROPOSALS,
};
pub use params::{default_params, Params};
pub use proposal::{
    ClearAdminProposal, Content, InstantiateContractProposal, MigrateContractProposal,
    ProposalKind, StoreCodeProposal, UpdateAdminProposal, WasmProposal, ROUTER_KEY,
};
pub use registry::{register_wasm_proposals, ProposalRegistry};
pub use validation::{ContentLimits, ValidationRules};
