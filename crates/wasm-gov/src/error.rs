// Validation errors for the wasm access-control and governance layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WasmError>;

/// Errors returned by every validation boundary in this crate.
///
/// Each kind carries a detail message. Field context is prepended with
/// [`WasmError::wrap`] so the kind survives while the message grows,
/// e.g. `invalid address: run as: incorrect address length`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WasmError {
    #[error("undefined access type: {0}")]
    UndefinedAccessType(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("obsolete address: {0}")]
    ObsoleteAddress(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl WasmError {
    /// Prefix the detail message with `context`, keeping the error kind.
    pub fn wrap(self, context: &str) -> Self {
        match self {
            WasmError::UndefinedAccessType(msg) => {
                WasmError::UndefinedAccessType(format!("{}: {}", context, msg))
            }
            WasmError::InvalidAddress(msg) => WasmError::InvalidAddress(format!("{}: {}", context, msg)),
            WasmError::ObsoleteAddress(msg) => WasmError::ObsoleteAddress(format!("{}: {}", context, msg)),
            WasmError::MissingField(msg) => WasmError::MissingField(format!("{}: {}", context, msg)),
            WasmError::InvalidRequest(msg) => WasmError::InvalidRequest(format!("{}: {}", context, msg)),
        }
    }

    /// The detail message without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            WasmError::UndefinedAccessType(msg)
            | WasmError::InvalidAddress(msg)
            | WasmError::ObsoleteAddress(msg)
            | WasmError::MissingField(msg)
            | WasmError::InvalidRequest(msg) => msg,
        }
    }
}
