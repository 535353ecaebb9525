use thiserror::Error;

/// Unified error type for the asset list generator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file path error: {0}")]
    FilePath(#[from] FilePathError),

    #[error("registry lookup error: {0}")]
    Registry(#[from] RegistryError),

    #[error("channel topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("{0}")]
    Generic(String),
}

/// Errors reading or writing files on disk.
#[derive(Debug, Error)]
pub enum FilePathError {
    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("cannot write {path}: {reason}")]
    Unwritable { path: String, reason: String },
}

/// Errors resolving records in the shared cross-chain registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed JSON in {file}: {reason}")]
    Parse { file: String, reason: String },

    #[error("chain {chain_name} not found in registry")]
    ChainNotFound { chain_name: String },

    #[error("asset {base_denom} not found in {chain_name} assetlist")]
    AssetNotFound {
        chain_name: String,
        base_denom: String,
    },
}

/// Errors resolving a transfer channel between two chains. These are
/// structural: the affected asset must be excluded from the output.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("no channel topology file for {chain_1}-{chain_2}")]
    NotFound { chain_1: String, chain_2: String },

    #[error("no channel matching ports {port_1}/{port_2} between {chain_1} and {chain_2}")]
    NoMatchingChannel {
        chain_1: String,
        chain_2: String,
        port_1: String,
        port_2: String,
    },

    #[error("previous hop for {base_denom} carries no path")]
    MissingHopPath { base_denom: String },
}

/// In-band placeholder strings emitted when a best-effort descriptive
/// lookup fails. The asset is still produced; the marker keeps the gap
/// visible in the output instead of silently dropping the field.
pub mod marker {
    pub const GENERIC: &str = "::~Generic Error~::";
    pub const FILE_PATH: &str = "::~File Path Error~::";
    pub const CHAIN_REGISTRY: &str = "::~Chain Registry Error~::";
    pub const IBC_CONNECTION: &str = "::~IBC Connection Error~::";
}
