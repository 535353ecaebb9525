use serde::{Deserialize, Serialize};

/// The subset of a registry `chain.json` consumed during metadata merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainDescriptor {
    pub chain_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub codebase: Option<Codebase>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Codebase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_repo: Option<String>,
}

impl ChainDescriptor {
    /// The chain's source-code repository, if declared.
    pub fn git_repo(&self) -> Option<&str> {
        self.codebase.as_ref().and_then(|c| c.git_repo.as_deref())
    }
}
