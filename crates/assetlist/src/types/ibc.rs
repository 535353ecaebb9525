use serde::{Deserialize, Serialize};

/// An `_IBC/<chain_1>-<chain_2>.json` document. `chain_1` and `chain_2` are
/// fixed by the lexicographic order of the two chain names in the file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelTopology {
    #[serde(rename = "$schema")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_1: Option<TopologyChain>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_2: Option<TopologyChain>,

    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// Top-level connection info for one side of the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyChain {
    pub chain_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
}

/// One known channel between the pair, pinned to a port on each side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub chain_1: ChannelEnd,

    pub chain_2: ChannelEnd,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<ChannelTags>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelEnd {
    pub channel_id: String,

    pub port_id: String,
}

/// Human readable key:value pairs distinguishing channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
