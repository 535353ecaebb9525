use serde::{Deserialize, Serialize};
use serde_json::Map;

/// A per-chain `assetlist.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetList {
    #[serde(rename = "$schema")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_name: Option<String>,

    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// One registered asset. The generator works on a deep copy of the registry
/// record and mutates it through trace building, hash substitution, and
/// metadata merging; the same shape is emitted in the output list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub denom_units: Vec<DenomUnit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_asset: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Origin-chain denomination, or `ibc/<HASH>` once the asset is traced.
    pub base: String,

    pub name: String,

    pub display: String,

    pub symbol: String,

    /// Provenance hops, outermost first (index 0 = hop onto this chain).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traces: Option<Vec<Trace>>,

    #[serde(rename = "logo_URIs")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uris: Option<LogoUris>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<Vec<InfoEntry>>,
}

/// One `denom_units` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenomUnit {
    pub denom: String,

    pub exponent: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoUris {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

/// One `additional_information` element: a single-key object such as
/// `{"block_explorer_link": "https://etherscan.io/token/0x..."}`.
pub type InfoEntry = Map<String, serde_json::Value>;

/// Build a one-entry [`InfoEntry`].
pub fn info_entry(key: &str, value: impl Into<String>) -> InfoEntry {
    let mut map = Map::new();
    map.insert(key.to_string(), serde_json::Value::String(value.into()));
    map
}

/// One provenance hop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: TraceType,

    /// Transfer details on the receiving side. Absent for provider-only
    /// hops such as `bridge` records straight from the registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<TraceChainInfo>,

    pub counterparty: Counterparty,

    /// The entity offering the service, e.g. "Axelar".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// Receiving-side transfer details of a hop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceChainInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// The IBC port, kept only for contract-bound transfers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// The `port/channel/denom` string the content hash is derived from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
}

/// Sending-side identity of a hop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterparty {
    pub chain_name: String,

    pub base_denom: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
}

/// Hop type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceType {
    Ibc,
    IbcCw20,
    Bridge,
    LiquidStake,
    Synthetic,
    Wrapped,
    Forex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_type_wire_names() {
        let json = serde_json::to_string(&TraceType::IbcCw20).unwrap();
        assert_eq!(json, r#""ibc-cw20""#);
        let json = serde_json::to_string(&TraceType::LiquidStake).unwrap();
        assert_eq!(json, r#""liquid-stake""#);

        let parsed: TraceType = serde_json::from_str(r#""forex""#).unwrap();
        assert_eq!(parsed, TraceType::Forex);
    }

    #[test]
    fn test_asset_optional_fields_omitted() {
        let asset = Asset {
            description: None,
            denom_units: vec![DenomUnit {
                denom: "uatom".to_string(),
                exponent: 0,
                aliases: None,
            }],
            type_asset: None,
            address: None,
            base: "uatom".to_string(),
            name: "Cosmos Hub".to_string(),
            display: "atom".to_string(),
            symbol: "ATOM".to_string(),
            traces: None,
            logo_uris: None,
            coingecko_id: None,
            keywords: None,
            pretty_path: None,
            additional_information: None,
        };
        let value = serde_json::to_value(&asset).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("traces"));
        assert!(!object.contains_key("coingecko_id"));
        assert!(object.contains_key("base"));
    }

    #[test]
    fn test_registry_trace_round_trip() {
        let json = r#"{
            "type": "ibc",
            "chain": {
                "channel_id": "channel-0",
                "path": "transfer/channel-0/uatom"
            },
            "counterparty": {
                "chain_name": "cosmoshub",
                "base_denom": "uatom",
                "channel_id": "channel-141"
            }
        }"#;
        let trace: Trace = serde_json::from_str(json).unwrap();
        assert_eq!(trace.trace_type, TraceType::Ibc);
        assert_eq!(trace.counterparty.chain_name, "cosmoshub");
        let back = serde_json::to_value(&trace).unwrap();
        assert!(back["chain"].get("port").is_none());
    }
}
