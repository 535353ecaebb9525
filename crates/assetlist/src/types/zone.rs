use serde::{Deserialize, Serialize};

use super::asset::{InfoEntry, LogoUris};

/// A `<chain_name>.zone.json` document: which assets the target chain's
/// list should include, with minimal override metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    #[serde(rename = "$schema")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    pub chain_name: String,

    #[serde(default)]
    pub assets: Vec<ZoneAsset>,
}

/// One zone request: list the asset known as `base_denom` on `chain_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneAsset {
    pub chain_name: String,

    pub base_denom: String,

    /// Fallback pretty name when the registry's `chain.json` lookup fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_name_pretty: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend_properties: Option<FrontendProperties>,
}

/// Zone-supplied overrides applied after the registry record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontendProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Appended after the registry keywords, not deduplicated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(rename = "logo_URIs")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uris: Option<LogoUris>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<Vec<InfoEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zone() {
        let json = r#"{
            "$schema": "../zone.schema.json",
            "chain_name": "osmosis",
            "assets": [
                { "chain_name": "cosmoshub", "base_denom": "uatom" },
                {
                    "chain_name": "juno",
                    "base_denom": "cw20:juno1xyz",
                    "chain_name_pretty": "Juno",
                    "frontend_properties": {
                        "symbol": "NETA",
                        "keywords": ["Meme"]
                    }
                }
            ]
        }"#;
        let zone: Zone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.chain_name, "osmosis");
        assert_eq!(zone.assets.len(), 2);
        let props = zone.assets[1].frontend_properties.as_ref().unwrap();
        assert_eq!(props.symbol.as_deref(), Some("NETA"));
    }
}
