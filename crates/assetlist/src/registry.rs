use std::collections::HashMap;

use crate::error::{Error, RegistryError, TopologyError};
use crate::types::asset::{Asset, AssetList};
use crate::types::chain::ChainDescriptor;
use crate::types::ibc::ChannelTopology;

/// The lexicographically ordered chain pair, matching the naming convention
/// of channel topology files in the registry's `_IBC/` directory.
pub fn ordered_pair<'a>(chain_a: &'a str, chain_b: &'a str) -> (&'a str, &'a str) {
    if chain_a < chain_b {
        (chain_a, chain_b)
    } else {
        (chain_b, chain_a)
    }
}

/// File name of the topology document for a chain pair.
pub fn topology_file_name(chain_a: &str, chain_b: &str) -> String {
    let (first, second) = ordered_pair(chain_a, chain_b);
    format!("{first}-{second}.json")
}

/// Trait for registry data sources (filesystem, in-memory, ...).
pub trait RegistrySource {
    /// Resolve a chain name + base denomination to its registered asset.
    /// Returns a deep copy the caller is free to mutate.
    fn asset(&self, chain_name: &str, base_denom: &str) -> Result<Asset, Error>;

    /// Resolve a chain's registry descriptor (`chain.json` subset).
    fn chain(&self, chain_name: &str) -> Result<ChainDescriptor, Error>;

    /// Resolve the channel topology for a pair of chains. The pair may be
    /// given in either order.
    fn topology(&self, chain_a: &str, chain_b: &str) -> Result<ChannelTopology, Error>;
}

/// Static in-memory registry source for testing.
#[derive(Default)]
pub struct StaticRegistry {
    assets: HashMap<String, Vec<Asset>>,
    chains: HashMap<String, ChainDescriptor>,
    topologies: HashMap<String, ChannelTopology>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chain's asset list from JSON.
    pub fn add_assetlist_json(&mut self, chain_name: &str, json: &str) -> Result<(), Error> {
        let list: AssetList = serde_json::from_str(json).map_err(|e| RegistryError::Parse {
            file: format!("{chain_name}/assetlist.json"),
            reason: e.to_string(),
        })?;
        self.assets.insert(chain_name.to_string(), list.assets);
        Ok(())
    }

    /// Add a chain descriptor from JSON.
    pub fn add_chain_json(&mut self, json: &str) -> Result<(), Error> {
        let chain: ChainDescriptor = serde_json::from_str(json).map_err(|e| {
            RegistryError::Parse {
                file: "chain.json".to_string(),
                reason: e.to_string(),
            }
        })?;
        self.chains.insert(chain.chain_name.clone(), chain);
        Ok(())
    }

    /// Add a channel topology from JSON, keyed by the sorted pair.
    pub fn add_topology_json(
        &mut self,
        chain_a: &str,
        chain_b: &str,
        json: &str,
    ) -> Result<(), Error> {
        let file = topology_file_name(chain_a, chain_b);
        let topology: ChannelTopology =
            serde_json::from_str(json).map_err(|e| RegistryError::Parse {
                file: file.clone(),
                reason: e.to_string(),
            })?;
        self.topologies.insert(file, topology);
        Ok(())
    }
}

impl RegistrySource for StaticRegistry {
    fn asset(&self, chain_name: &str, base_denom: &str) -> Result<Asset, Error> {
        let assets = self
            .assets
            .get(chain_name)
            .ok_or_else(|| RegistryError::ChainNotFound {
                chain_name: chain_name.to_string(),
            })?;
        assets
            .iter()
            .find(|asset| asset.base == base_denom)
            .cloned()
            .ok_or_else(|| {
                RegistryError::AssetNotFound {
                    chain_name: chain_name.to_string(),
                    base_denom: base_denom.to_string(),
                }
                .into()
            })
    }

    fn chain(&self, chain_name: &str) -> Result<ChainDescriptor, Error> {
        self.chains.get(chain_name).cloned().ok_or_else(|| {
            RegistryError::ChainNotFound {
                chain_name: chain_name.to_string(),
            }
            .into()
        })
    }

    fn topology(&self, chain_a: &str, chain_b: &str) -> Result<ChannelTopology, Error> {
        let file = topology_file_name(chain_a, chain_b);
        self.topologies.get(&file).cloned().ok_or_else(|| {
            let (first, second) = ordered_pair(chain_a, chain_b);
            TopologyError::NotFound {
                chain_1: first.to_string(),
                chain_2: second.to_string(),
            }
            .into()
        })
    }
}
