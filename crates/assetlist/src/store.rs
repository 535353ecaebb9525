use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, FilePathError, RegistryError, TopologyError};
use crate::registry::{ordered_pair, topology_file_name, RegistrySource};
use crate::types::asset::{Asset, AssetList};
use crate::types::chain::ChainDescriptor;
use crate::types::ibc::ChannelTopology;
use crate::types::zone::Zone;

const ASSETLIST_FILE: &str = "assetlist.json";
const CHAIN_FILE: &str = "chain.json";
const IBC_DIR: &str = "_IBC";
const ZONE_SUFFIX: &str = ".zone.json";
const OUTPUT_SUFFIX: &str = ".assetlist.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let raw = fs::read_to_string(path).map_err(|e| FilePathError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        RegistryError::Parse {
            file: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Registry source reading the chain-registry directory layout:
/// `<root>/<chain_name>/assetlist.json`, `<root>/<chain_name>/chain.json`,
/// and `<root>/_IBC/<chain_1>-<chain_2>.json`.
pub struct FsRegistry {
    root: PathBuf,
}

impl FsRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RegistrySource for FsRegistry {
    fn asset(&self, chain_name: &str, base_denom: &str) -> Result<Asset, Error> {
        let path = self.root.join(chain_name).join(ASSETLIST_FILE);
        let list: AssetList = read_json(&path)?;
        list.assets
            .into_iter()
            .find(|asset| asset.base == base_denom)
            .ok_or_else(|| {
                RegistryError::AssetNotFound {
                    chain_name: chain_name.to_string(),
                    base_denom: base_denom.to_string(),
                }
                .into()
            })
    }

    fn chain(&self, chain_name: &str) -> Result<ChainDescriptor, Error> {
        read_json(&self.root.join(chain_name).join(CHAIN_FILE))
    }

    fn topology(&self, chain_a: &str, chain_b: &str) -> Result<ChannelTopology, Error> {
        let path = self
            .root
            .join(IBC_DIR)
            .join(topology_file_name(chain_a, chain_b));
        if !path.is_file() {
            let (first, second) = ordered_pair(chain_a, chain_b);
            return Err(TopologyError::NotFound {
                chain_1: first.to_string(),
                chain_2: second.to_string(),
            }
            .into());
        }
        read_json(&path)
    }
}

/// Read `<zone_root>/<chain_id>/<chain_name>.zone.json`.
pub fn read_zone(zone_root: &Path, chain_id: &str, chain_name: &str) -> Result<Zone, Error> {
    let path = zone_root
        .join(chain_id)
        .join(format!("{chain_name}{ZONE_SUFFIX}"));
    read_json(&path)
}

/// Write the generated document to
/// `<zone_root>/<chain_id>/<chain_id>.assetlist.json`, pretty-printed with
/// 2-space indentation.
pub fn write_assetlist(
    zone_root: &Path,
    chain_id: &str,
    document: &serde_json::Value,
) -> Result<PathBuf, Error> {
    let path = zone_root
        .join(chain_id)
        .join(format!("{chain_id}{OUTPUT_SUFFIX}"));
    let rendered =
        serde_json::to_string_pretty(document).map_err(|e| Error::Generic(e.to_string()))?;
    fs::write(&path, rendered + "\n").map_err(|e| FilePathError::Unwritable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(path)
}
