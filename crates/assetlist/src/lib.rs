pub mod canonical;
pub mod error;
pub mod hash;
pub mod merge;
pub mod registry;
pub mod store;
pub mod trace;
pub mod types;

use std::env;
use std::path::PathBuf;

use serde_json::{json, Value};

use error::Error;
use registry::RegistrySource;

// Re-exports for convenience
pub use registry::StaticRegistry;
pub use store::FsRegistry;
pub use types::asset::{Asset, AssetList, Trace, TraceType};
pub use types::zone::{FrontendProperties, Zone, ZoneAsset};

/// Schema reference written into generated documents.
pub const OUTPUT_SCHEMA: &str = "../assetlist.schema.json";

/// Target chain identity and file roots, passed explicitly into every
/// component. No process-wide state.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Registry name of the target chain, e.g. "osmosis".
    pub chain_name: String,
    /// Chain identifier of the target chain, e.g. "osmosis-1".
    pub chain_id: String,
    pub registry_root: PathBuf,
    pub zone_root: PathBuf,
}

impl GeneratorConfig {
    /// Read the configuration from the environment: `CHAIN_NAME` and
    /// `CHAIN_ID` are required, `REGISTRY_ROOT` and `ZONE_ROOT` optional.
    pub fn from_env() -> Result<Self, Error> {
        let chain_name = env::var("CHAIN_NAME")
            .map_err(|_| Error::Generic("CHAIN_NAME is not set".to_string()))?;
        let chain_id =
            env::var("CHAIN_ID").map_err(|_| Error::Generic("CHAIN_ID is not set".to_string()))?;
        let registry_root = env::var_os("REGISTRY_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("chain-registry"));
        let zone_root = env::var_os("ZONE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self {
            chain_name,
            chain_id,
            registry_root,
            zone_root,
        })
    }
}

/// Per-run summary: what was produced and which zone requests failed.
#[derive(Debug)]
pub struct RunReport {
    pub chain_id: String,
    pub produced: usize,
    pub failures: Vec<AssetFailure>,
}

/// One excluded zone request and the structural error behind it.
#[derive(Debug)]
pub struct AssetFailure {
    pub chain_name: String,
    pub base_denom: String,
    pub error: Error,
}

/// Resolve one zone request into a finished, field-ordered asset record.
///
/// Foreign assets get a provenance chain and a content-hash identity;
/// same-chain assets pass through with only the metadata merge applied.
/// Structural failures (registry lookup, channel resolution) abort this
/// asset; descriptive enrichment failures degrade to in-band placeholders.
pub fn generate_asset(
    config: &GeneratorConfig,
    registry: &dyn RegistrySource,
    zone_asset: &ZoneAsset,
) -> Result<Value, Error> {
    let mut asset = registry.asset(&zone_asset.chain_name, &zone_asset.base_denom)?;

    if zone_asset.chain_name != config.chain_name {
        let existing = asset.traces.take();
        let hop = trace::build_hop(registry, &config.chain_name, zone_asset, existing.as_deref())?;
        let chain = trace::normalize_chain(hop, existing, &asset.display);
        // The front hop is the one just built; its path is always resolved.
        let path = chain
            .first()
            .and_then(|hop| hop.chain.as_ref())
            .and_then(|info| info.path.clone())
            .ok_or_else(|| Error::Generic("front hop lost its path".to_string()))?;
        let hashed = hash::ibc_denom(&path);
        hash::rebase_denom_units(&mut asset, &zone_asset.base_denom, &hashed);
        asset.base = hashed;
        asset.traces = Some(chain);
    }

    merge::apply(&mut asset, registry, zone_asset);

    let value = serde_json::to_value(&asset).map_err(|e| Error::Generic(e.to_string()))?;
    Ok(canonical::canonicalize_asset(&value))
}

/// Resolve every zone request in order and assemble the output document.
/// A failed asset is excluded and recorded; the run continues.
pub fn generate_assetlist(
    config: &GeneratorConfig,
    registry: &dyn RegistrySource,
    zone: &Zone,
) -> (Value, RunReport) {
    let mut assets = Vec::with_capacity(zone.assets.len());
    let mut failures = Vec::new();

    for zone_asset in &zone.assets {
        match generate_asset(config, registry, zone_asset) {
            Ok(asset) => assets.push(asset),
            Err(error) => failures.push(AssetFailure {
                chain_name: zone_asset.chain_name.clone(),
                base_denom: zone_asset.base_denom.clone(),
                error,
            }),
        }
    }

    let produced = assets.len();
    let document = json!({
        "$schema": OUTPUT_SCHEMA,
        "chain_name": config.chain_name,
        "assets": assets,
    });
    (
        document,
        RunReport {
            chain_id: config.chain_id.clone(),
            produced,
            failures,
        },
    )
}
