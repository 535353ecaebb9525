use crate::error::marker;
use crate::registry::RegistrySource;
use crate::types::asset::{info_entry, Asset, InfoEntry, TraceType};
use crate::types::zone::ZoneAsset;

/// Smart-contract chains with a recognized token block explorer, mapped to
/// the explorer's token URL root.
const EXPLORERS: &[(&str, &str)] = &[
    ("avalanche", "https://snowtrace.io/token/"),
    ("binancesmartchain", "https://bscscan.com/token/"),
    ("ethereum", "https://etherscan.io/token/"),
    ("fantom", "https://ftmscan.com/token/"),
    ("moonbeam", "https://moonscan.io/token/"),
    ("polygon", "https://polygonscan.com/token/"),
];

const COIN_LANDING_ROOT: &str = "https://www.coinlanding.page/post/";
const SINFONIA_ROOT: &str = "https://app.sinfonia.zone/fantokens/";

/// Keyword marking an asset as tradable on the Sinfonia DEX.
const SINFONIA_KEYWORD: &str = "Sinfonia";

/// Key of the source-code entry in `additional_information`.
const SOURCE_KEY: &str = "git_repo";

fn explorer_root(chain_name: &str) -> Option<&'static str> {
    EXPLORERS
        .iter()
        .find(|(name, _)| *name == chain_name)
        .map(|(_, root)| *root)
}

/// Overlay descriptive metadata onto the copied registry record: the origin
/// chain's pretty name, zone-supplied overrides, and derived
/// `additional_information` links.
///
/// Everything here is best-effort enrichment — a failed `chain.json` lookup
/// degrades to an in-band placeholder marker, never an error. Trace and hash
/// correctness are settled before this step runs.
pub fn apply(asset: &mut Asset, registry: &dyn RegistrySource, zone_asset: &ZoneAsset) {
    let chain = registry.chain(&zone_asset.chain_name).ok();

    asset.name = chain
        .as_ref()
        .and_then(|c| c.pretty_name.clone())
        .or_else(|| zone_asset.chain_name_pretty.clone())
        .unwrap_or_else(|| marker::CHAIN_REGISTRY.to_string());

    let props = zone_asset.frontend_properties.as_ref();
    if let Some(props) = props {
        if let Some(symbol) = &props.symbol {
            asset.symbol = symbol.clone();
        }
        if let Some(description) = &props.description {
            asset.description = Some(description.clone());
        }
        if let Some(pretty_path) = &props.pretty_path {
            asset.pretty_path = Some(pretty_path.clone());
        }
        if let Some(logo_uris) = &props.logo_uris {
            asset.logo_uris = Some(logo_uris.clone());
        }
        if let Some(coingecko_id) = &props.coingecko_id {
            asset.coingecko_id = Some(coingecko_id.clone());
        }
        // Registry keywords first, overrides appended, no deduplication.
        if let Some(extra) = &props.keywords {
            asset
                .keywords
                .get_or_insert_with(Vec::new)
                .extend(extra.iter().cloned());
        }
    }

    // The origin hop (last element of the outermost-first chain) identifies
    // where the asset ultimately came from.
    let origin = asset
        .traces
        .as_ref()
        .and_then(|traces| traces.last())
        .map(|hop| {
            (
                hop.trace_type,
                hop.counterparty.chain_name.clone(),
                hop.counterparty.base_denom.clone(),
            )
        });

    let mut info: Vec<InfoEntry> = Vec::new();
    let mut override_repo: Option<String> = None;
    if let Some(entries) = props.and_then(|p| p.additional_information.as_ref()) {
        for entry in entries {
            if let Some(value) = entry.get(SOURCE_KEY) {
                // The source link has its own precedence rule below.
                if override_repo.is_none() {
                    override_repo = value.as_str().map(str::to_string);
                }
                continue;
            }
            info.push(entry.clone());
        }
    }

    // A plain-transfer origin identifies a native IBC asset, which has no
    // contract to link to on its home chain.
    if let Some((origin_type, origin_chain, origin_denom)) = &origin {
        if *origin_type != TraceType::Ibc {
            if let Some(root) = explorer_root(origin_chain) {
                info.push(info_entry(
                    "block_explorer_link",
                    format!("{root}{origin_denom}"),
                ));
            }
        }
    }

    let website = chain
        .as_ref()
        .and_then(|c| c.website.clone())
        .unwrap_or_else(|| marker::CHAIN_REGISTRY.to_string());
    info.push(info_entry("chain_website", website));

    info.push(info_entry(
        "coin_landing_page",
        format!("{COIN_LANDING_ROOT}{}", zone_asset.chain_name),
    ));

    let repo = override_repo
        .or_else(|| chain.as_ref().and_then(|c| c.git_repo().map(str::to_string)))
        .unwrap_or_else(|| marker::CHAIN_REGISTRY.to_string());
    info.push(info_entry(SOURCE_KEY, repo));

    let keywords = asset.keywords.as_deref().unwrap_or_default();
    if keywords.iter().any(|keyword| keyword == SINFONIA_KEYWORD) {
        if let Some((_, _, origin_denom)) = &origin {
            info.push(info_entry(
                "sinfonia_link",
                format!("{SINFONIA_ROOT}{origin_denom}"),
            ));
        }
    }

    asset.additional_information = Some(info);
}
