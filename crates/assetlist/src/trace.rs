use crate::error::{Error, TopologyError};
use crate::registry::{ordered_pair, RegistrySource};
use crate::types::asset::{Counterparty, Trace, TraceChainInfo, TraceType};
use crate::types::zone::ZoneAsset;

const TRANSFER_PORT: &str = "transfer";
const WASM_PORT: &str = "wasm.";
const CW20_PREFIX: &str = "cw20:";
const FACTORY_PREFIX: &str = "factory";

/// Channel scanning compares only the first 5 characters of each port id,
/// so `"transfer"` matches via `"trans"` and any wasm contract port matches
/// via `"wasm."`.
const PORT_MATCH_LEN: usize = 5;

/// Chains recognized as liquid-staking hubs. A `liquid-stake` origin hop
/// whose counterparty is one of these collapses out of the chain; any other
/// `liquid-stake` origin hop is relabeled as a plain transfer.
const LIQUID_STAKE_HUBS: &[&str] = &["persistence"];

/// Display denomination pinned to always collapse its origin hop.
const FORCED_COLLAPSE_DISPLAY: &str = "gwbtc";

fn ports_match(port_id: &str, expected: &str) -> bool {
    port_id
        .chars()
        .take(PORT_MATCH_LEN)
        .eq(expected.chars().take(PORT_MATCH_LEN))
}

/// Build the hop describing how `zone_asset` moves from its counterparty
/// chain onto `target_chain`.
///
/// `existing` is the trace chain already present on the copied registry
/// record, outermost hop first; when its front hop is a transfer, the new
/// hop's path embeds that hop's path (multi-hop chaining).
pub fn build_hop(
    registry: &dyn RegistrySource,
    target_chain: &str,
    zone_asset: &ZoneAsset,
    existing: Option<&[Trace]>,
) -> Result<Trace, Error> {
    let counterparty_chain = zone_asset.chain_name.as_str();
    let base_denom = zone_asset.base_denom.as_str();

    let mut trace_type = TraceType::Ibc;
    let mut counterparty_port = TRANSFER_PORT;
    if base_denom.starts_with(CW20_PREFIX) {
        trace_type = TraceType::IbcCw20;
        counterparty_port = WASM_PORT;
    }
    let target_port = TRANSFER_PORT;

    let topology = registry.topology(counterparty_chain, target_chain)?;
    let (chain_1, chain_2) = ordered_pair(counterparty_chain, target_chain);
    let counterparty_is_first = chain_1 == counterparty_chain;
    let (port_1, port_2) = if counterparty_is_first {
        (counterparty_port, target_port)
    } else {
        (target_port, counterparty_port)
    };

    let channel = topology
        .channels
        .iter()
        .find(|channel| {
            ports_match(&channel.chain_1.port_id, port_1)
                && ports_match(&channel.chain_2.port_id, port_2)
        })
        .ok_or_else(|| TopologyError::NoMatchingChannel {
            chain_1: chain_1.to_string(),
            chain_2: chain_2.to_string(),
            port_1: port_1.to_string(),
            port_2: port_2.to_string(),
        })?;

    let (counterparty_end, target_end) = if counterparty_is_first {
        (&channel.chain_1, &channel.chain_2)
    } else {
        (&channel.chain_2, &channel.chain_1)
    };

    let inner = inner_path(base_denom, existing)?;
    let path = format!(
        "{}/{}/{}",
        counterparty_end.port_id, target_end.channel_id, inner
    );

    // Ports are bookkeeping for plain transfers and are only emitted for
    // contract-bound hops; the target side never carries a chain_name.
    let keep_ports = trace_type == TraceType::IbcCw20;
    Ok(Trace {
        trace_type,
        chain: Some(TraceChainInfo {
            channel_id: Some(target_end.channel_id.clone()),
            port: keep_ports.then(|| target_end.port_id.clone()),
            path: Some(path),
            contract: None,
        }),
        counterparty: Counterparty {
            chain_name: counterparty_chain.to_string(),
            base_denom: base_denom.to_string(),
            channel_id: Some(counterparty_end.channel_id.clone()),
            port: keep_ports.then(|| counterparty_end.port_id.clone()),
            contract: None,
        },
        provider: None,
    })
}

/// The innermost component of the new hop's path.
fn inner_path(base_denom: &str, existing: Option<&[Trace]>) -> Result<String, Error> {
    if let Some(traces) = existing {
        if let Some(front) = traces.first() {
            if matches!(front.trace_type, TraceType::Ibc | TraceType::IbcCw20) {
                let path = front.chain.as_ref().and_then(|c| c.path.as_deref());
                return match path {
                    Some(path) => Ok(path.to_string()),
                    None => Err(TopologyError::MissingHopPath {
                        base_denom: base_denom.to_string(),
                    }
                    .into()),
                };
            }
        }
        // A non-transfer front hop contributes nothing to the path; the
        // denom is carried as-is.
        return Ok(base_denom.to_string());
    }
    if base_denom.starts_with(FACTORY_PREFIX) {
        // Factory denoms contain `/` separators, which are not valid inside
        // a path segment. Only untraced records qualify.
        return Ok(base_denom.replace('/', ":"));
    }
    Ok(base_denom.to_string())
}

/// Prepend the new hop onto the existing chain and apply the origin-end
/// collapsing rules. Index 0 of the result is the hop onto the target chain
/// (its path feeds the content hash); the last element is the asset's
/// ultimate origin.
pub fn normalize_chain(new_hop: Trace, existing: Option<Vec<Trace>>, display: &str) -> Vec<Trace> {
    let mut chain = Vec::with_capacity(1 + existing.as_ref().map_or(0, Vec::len));
    chain.push(new_hop);
    chain.extend(existing.unwrap_or_default());

    let collapse = chain.len() > 1
        && (display == FORCED_COLLAPSE_DISPLAY || origin_collapses(&chain[chain.len() - 1]));
    if collapse {
        chain.pop();
    } else if let Some(origin) = chain.last_mut() {
        match origin.trace_type {
            // Contract transfers and non-hub liquid staking keep the hop;
            // only the tag changes.
            TraceType::IbcCw20 | TraceType::LiquidStake => origin.trace_type = TraceType::Ibc,
            _ => {}
        }
    }
    chain
}

fn origin_collapses(origin: &Trace) -> bool {
    match origin.trace_type {
        TraceType::Wrapped | TraceType::Synthetic | TraceType::Forex => true,
        TraceType::LiquidStake => {
            LIQUID_STAKE_HUBS.contains(&origin.counterparty.chain_name.as_str())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StaticRegistry;

    fn zone_asset(chain_name: &str, base_denom: &str) -> ZoneAsset {
        ZoneAsset {
            chain_name: chain_name.to_string(),
            base_denom: base_denom.to_string(),
            chain_name_pretty: None,
            frontend_properties: None,
        }
    }

    fn hub_osmosis_registry() -> StaticRegistry {
        let mut registry = StaticRegistry::new();
        registry
            .add_topology_json(
                "cosmoshub",
                "osmosis",
                r#"{
                    "channels": [
                        {
                            "chain_1": { "channel_id": "channel-141", "port_id": "transfer" },
                            "chain_2": { "channel_id": "channel-0", "port_id": "transfer" }
                        }
                    ]
                }"#,
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_build_hop_transfer() {
        let registry = hub_osmosis_registry();
        let hop = build_hop(&registry, "osmosis", &zone_asset("cosmoshub", "uatom"), None).unwrap();

        assert_eq!(hop.trace_type, TraceType::Ibc);
        let chain = hop.chain.as_ref().unwrap();
        assert_eq!(chain.channel_id.as_deref(), Some("channel-0"));
        assert_eq!(chain.path.as_deref(), Some("transfer/channel-0/uatom"));
        assert!(chain.port.is_none());
        assert_eq!(hop.counterparty.chain_name, "cosmoshub");
        assert_eq!(hop.counterparty.channel_id.as_deref(), Some("channel-141"));
        assert!(hop.counterparty.port.is_none());
    }

    #[test]
    fn test_build_hop_counterparty_is_second() {
        // "osmosis" < "stargaze": the counterparty sits on the chain_2 side.
        let mut registry = StaticRegistry::new();
        registry
            .add_topology_json(
                "stargaze",
                "osmosis",
                r#"{
                    "channels": [
                        {
                            "chain_1": { "channel_id": "channel-75", "port_id": "transfer" },
                            "chain_2": { "channel_id": "channel-0", "port_id": "transfer" }
                        }
                    ]
                }"#,
            )
            .unwrap();
        let hop = build_hop(&registry, "osmosis", &zone_asset("stargaze", "ustars"), None).unwrap();

        let chain = hop.chain.as_ref().unwrap();
        assert_eq!(chain.channel_id.as_deref(), Some("channel-75"));
        assert_eq!(chain.path.as_deref(), Some("transfer/channel-75/ustars"));
        assert_eq!(hop.counterparty.channel_id.as_deref(), Some("channel-0"));
    }

    #[test]
    fn test_build_hop_cw20() {
        let mut registry = StaticRegistry::new();
        registry
            .add_topology_json(
                "juno",
                "osmosis",
                r#"{
                    "channels": [
                        {
                            "chain_1": { "channel_id": "channel-0", "port_id": "transfer" },
                            "chain_2": { "channel_id": "channel-42", "port_id": "transfer" }
                        },
                        {
                            "chain_1": { "channel_id": "channel-47", "port_id": "wasm.juno1contract" },
                            "chain_2": { "channel_id": "channel-169", "port_id": "transfer" }
                        }
                    ]
                }"#,
            )
            .unwrap();
        let hop = build_hop(
            &registry,
            "osmosis",
            &zone_asset("juno", "cw20:juno1xyz"),
            None,
        )
        .unwrap();

        assert_eq!(hop.trace_type, TraceType::IbcCw20);
        let chain = hop.chain.as_ref().unwrap();
        assert_eq!(chain.channel_id.as_deref(), Some("channel-169"));
        assert_eq!(
            chain.path.as_deref(),
            Some("wasm.juno1contract/channel-169/cw20:juno1xyz")
        );
        assert_eq!(chain.port.as_deref(), Some("transfer"));
        assert_eq!(hop.counterparty.port.as_deref(), Some("wasm.juno1contract"));
        assert_eq!(hop.counterparty.channel_id.as_deref(), Some("channel-47"));
    }

    #[test]
    fn test_build_hop_factory_denom_rewrite() {
        let mut registry = StaticRegistry::new();
        registry
            .add_topology_json(
                "kujira",
                "osmosis",
                r#"{
                    "channels": [
                        {
                            "chain_1": { "channel_id": "channel-3", "port_id": "transfer" },
                            "chain_2": { "channel_id": "channel-9", "port_id": "transfer" }
                        }
                    ]
                }"#,
            )
            .unwrap();
        let hop = build_hop(
            &registry,
            "osmosis",
            &zone_asset("kujira", "factory/kujira1abc/urcpt"),
            None,
        )
        .unwrap();

        let chain = hop.chain.as_ref().unwrap();
        assert_eq!(
            chain.path.as_deref(),
            Some("transfer/channel-9/factory:kujira1abc:urcpt")
        );
        // The rewrite is path-local; the counterparty keeps the raw denom.
        assert_eq!(hop.counterparty.base_denom, "factory/kujira1abc/urcpt");
    }

    #[test]
    fn test_build_hop_factory_rewrite_skipped_when_traced() {
        let mut registry = StaticRegistry::new();
        registry
            .add_topology_json(
                "kujira",
                "osmosis",
                r#"{
                    "channels": [
                        {
                            "chain_1": { "channel_id": "channel-3", "port_id": "transfer" },
                            "chain_2": { "channel_id": "channel-9", "port_id": "transfer" }
                        }
                    ]
                }"#,
            )
            .unwrap();
        let existing = vec![Trace {
            trace_type: TraceType::Bridge,
            chain: None,
            counterparty: Counterparty {
                chain_name: "ethereum".to_string(),
                base_denom: "0xabc".to_string(),
                channel_id: None,
                port: None,
                contract: None,
            },
            provider: Some("Axelar".to_string()),
        }];
        let hop = build_hop(
            &registry,
            "osmosis",
            &zone_asset("kujira", "factory/kujira1abc/urcpt"),
            Some(&existing),
        )
        .unwrap();

        // The record already carries provenance, so the denom keeps its
        // raw separators.
        let chain = hop.chain.as_ref().unwrap();
        assert_eq!(
            chain.path.as_deref(),
            Some("transfer/channel-9/factory/kujira1abc/urcpt")
        );
    }

    #[test]
    fn test_build_hop_chains_previous_path() {
        let mut registry = StaticRegistry::new();
        registry
            .add_topology_json(
                "osmosis",
                "terra",
                r#"{
                    "channels": [
                        {
                            "chain_1": { "channel_id": "channel-251", "port_id": "transfer" },
                            "chain_2": { "channel_id": "channel-1", "port_id": "transfer" }
                        }
                    ]
                }"#,
            )
            .unwrap();
        let existing = vec![Trace {
            trace_type: TraceType::Ibc,
            chain: Some(TraceChainInfo {
                channel_id: Some("channel-1".to_string()),
                port: None,
                path: Some("transfer/channel-1/ux".to_string()),
                contract: None,
            }),
            counterparty: Counterparty {
                chain_name: "chaina".to_string(),
                base_denom: "ux".to_string(),
                channel_id: Some("channel-2".to_string()),
                port: None,
                contract: None,
            },
            provider: None,
        }];
        let hop = build_hop(
            &registry,
            "osmosis",
            &zone_asset("terra", "ibc/4E9DB68F"),
            Some(&existing),
        )
        .unwrap();

        let path = hop.chain.as_ref().unwrap().path.as_deref().unwrap();
        assert_eq!(path, "transfer/channel-251/transfer/channel-1/ux");
        // The outer path embeds the inner hop's path as a suffix.
        assert!(path.ends_with("transfer/channel-1/ux"));
    }

    #[test]
    fn test_build_hop_missing_previous_path_fails() {
        let registry = hub_osmosis_registry();
        let existing = vec![Trace {
            trace_type: TraceType::Ibc,
            chain: Some(TraceChainInfo {
                channel_id: Some("channel-1".to_string()),
                port: None,
                path: None,
                contract: None,
            }),
            counterparty: Counterparty {
                chain_name: "chaina".to_string(),
                base_denom: "ux".to_string(),
                channel_id: None,
                port: None,
                contract: None,
            },
            provider: None,
        }];
        let result = build_hop(
            &registry,
            "osmosis",
            &zone_asset("cosmoshub", "ibc/DEAD"),
            Some(&existing),
        );
        assert!(matches!(
            result,
            Err(Error::Topology(TopologyError::MissingHopPath { .. }))
        ));
    }

    #[test]
    fn test_build_hop_no_matching_channel() {
        let mut registry = StaticRegistry::new();
        registry
            .add_topology_json(
                "cosmoshub",
                "osmosis",
                r#"{
                    "channels": [
                        {
                            "chain_1": { "channel_id": "channel-1", "port_id": "icahost" },
                            "chain_2": { "channel_id": "channel-2", "port_id": "icacontroller-0" }
                        }
                    ]
                }"#,
            )
            .unwrap();
        let result = build_hop(&registry, "osmosis", &zone_asset("cosmoshub", "uatom"), None);
        assert!(matches!(
            result,
            Err(Error::Topology(TopologyError::NoMatchingChannel { .. }))
        ));
    }

    #[test]
    fn test_build_hop_missing_topology() {
        let registry = StaticRegistry::new();
        let result = build_hop(&registry, "osmosis", &zone_asset("cosmoshub", "uatom"), None);
        assert!(matches!(
            result,
            Err(Error::Topology(TopologyError::NotFound { .. }))
        ));
    }

    fn bare_hop(trace_type: TraceType, counterparty_chain: &str) -> Trace {
        Trace {
            trace_type,
            chain: None,
            counterparty: Counterparty {
                chain_name: counterparty_chain.to_string(),
                base_denom: "denom".to_string(),
                channel_id: None,
                port: None,
                contract: None,
            },
            provider: None,
        }
    }

    #[test]
    fn test_normalize_relabels_cw20_origin() {
        let new_hop = bare_hop(TraceType::IbcCw20, "juno");
        let chain = normalize_chain(new_hop, None, "neta");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].trace_type, TraceType::Ibc);
    }

    #[test]
    fn test_normalize_drops_wrapped_origin() {
        let new_hop = bare_hop(TraceType::Ibc, "axelar");
        let existing = vec![
            bare_hop(TraceType::Bridge, "ethereum"),
            bare_hop(TraceType::Wrapped, "bitcoin"),
        ];
        let chain = normalize_chain(new_hop, Some(existing), "wbtc");
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1].trace_type, TraceType::Bridge);
        assert_eq!(chain[1].counterparty.chain_name, "ethereum");
    }

    #[test]
    fn test_normalize_liquid_stake_hub_collapses() {
        let new_hop = bare_hop(TraceType::Ibc, "cosmoshub");
        let existing = vec![bare_hop(TraceType::LiquidStake, "persistence")];
        let chain = normalize_chain(new_hop, Some(existing), "stk");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].counterparty.chain_name, "cosmoshub");
    }

    #[test]
    fn test_normalize_liquid_stake_other_relabels() {
        let new_hop = bare_hop(TraceType::Ibc, "quicksilver");
        let existing = vec![bare_hop(TraceType::LiquidStake, "stride")];
        let chain = normalize_chain(new_hop, Some(existing), "qatom");
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1].trace_type, TraceType::Ibc);
        assert_eq!(chain[1].counterparty.chain_name, "stride");
    }

    #[test]
    fn test_normalize_gwbtc_forces_collapse() {
        let new_hop = bare_hop(TraceType::Ibc, "gravitybridge");
        let existing = vec![bare_hop(TraceType::Bridge, "ethereum")];
        let chain = normalize_chain(new_hop, Some(existing), "gwbtc");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].counterparty.chain_name, "gravitybridge");
    }

    #[test]
    fn test_normalize_plain_transfer_untouched() {
        let new_hop = bare_hop(TraceType::Ibc, "cosmoshub");
        let chain = normalize_chain(new_hop, None, "atom");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].trace_type, TraceType::Ibc);
    }
}
