use sha2::{Digest, Sha256};

use crate::types::asset::Asset;

/// Derive the canonical on-chain identifier for a traced asset from its
/// full transfer path: `"ibc/" + uppercase-hex(SHA-256(path))`.
pub fn ibc_denom(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    format!("ibc/{}", hex::encode_upper(digest))
}

/// Rewrite every denom unit that still carries the pre-trace base
/// denomination: the old denomination moves into the unit's aliases and the
/// unit's denom becomes the content hash. `asset.base` itself is replaced
/// by the caller.
pub fn rebase_denom_units(asset: &mut Asset, old_base: &str, new_base: &str) {
    for unit in &mut asset.denom_units {
        if unit.denom == old_base {
            unit.aliases
                .get_or_insert_with(Vec::new)
                .push(old_base.to_string());
            unit.denom = new_base.to_string();
        }
    }
}
