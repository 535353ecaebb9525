use serde_json::{json, Map, Value};

/// Reference object fixing the emitted key order of an asset record:
/// alphabetical at every nesting level. Values are irrelevant; only key
/// order and the nested shapes matter.
pub fn reference_asset() -> Value {
    json!({
        "additional_information": [],
        "address": "",
        "base": "",
        "coingecko_id": "",
        "denom_units": [],
        "description": "",
        "display": "",
        "keywords": [],
        "logo_URIs": {
            "png": "",
            "svg": ""
        },
        "name": "",
        "pretty_path": "",
        "symbol": "",
        "traces": [],
        "type_asset": ""
    })
}

/// Recursively reorder `value`'s keys to match `reference`'s key order.
/// Recurses into nested objects, passes sequences through untouched, and
/// drops keys absent from either side as well as null values.
pub fn reorder(value: &Value, reference: &Value) -> Value {
    match (value, reference) {
        (Value::Object(source), Value::Object(reference)) => {
            let mut out = Map::new();
            for (key, reference_value) in reference {
                if let Some(source_value) = source.get(key) {
                    if source_value.is_null() {
                        continue;
                    }
                    out.insert(key.clone(), reorder(source_value, reference_value));
                }
            }
            Value::Object(out)
        }
        _ => value.clone(),
    }
}

/// Reorder an asset record against the canonical reference.
pub fn canonicalize_asset(value: &Value) -> Value {
    reorder(value, &reference_asset())
}
