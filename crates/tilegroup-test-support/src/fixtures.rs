//! Catalog and host context fixtures.

use serde_json::{Value, json};
use tilegroup_ui::{HostContext, OptionCatalog, TileOption};

/// Warranty tiers used throughout the suites, in display order.
pub const WARRANTY_TIERS: [(&str, i64); 3] = [("Basic", 1), ("Extended", 2), ("Lifetime", 3)];

/// Catalog built from [`WARRANTY_TIERS`].
#[must_use]
pub fn warranty_catalog() -> OptionCatalog {
    WARRANTY_TIERS
        .iter()
        .map(|(label, value)| TileOption::new(*label, *value))
        .collect()
}

/// JSON payload shaped like the host's context for the warranty tiers.
#[must_use]
pub fn warranty_context_json(raw: &Value) -> Value {
    let options: Vec<Value> = WARRANTY_TIERS
        .iter()
        .map(|(label, value)| json!({ "Label": label, "Value": value }))
        .collect();
    json!({
        "parameters": {
            "catalogSource": {
                "attributes": { "Options": options },
                "raw": raw
            }
        }
    })
}

/// Decoded host context for the warranty tiers with the given raw value.
///
/// # Panics
/// Panics if the fixture payload fails to decode, which indicates a broken
/// fixture rather than a test failure.
#[must_use]
pub fn warranty_context(raw: &Value) -> HostContext {
    match HostContext::from_json(&warranty_context_json(raw).to_string()) {
        Ok(context) => context,
        Err(err) => panic!("warranty fixture must decode: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegroup_ui::OptionValue;

    #[test]
    fn catalog_matches_tiers() {
        let catalog = warranty_catalog();
        assert_eq!(catalog.len(), WARRANTY_TIERS.len());
        assert_eq!(catalog.position(OptionValue::new(3)), Some(2));
    }

    #[test]
    fn context_round_trips_raw_value() {
        let context = warranty_context(&json!(2));
        assert_eq!(context.catalog(), warranty_catalog());
        assert_eq!(context.raw_value(), &json!(2));
    }
}
