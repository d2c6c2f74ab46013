//! Host lifecycle contract and the context payload it delivers.
//!
//! # Design
//! - Context types mirror the host's parameter bag; every field defaults so
//!   partial payloads still produce a usable (possibly empty) widget.
//! - [`StandardControl`] is the fixed init/update/outputs/destroy shape, kept
//!   free of browser types so controllers can be driven directly in tests.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::catalog::{OptionCatalog, OptionValue, TileOption};
use crate::error::{WidgetError, WidgetResult};

/// Callback the host supplies to learn that outputs changed.
pub type ChangeNotifier = Rc<dyn Fn()>;

/// Context snapshot handed over by the host on `init` and `update_view`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HostContext {
    /// Bound parameters.
    #[serde(default)]
    pub parameters: HostParameters,
}

impl HostContext {
    /// Decode a context from its JSON representation.
    ///
    /// # Errors
    /// Returns [`WidgetError::InvalidContext`] when the payload is not valid
    /// JSON or has the wrong shape.
    pub fn from_json(payload: &str) -> WidgetResult<Self> {
        serde_json::from_str(payload).map_err(|source| WidgetError::InvalidContext { source })
    }

    /// Build a context around a parameter bag.
    #[must_use]
    pub const fn with_parameters(parameters: HostParameters) -> Self {
        Self { parameters }
    }

    /// Options exposed by the bound choice field, in host order.
    #[must_use]
    pub fn catalog(&self) -> OptionCatalog {
        self.parameters
            .catalog_source
            .attributes
            .as_ref()
            .map(|attributes| {
                attributes
                    .options
                    .iter()
                    .map(|option| TileOption::new(option.label.clone(), option.value))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Raw field value as reported by the host (untyped).
    #[must_use]
    pub const fn raw_value(&self) -> &Value {
        &self.parameters.catalog_source.raw
    }
}

/// Parameter bag of the control.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HostParameters {
    /// The bound choice field.
    #[serde(default, rename = "catalogSource", alias = "warranty")]
    pub catalog_source: CatalogParameter,
    /// Optional tile width override.
    #[serde(default, rename = "tileWidth")]
    pub tile_width: Option<NumberParameter>,
    /// Optional tile height override.
    #[serde(default, rename = "tileHeight")]
    pub tile_height: Option<NumberParameter>,
}

/// Choice field parameter: metadata plus the current record value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CatalogParameter {
    /// Field metadata, absent while the host is still loading.
    #[serde(default)]
    pub attributes: Option<CatalogAttributes>,
    /// Current value; anything non-numeric means "no selection".
    #[serde(default)]
    pub raw: Value,
}

/// Choice field metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogAttributes {
    /// Declared options in display order.
    #[serde(default, rename = "Options")]
    pub options: Vec<HostOption>,
}

/// One option as declared by the host.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HostOption {
    /// Display label.
    #[serde(rename = "Label")]
    pub label: String,
    /// Stored value.
    #[serde(rename = "Value")]
    pub value: i64,
}

/// Numeric parameter with an untyped raw value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NumberParameter {
    /// Raw value.
    #[serde(default)]
    pub raw: Value,
}

/// Outputs pulled by the host after a change notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileGroupOutputs {
    /// Selected value, `null` when nothing is selected.
    pub value: Option<OptionValue>,
}

/// Lifecycle the host drives. Host callbacks may re-enter these methods
/// while a change notification is in flight.
pub trait StandardControl {
    /// Mount the control with its first context snapshot.
    fn init(&self, context: &HostContext, notify: ChangeNotifier);

    /// React to a new context snapshot.
    fn update_view(&self, context: &HostContext);

    /// Current outputs.
    fn get_outputs(&self) -> TileGroupOutputs;

    /// Release bindings and clear the mounted view.
    fn destroy(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn context_decodes_catalog_and_raw_value() -> WidgetResult<()> {
        let payload = json!({
            "parameters": {
                "catalogSource": {
                    "attributes": { "Options": [
                        { "Label": "Basic", "Value": 1 },
                        { "Label": "Extended", "Value": 2 }
                    ]},
                    "raw": 2
                }
            }
        });
        let context = HostContext::from_json(&payload.to_string())?;
        let catalog = context.catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|o| o.label.as_str()), Some("Extended"));
        assert_eq!(OptionValue::from_raw(context.raw_value()), Some(OptionValue::new(2)));
        Ok(())
    }

    #[test]
    fn warranty_alias_is_accepted() -> WidgetResult<()> {
        let payload = r#"{"parameters":{"warranty":{"attributes":{"Options":[{"Label":"Lifetime","Value":3}]},"raw":null}}}"#;
        let context = HostContext::from_json(payload)?;
        assert_eq!(context.catalog().len(), 1);
        assert!(context.raw_value().is_null());
        Ok(())
    }

    #[test]
    fn partial_payloads_default_to_empty() -> WidgetResult<()> {
        let context = HostContext::from_json("{}")?;
        assert!(context.catalog().is_empty());
        assert!(context.raw_value().is_null());
        let context = HostContext::from_json(r#"{"parameters":{"catalogSource":{"raw":"n/a"}}}"#)?;
        assert!(context.catalog().is_empty());
        Ok(())
    }

    #[test]
    fn malformed_payload_reports_invalid_context() {
        let err = HostContext::from_json("not json").unwrap_err();
        assert!(matches!(err, WidgetError::InvalidContext { .. }));
    }

    #[test]
    fn outputs_serialize_null_sentinel() -> Result<(), serde_json::Error> {
        let none = serde_json::to_value(TileGroupOutputs { value: None })?;
        assert_eq!(none, json!({ "value": null }));
        let some = serde_json::to_value(TileGroupOutputs {
            value: Some(OptionValue::new(3)),
        })?;
        assert_eq!(some, json!({ "value": 3 }));
        Ok(())
    }
}
