//! Parameter schema model and its prose rendering.
//!
//! The walk covers two levels only: tool → parameter → nested field.
//! Deeper nesting is left out of the rendered text. Keeping the catalog
//! shallow keeps it short and bounded for any input schema.

use serde_json::{Map, Value};
use thiserror::Error;

/// Failure to read a tool's schema text.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parameters declared by a tool's schema, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSchema {
    pub parameters: Vec<Parameter>,
}

/// One entry of the schema's `properties`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub required: bool,
    pub detail: ParameterDetail,
}

/// Shape of a parameter, decided once from its `type`, `properties` and
/// `items` fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterDetail {
    /// Any parameter without an expandable sub-structure.
    Scalar {
        kind: Option<String>,
        description: Option<String>,
    },
    /// `type: "object"` with its own `properties`.
    ObjectWithProperties {
        description: Option<String>,
        fields: Vec<NestedField>,
    },
    /// `type: "array"` whose `items` are `type: "object"` with `properties`.
    ArrayOfObjectsWithProperties {
        description: Option<String>,
        fields: Vec<NestedField>,
    },
    /// The property value is not a JSON object.
    Unknown,
}

/// Field of a nested object. Never expanded further.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedField {
    pub name: String,
    pub kind: Option<String>,
    pub description: Option<String>,
}

impl ParameterSchema {
    /// Parse schema text. Valid JSON that is not an object, or an object
    /// without `properties`, yields an empty schema.
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(properties) = value.get("properties").and_then(Value::as_object) else {
            return Self::default();
        };

        // `required` that is not an array counts as empty.
        let required: Vec<&str> = value
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let parameters = properties
            .iter()
            .map(|(name, detail)| Parameter {
                name: name.clone(),
                required: required.contains(&name.as_str()),
                detail: ParameterDetail::classify(detail),
            })
            .collect();

        Self { parameters }
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl ParameterDetail {
    pub fn classify(value: &Value) -> Self {
        if !value.is_object() {
            return Self::Unknown;
        }

        let kind = text_field(value, "type");
        let description = text_field(value, "description");

        match kind.as_deref() {
            Some("object") => {
                if let Some(props) = value.get("properties").and_then(Value::as_object) {
                    return Self::ObjectWithProperties {
                        description,
                        fields: nested_fields(props),
                    };
                }
            }
            Some("array") => {
                let items = value.get("items");
                let items_are_objects =
                    items.and_then(|i| i.get("type")).and_then(Value::as_str) == Some("object");
                let item_props = items
                    .and_then(|i| i.get("properties"))
                    .and_then(Value::as_object);

                // Both the explicit item type and the property map are needed.
                if let (true, Some(props)) = (items_are_objects, item_props) {
                    return Self::ArrayOfObjectsWithProperties {
                        description,
                        fields: nested_fields(props),
                    };
                }
            }
            _ => {}
        }

        Self::Scalar { kind, description }
    }

    /// Declared `type`, if any.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Scalar { kind, .. } => kind.as_deref(),
            Self::ObjectWithProperties { .. } => Some("object"),
            Self::ArrayOfObjectsWithProperties { .. } => Some("array"),
            Self::Unknown => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar { description, .. }
            | Self::ObjectWithProperties { description, .. }
            | Self::ArrayOfObjectsWithProperties { description, .. } => description.as_deref(),
            Self::Unknown => None,
        }
    }
}

/// Non-empty string field of a JSON object. Empty or non-string values read
/// as missing.
fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn nested_fields(properties: &Map<String, Value>) -> Vec<NestedField> {
    properties
        .iter()
        .map(|(name, value)| NestedField {
            name: name.clone(),
            kind: text_field(value, "type"),
            description: text_field(value, "description"),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Append the `Parameters:` block for `schema`. Emits nothing for an empty
/// schema.
pub fn render_parameters(out: &mut String, schema: &ParameterSchema) {
    if schema.is_empty() {
        return;
    }

    out.push_str("   Parameters:\n");
    for param in &schema.parameters {
        out.push_str(&format!(
            "   - {}: {} ({}) ({})\n",
            param.name,
            param.detail.description().unwrap_or(""),
            param.detail.kind().unwrap_or("any"),
            if param.required { "required" } else { "optional" },
        ));

        match &param.detail {
            ParameterDetail::ObjectWithProperties { fields, .. } => {
                out.push_str("     Properties:\n");
                render_nested_fields(out, fields);
            }
            ParameterDetail::ArrayOfObjectsWithProperties { fields, .. } => {
                out.push_str("     Array items (objects) with properties:\n");
                render_nested_fields(out, fields);
            }
            ParameterDetail::Scalar { .. } | ParameterDetail::Unknown => {}
        }
    }
    out.push('\n');
}

fn render_nested_fields(out: &mut String, fields: &[NestedField]) {
    for field in fields {
        out.push_str(&format!(
            "     - {}: {} ({})\n",
            field.name,
            field.description.as_deref().unwrap_or("No description"),
            field.kind.as_deref().unwrap_or("any"),
        ));
    }
}
