//! Tool catalog loading.
//!
//! A catalog file is JSON, either a bare array of tools or an object with a
//! `tools` array (the shape of an MCP `tools/list` result). The schema of an
//! entry may be given as `schema` (text or object) or as `inputSchema` /
//! `input_schema` (object).

use crate::types::Tool;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Schema used for entries that declare none.
const EMPTY_SCHEMA: &str = "{}";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<RawTool>),
    Wrapped { tools: Vec<RawTool> },
}

#[derive(Debug, Deserialize)]
struct RawTool {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    schema: Option<Value>,
    #[serde(default, alias = "inputSchema")]
    input_schema: Option<Value>,
}

impl RawTool {
    fn into_tool(self) -> Tool {
        let schema = self
            .schema
            .or(self.input_schema)
            .map(schema_text)
            .unwrap_or_else(|| EMPTY_SCHEMA.to_string());

        Tool {
            name: self.name,
            schema,
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Schema strings are kept verbatim, even when they are not valid JSON.
fn schema_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Load a tool catalog from a JSON file.
pub fn load_tools(path: &Path) -> Result<Vec<Tool>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tool catalog {}", path.display()))?;
    let tools = parse_tools(&contents)
        .with_context(|| format!("Failed to parse tool catalog {}", path.display()))?;

    info!("Loaded {} tools from {:?}", tools.len(), path);
    Ok(tools)
}

/// Parse a tool catalog. Nameless entries are dropped; for duplicate names
/// the first entry wins.
pub fn parse_tools(contents: &str) -> Result<Vec<Tool>> {
    let catalog: CatalogFile =
        serde_json::from_str(contents).context("Invalid tool catalog JSON")?;
    let raw = match catalog {
        CatalogFile::List(tools) => tools,
        CatalogFile::Wrapped { tools } => tools,
    };

    let mut seen = HashSet::new();
    let mut tools = Vec::with_capacity(raw.len());

    for (index, entry) in raw.into_iter().enumerate() {
        let tool = entry.into_tool();
        if tool.name.is_empty() {
            warn!("Skipping catalog entry {} without a name", index);
            continue;
        }
        if !seen.insert(tool.name.clone()) {
            warn!("Skipping duplicate tool '{}'", tool.name);
            continue;
        }
        tools.push(tool);
    }

    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bare_array_with_string_schema() {
        let tools = parse_tools(
            r#"[{"name": "search", "schema": "{\"properties\":{}}", "description": "Searches"}]"#,
        )
        .unwrap();
        assert_eq!(
            tools,
            vec![Tool::new("search", r#"{"properties":{}}"#, "Searches")]
        );
    }

    #[test]
    fn wrapped_list_with_input_schema_object() {
        let tools = parse_tools(
            r#"{"tools": [{"name": "read", "inputSchema": {"type": "object", "properties": {"path": {"type": "string"}}}}]}"#,
        )
        .unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].description, "");
        assert_eq!(
            tools[0].schema,
            r#"{"type":"object","properties":{"path":{"type":"string"}}}"#
        );
    }

    #[test]
    fn malformed_schema_text_is_kept() {
        let tools = parse_tools(r#"[{"name": "bad", "schema": "{broken"}]"#).unwrap();
        assert_eq!(tools[0].schema, "{broken");
    }

    #[test]
    fn missing_schema_defaults_to_empty_object() {
        let tools = parse_tools(r#"[{"name": "ping", "description": null}]"#).unwrap();
        assert_eq!(tools[0].schema, EMPTY_SCHEMA);
        assert_eq!(tools[0].description, "");
    }

    #[test]
    fn nameless_and_duplicate_entries_are_dropped() {
        let tools = parse_tools(
            r#"[{"name": "a", "description": "first"}, {"description": "anon"}, {"name": "b"}, {"name": "a", "description": "second"}]"#,
        )
        .unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(tools[0].description, "first");
    }

    #[test]
    fn invalid_catalog_is_an_error() {
        assert!(parse_tools("not json").is_err());
        assert!(parse_tools(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "ping"}}]"#).unwrap();

        let tools = load_tools(file.path()).unwrap();
        assert_eq!(tools[0].name, "ping");
        assert!(load_tools(&file.path().with_extension("missing")).is_err());
    }
}
