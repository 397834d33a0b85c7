//! Instruction document renderer.
//!
//! Sections (in order):
//! 1. Function calling protocol (fixed)
//! 2. Platform fragments matching the host
//! 3. Tool catalog with parameter schemas
//! 4. Custom instructions (when enabled)
//! 5. Closing delimiter
//!
//! An empty tool list collapses the whole document to a fixed notice.

pub mod golden;
pub mod platform;
pub mod preamble;
pub mod schema;

pub use platform::{PlatformFragment, PlatformRegistry};
pub use schema::{NestedField, Parameter, ParameterDetail, ParameterSchema, SchemaError};

use crate::instructions::CustomInstructions;
use crate::types::Tool;
use preamble::*;
use tracing::{debug, warn};

/// Renders tool-use instructions. Holds only the platform registry, so one
/// renderer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct InstructionRenderer {
    platforms: PlatformRegistry,
}

impl InstructionRenderer {
    pub fn new(platforms: PlatformRegistry) -> Self {
        Self { platforms }
    }

    pub fn platforms(&self) -> &PlatformRegistry {
        &self.platforms
    }

    /// Build the complete instruction document.
    pub fn render(&self, tools: &[Tool], instructions: &CustomInstructions, host: &str) -> String {
        if tools.is_empty() {
            debug!("No tools available, rendering fallback notice");
            return TOOLS_UNAVAILABLE.to_string();
        }

        let mut out = String::with_capacity(PREAMBLE.len() + tools.len() * 512);

        out.push_str(PREAMBLE);

        for fragment in self.platforms.fragments_for(host) {
            out.push_str(fragment);
        }

        out.push_str(TOOLS_HEADER);
        for tool in tools {
            render_tool(&mut out, tool);
        }

        if let Some(block) = instructions.block() {
            out.push_str(&block);
        }

        out.push_str(CLOSING_DELIMITER);

        debug!(
            "Instructions: {} chars, {} tools, host {:?}",
            out.len(),
            tools.len(),
            host
        );
        out
    }
}

/// Render with the built-in platforms.
pub fn render_instructions(
    tools: &[Tool],
    custom_instructions: &str,
    custom_instructions_enabled: bool,
    host: &str,
) -> String {
    InstructionRenderer::default().render(
        tools,
        &CustomInstructions::new(custom_instructions, custom_instructions_enabled),
        host,
    )
}

/// Append one catalog entry. A schema that fails to parse replaces the rest
/// of the entry with a fallback line.
fn render_tool(out: &mut String, tool: &Tool) {
    out.push_str(&format!(" - {}\n", tool.name));

    let schema = match ParameterSchema::parse(&tool.schema) {
        Ok(schema) => schema,
        Err(e) => {
            warn!("Schema for tool '{}' unavailable: {}", tool.name, e);
            out.push_str(SCHEMA_UNAVAILABLE);
            return;
        }
    };

    if !tool.description.is_empty() {
        out.push_str(&format!("   Description: {}\n", tool.description));
    }

    schema::render_parameters(out, &schema);
}
