//! Configuration schema for toolprompt.toml.

use crate::instructions::{self, CustomInstructions};
use crate::render::{PlatformFragment, PlatformRegistry};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolpromptConfig {
    /// Host identifier used when none is given on the command line.
    pub host: String,

    /// Inline custom instructions.
    pub custom_instructions: String,

    /// Whether the inline custom instructions are appended.
    pub custom_instructions_enabled: bool,

    /// Markdown file with custom instructions. Takes precedence over the
    /// inline text when set.
    pub instructions_path: String,

    /// Keep the built-in gemini/chatgpt fragments.
    pub include_default_platforms: bool,

    /// Log level (debug, info, warn, error).
    pub log_level: String,

    /// Extra platforms, checked after the built-in ones.
    pub platforms: Vec<PlatformFragment>,
}

impl Default for ToolpromptConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            custom_instructions: String::new(),
            custom_instructions_enabled: false,
            instructions_path: String::new(),
            include_default_platforms: true,
            log_level: "info".into(),
            platforms: Vec::new(),
        }
    }
}

impl ToolpromptConfig {
    /// Resolve a path that may contain `~` to an absolute path.
    pub fn resolve_path(&self, path: &str) -> String {
        shellexpand::tilde(path).into_owned()
    }

    /// Platform registry described by this config.
    pub fn platform_registry(&self) -> PlatformRegistry {
        let mut registry = if self.include_default_platforms {
            PlatformRegistry::default()
        } else {
            PlatformRegistry::empty()
        };
        for p in &self.platforms {
            registry.register(p.token.clone(), p.fragment.clone());
        }
        registry
    }

    /// Custom instructions from the instructions file, or the inline text.
    pub fn custom_instructions(&self) -> Result<CustomInstructions> {
        if self.instructions_path.is_empty() {
            return Ok(CustomInstructions::new(
                self.custom_instructions.clone(),
                self.custom_instructions_enabled,
            ));
        }
        let resolved = self.resolve_path(&self.instructions_path);
        instructions::load_instructions(Path::new(&resolved))
    }
}
