//! Loads custom instructions from a markdown file.
//!
//! The file may start with YAML frontmatter carrying an `enabled` switch:
//!
//! ```markdown
//! ---
//! enabled: true
//! ---
//! Always answer in French.
//! ```
//!
//! Without frontmatter (or without the key) the instructions are enabled.

use super::CustomInstructions;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Default, serde::Deserialize)]
struct InstructionsFrontmatter {
    #[serde(default)]
    enabled: Option<bool>,
}

/// Load instructions from `path`. A missing file means no instructions.
pub fn load_instructions(path: &Path) -> Result<CustomInstructions> {
    if !path.exists() {
        debug!("Instructions file does not exist: {:?}", path);
        return Ok(CustomInstructions::disabled());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read instructions file {}", path.display()))?;
    let instructions = parse_instructions(&content)
        .with_context(|| format!("Failed to parse instructions file {}", path.display()))?;

    info!(
        "Loaded custom instructions from {:?} (enabled: {})",
        path, instructions.enabled
    );
    Ok(instructions)
}

/// Parse instructions markdown with optional frontmatter.
pub fn parse_instructions(content: &str) -> Result<CustomInstructions> {
    let (frontmatter_str, body) = split_frontmatter(content);

    let fm: InstructionsFrontmatter = if frontmatter_str.is_empty() {
        InstructionsFrontmatter::default()
    } else {
        serde_yaml::from_str(frontmatter_str).context("Invalid instructions frontmatter")?
    };

    Ok(CustomInstructions::new(body, fm.enabled.unwrap_or(true)))
}

/// Split YAML frontmatter (between `---` markers) from the rest of the content.
fn split_frontmatter(content: &str) -> (&str, String) {
    let trimmed = content.trim_start();

    if !trimmed.starts_with("---") {
        return ("", content.to_string());
    }

    let after_first = &trimmed[3..];
    if let Some(end_idx) = after_first.find("\n---") {
        let fm = after_first[..end_idx].trim();
        let body = &after_first[end_idx + 4..];
        (fm, body.trim_start_matches('\n').to_string())
    } else {
        ("", content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_markdown_is_enabled() {
        let ci = parse_instructions("Prefer short answers.\n").unwrap();
        assert!(ci.enabled);
        assert_eq!(ci.text, "Prefer short answers.\n");
    }

    #[test]
    fn frontmatter_can_disable() {
        let ci = parse_instructions("---\nenabled: false\n---\nIgnored for now.\n").unwrap();
        assert!(!ci.enabled);
        assert_eq!(ci.text, "Ignored for now.\n");
        assert_eq!(ci.block(), None);
    }

    #[test]
    fn unterminated_frontmatter_is_body() {
        let ci = parse_instructions("---\nenabled: false\n").unwrap();
        assert!(ci.enabled);
        assert!(ci.text.contains("enabled: false"));
    }

    #[test]
    fn bad_frontmatter_is_an_error() {
        assert!(parse_instructions("---\nenabled: [oops\n---\nbody").is_err());
    }

    #[test]
    fn missing_file_is_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let ci = load_instructions(&dir.path().join("INSTRUCTIONS.md")).unwrap();
        assert_eq!(ci, CustomInstructions::disabled());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "---\nenabled: true\n---\nUse metric units.").unwrap();

        let ci = load_instructions(file.path()).unwrap();
        assert!(ci.enabled);
        assert_eq!(ci.text, "Use metric units.");
    }
}
