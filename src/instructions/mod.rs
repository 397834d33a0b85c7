//! User-authored custom instructions appended to the rendered document.

pub mod loader;

pub use loader::{load_instructions, parse_instructions};

use crate::render::preamble::{CUSTOM_INSTRUCTIONS_CLOSE, CUSTOM_INSTRUCTIONS_OPEN};

/// Custom instruction text and the switch that turns it on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomInstructions {
    pub text: String,
    pub enabled: bool,
}

impl CustomInstructions {
    pub fn new(text: impl Into<String>, enabled: bool) -> Self {
        Self {
            text: text.into(),
            enabled,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// The delimited block, or `None` when disabled or blank.
    pub fn block(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(format!(
            "{}\n{}\n{}\n\n",
            CUSTOM_INSTRUCTIONS_OPEN, text, CUSTOM_INSTRUCTIONS_CLOSE
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_text_is_trimmed_and_wrapped() {
        let block = CustomInstructions::new("  Answer in French.\n\n", true).block();
        assert_eq!(
            block.as_deref(),
            Some("<custom_instructions>\nAnswer in French.\n</custom_instructions>\n\n")
        );
    }

    #[test]
    fn disabled_or_blank_yields_nothing() {
        assert_eq!(CustomInstructions::new("Be brief.", false).block(), None);
        assert_eq!(CustomInstructions::new(" \n\t ", true).block(), None);
        assert_eq!(CustomInstructions::disabled().block(), None);
    }
}
