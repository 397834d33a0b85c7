//! Shared types used across toolprompt.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// A callable tool as exposed to the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique, non-empty function name.
    pub name: String,
    /// Parameter schema as JSON text. Kept as text because it may be malformed.
    pub schema: String,
    /// Free-text description, possibly empty.
    #[serde(default)]
    pub description: String,
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        schema: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
