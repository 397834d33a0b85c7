//! Host-specific instruction fragments.
//!
//! A fragment is selected when its token appears (case-sensitive) anywhere in
//! the host identifier. Every matching fragment is appended, in registration
//! order.

use serde::{Deserialize, Serialize};
use tracing::warn;

const GEMINI_FRAGMENT: &str = r#"
## Gemini Notes

- Write the function call block as plain text in your reply. Do not use any
  built-in extension, code execution or search feature to make the call.
- Keep the `xml` code fence; it is how the call is detected.
- Emit the block once per turn and do not repeat it after the result arrives.
"#;

const CHATGPT_FRAGMENT: &str = r#"
## ChatGPT Notes

- Do not use canvas, browsing, code interpreter or other built-in tools to
  call these functions. Write the function call block as text.
- Never wrap the function call block in another code block or in a quote.
- One function call block per message.
"#;

/// One token → fragment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFragment {
    /// Substring looked for in the host identifier.
    pub token: String,
    /// Markdown appended after the preamble when the token matches.
    pub fragment: String,
}

/// Ordered set of platform fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRegistry {
    entries: Vec<PlatformFragment>,
}

impl Default for PlatformRegistry {
    /// Built-in platforms, checked as `gemini` then `chatgpt`.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("gemini", GEMINI_FRAGMENT)
            .register("chatgpt", CHATGPT_FRAGMENT);
        registry
    }
}

impl PlatformRegistry {
    /// Registry without any platforms.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a platform. Re-registering a token replaces its fragment but keeps
    /// its original position. Empty tokens would match every host and are
    /// ignored.
    pub fn register(
        &mut self,
        token: impl Into<String>,
        fragment: impl Into<String>,
    ) -> &mut Self {
        let token = token.into();
        let fragment = fragment.into();

        if token.is_empty() {
            warn!("Ignoring platform fragment with an empty token");
            return self;
        }

        match self.entries.iter_mut().find(|e| e.token == token) {
            Some(existing) => existing.fragment = fragment,
            None => self.entries.push(PlatformFragment { token, fragment }),
        }
        self
    }

    /// Fragments whose token is contained in `host`, in registry order.
    pub fn fragments_for<'a>(&'a self, host: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |e| host.contains(e.token.as_str()))
            .map(|e| e.fragment.as_str())
    }

    /// Tokens matching `host`.
    pub fn matching_tokens<'a>(&'a self, host: &'a str) -> Vec<&'a str> {
        self.entries
            .iter()
            .filter(|e| host.contains(e.token.as_str()))
            .map(|e| e.token.as_str())
            .collect()
    }

    pub fn entries(&self) -> &[PlatformFragment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_host_selects_nothing() {
        let registry = PlatformRegistry::default();
        assert_eq!(registry.fragments_for("example.com").count(), 0);
        assert_eq!(registry.fragments_for("").count(), 0);
    }

    #[test]
    fn matching_is_substring_and_case_sensitive() {
        let registry = PlatformRegistry::default();
        let hits: Vec<&str> = registry.fragments_for("gemini.google.com").collect();
        assert_eq!(hits, vec![GEMINI_FRAGMENT]);

        assert_eq!(registry.fragments_for("Gemini.google.com").count(), 0);
        assert_eq!(registry.matching_tokens("chatgpt.com"), vec!["chatgpt"]);
    }

    #[test]
    fn several_tokens_match_in_registry_order() {
        let registry = PlatformRegistry::default();
        let hits: Vec<&str> = registry.fragments_for("chatgpt-gemini.test").collect();
        assert_eq!(hits, vec![GEMINI_FRAGMENT, CHATGPT_FRAGMENT]);
    }

    #[test]
    fn register_appends_and_replaces_in_place() {
        let mut registry = PlatformRegistry::default();
        registry.register("perplexity", "pplx notes");
        registry.register("gemini", "new gemini notes");

        let tokens: Vec<&str> = registry.entries().iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, vec!["gemini", "chatgpt", "perplexity"]);
        assert_eq!(registry.entries()[0].fragment, "new gemini notes");
    }

    #[test]
    fn empty_token_is_ignored() {
        let mut registry = PlatformRegistry::empty();
        registry.register("", "matches everything");
        assert!(registry.is_empty());
        assert_eq!(registry.fragments_for("anything").count(), 0);
    }
}
