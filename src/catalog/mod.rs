//! The signal tool catalog.
//!
//! A fixed, ordered list of externally hosted tools that can be shown in the
//! embedded viewer. The catalog is defined at load time (config file with
//! built-in defaults) and never mutated at runtime.

use serde::{Deserialize, Serialize};

/// An externally hosted signal tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display name.
    pub title: String,
    /// URL to embed.
    pub src: String,
}

impl Tool {
    /// Create a new tool entry.
    pub fn new(id: impl Into<String>, title: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            src: src.into(),
        }
    }
}

/// The ordered tool catalog.
///
/// Guaranteed non-empty: constructing from an empty list falls back to the
/// built-in defaults, so `first()` and `resolve()` are total.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self {
            tools: vec![
                Tool::new(
                    "signals-scanner",
                    "signals-scanner",
                    "https://signals-scanner.vercel.app/",
                ),
                Tool::new(
                    "smartanalysistool",
                    "smartanalysistool",
                    "https://smartanalysistool.com/signal-center",
                ),
            ],
        }
    }
}

impl ToolCatalog {
    /// Build a catalog from configured entries, falling back to the defaults
    /// when the list is empty.
    pub fn from_entries(tools: Vec<Tool>) -> Self {
        if tools.is_empty() {
            Self::default()
        } else {
            Self { tools }
        }
    }

    /// All tools, in catalog order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// The catalog is never empty, but clippy expects the pair.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// The first tool. This is the deterministic fallback for every unknown
    /// or missing id.
    pub fn first(&self) -> &Tool {
        &self.tools[0]
    }

    /// Look up a tool by id.
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Resolve an id to a tool, falling back to the first entry when the id
    /// is unknown.
    pub fn resolve(&self, id: &str) -> &Tool {
        self.get(id).unwrap_or_else(|| self.first())
    }

    /// Position of a tool id in catalog order, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tools.iter().position(|t| t.id == id)
    }

    /// The id of the tool after `id` in catalog order, wrapping around.
    pub fn next_id(&self, id: &str) -> &str {
        let pos = self.position(id).unwrap_or(0);
        &self.tools[(pos + 1) % self.tools.len()].id
    }

    /// The id of the tool before `id` in catalog order, wrapping around.
    pub fn prev_id(&self, id: &str) -> &str {
        let pos = self.position(id).unwrap_or(0);
        &self.tools[(pos + self.tools.len() - 1) % self.tools.len()].id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_tool_catalog() -> ToolCatalog {
        ToolCatalog::from_entries(vec![
            Tool::new("A", "Tool A", "https://a.example"),
            Tool::new("B", "Tool B", "https://b.example"),
        ])
    }

    #[test]
    fn test_default_catalog_is_non_empty() {
        let catalog = ToolCatalog::default();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_entries_fall_back_to_defaults() {
        let catalog = ToolCatalog::from_entries(Vec::new());
        assert_eq!(catalog.tools(), ToolCatalog::default().tools());
    }

    #[test]
    fn test_resolve_known_id() {
        let catalog = two_tool_catalog();
        assert_eq!(catalog.resolve("B").src, "https://b.example");
    }

    #[test]
    fn test_resolve_unknown_id_falls_back_to_first() {
        let catalog = two_tool_catalog();
        assert_eq!(catalog.resolve("nope").id, "A");
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let catalog = two_tool_catalog();
        assert_eq!(catalog.next_id("A"), "B");
        assert_eq!(catalog.next_id("B"), "A");
        assert_eq!(catalog.prev_id("A"), "B");
        assert_eq!(catalog.prev_id("B"), "A");
    }
}
