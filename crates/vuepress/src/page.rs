//! Host page model.
//!
//! Field names serialize camelCase to line up with the page objects the
//! VuePress host hands across the binding. Pages are host-owned and
//! read-only here; the one sanctioned mutation lives in [`crate::headers`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed page as supplied by the host engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Resolved route, absent when the page has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source path relative to the content root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path_relative: Option<String>,
    /// Author-supplied front-matter.
    #[serde(default)]
    pub frontmatter: Map<String, Value>,
    /// Extracted heading tree.
    #[serde(default)]
    pub headers: Vec<PageHeader>,
}

impl Page {
    /// The page's `frontmatter.group` value, when it is a non-empty string.
    /// An empty string counts as ungrouped.
    pub fn group(&self) -> Option<&str> {
        self.frontmatter
            .get("group")
            .and_then(Value::as_str)
            .filter(|group| !group.is_empty())
    }
}

/// One node of a page's extracted heading tree.
///
/// The host derives the tree from a linear heading-level stack, so it is
/// acyclic by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageHeader {
    /// Display text; may carry entity-escaped characters.
    pub title: String,
    /// Nested headings.
    #[serde(default)]
    pub children: Vec<PageHeader>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_host_field_names() {
        let page: Page = serde_json::from_value(json!({
            "path": "/projects/git-tool/",
            "filePathRelative": "projects/git-tool.md",
            "frontmatter": { "group": "Developer Tools" },
            "headers": [{ "title": "Usage", "children": [] }],
        }))
        .expect("host page shape should deserialize");

        assert_eq!(page.path.as_deref(), Some("/projects/git-tool/"));
        assert_eq!(page.file_path_relative.as_deref(), Some("projects/git-tool.md"));
        assert_eq!(page.group(), Some("Developer Tools"));
        assert_eq!(page.headers[0].title, "Usage");
    }

    #[test]
    fn missing_fields_default() {
        let page: Page = serde_json::from_value(json!({})).expect("empty page should deserialize");
        assert!(page.path.is_none());
        assert!(page.frontmatter.is_empty());
        assert!(page.headers.is_empty());
    }

    #[test]
    fn empty_group_counts_as_ungrouped() {
        let mut page = Page::default();
        page.frontmatter.insert("group".into(), Value::String(String::new()));
        assert_eq!(page.group(), None);

        page.frontmatter.insert("group".into(), Value::Bool(true));
        assert_eq!(page.group(), None);
    }
}
