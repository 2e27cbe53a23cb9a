//! NAPI-exposed data structures.

use napi_derive::napi;
use serde_json::Value;

/// A parsed page handed across the binding by the host engine.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct NapiPage {
    /// Resolved route, if any.
    pub path: Option<String>,
    /// Source path relative to the content root.
    pub file_path_relative: Option<String>,
    /// Author-supplied front-matter; anything but an object is ignored.
    pub frontmatter: Option<Value>,
    /// Extracted heading tree.
    pub headers: Option<Vec<NapiPageHeader>>,
}

/// One node of a page's extracted heading tree.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct NapiPageHeader {
    /// Display text.
    pub title: String,
    /// Nested headings.
    pub children: Option<Vec<NapiPageHeader>>,
}

/// Options accepted by `buildMenu`; every field defaults to false.
#[napi(object)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NapiMenuOptions {
    /// Reverse the final ordering.
    pub reverse: Option<bool>,
    /// Keep the section's own `README.md` entry.
    pub include_readme: Option<bool>,
    /// Emit one sub-group per file-path bucket instead of a flat list.
    pub groups: Option<bool>,
}

/// Result of `extendPageData`.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct NapiPageDataPatch {
    /// Corrected heading tree.
    pub headers: Vec<NapiPageHeader>,
    /// Frontmatter with `layout` defaulted.
    pub frontmatter: Value,
}
