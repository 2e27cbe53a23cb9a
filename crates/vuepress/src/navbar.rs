//! Top-level navbar construction.
//!
//! Unlike [`crate::menu`], the navbar variant filters by route path, and
//! grouping is driven by an explicit `frontmatter.group` key instead of a
//! file-path bucket. Host-supplied page order is kept; no sorting.

use crate::page::Page;
use serde::Serialize;

/// One top-level navbar entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavbarItem {
    /// A bare route link.
    Link(String),
    /// A drop-down group.
    Group(NavbarGroup),
    /// An external link with a label.
    External {
        /// Display label.
        text: String,
        /// Target URL.
        link: String,
    },
}

/// A navbar drop-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavbarGroup {
    /// Display label.
    pub text: String,
    /// Flat route entries first, then named sub-groups.
    pub children: Vec<NavbarChild>,
}

/// A child of a [`NavbarGroup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavbarChild {
    /// Route path of an ungrouped page.
    Page(String),
    /// Pages sharing a `frontmatter.group` value.
    Group {
        /// The shared group label.
        text: String,
        /// Member route paths.
        children: Vec<String>,
    },
}

/// Builds a navbar drop-down from every page whose route starts with
/// `prefix`.
///
/// Section index pages (`README.md` sources) are left out: the drop-down
/// label itself links the section. Pages carrying a `frontmatter.group`
/// string are bucketed under that label after the ungrouped entries; order
/// everywhere follows the host-supplied page list.
pub fn build_nav_menu(pages: &[Page], text: &str, prefix: &str) -> NavbarGroup {
    let selected: Vec<&Page> = pages
        .iter()
        .filter(|page| page.path.as_deref().is_some_and(|path| path.starts_with(prefix)))
        .filter(|page| {
            !page
                .file_path_relative
                .as_deref()
                .is_some_and(|rel| rel.ends_with("README.md"))
        })
        .collect();

    let mut children: Vec<NavbarChild> = selected
        .iter()
        .filter(|page| page.group().is_none())
        .filter_map(|page| page.path.clone())
        .map(NavbarChild::Page)
        .collect();

    children.extend(
        group_by_frontmatter_group(&selected)
            .into_iter()
            .map(|(text, members)| NavbarChild::Group {
                text,
                children: members
                    .iter()
                    .filter_map(|page| page.path.clone())
                    .collect(),
            }),
    );

    NavbarGroup {
        text: text.to_string(),
        children,
    }
}

/// Buckets pages by their `frontmatter.group` string, preserving
/// first-appearance order. Ungrouped pages are skipped.
pub fn group_by_frontmatter_group<'a>(pages: &[&'a Page]) -> Vec<(String, Vec<&'a Page>)> {
    let mut groups: Vec<(String, Vec<&'a Page>)> = Vec::new();
    for page in pages.iter().copied() {
        let Some(group) = page.group() else { continue };
        match groups.iter_mut().find(|(existing, _)| existing.as_str() == group) {
            Some((_, members)) => members.push(page),
            None => groups.push((group.to_string(), vec![page])),
        }
    }
    groups
}
