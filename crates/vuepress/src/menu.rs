//! Section menu construction.
//!
//! Builds the sidebar-style menu for a content section from the full known
//! page set, keyed by relative file path.

use crate::page::Page;
use serde::Serialize;

/// Options for [`build_menu`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuOptions {
    /// Reverse the final ordering.
    pub reverse: bool,
    /// Keep the section's own `README.md` entry. The index page is
    /// reachable through the section link itself, so it is dropped by
    /// default.
    pub include_readme: bool,
    /// Emit one sub-group per file-path bucket instead of a flat list.
    pub groups: bool,
}

/// A section menu handed to the theme's navbar renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuDescriptor {
    /// Display label.
    pub text: String,
    /// Ordered entries.
    pub children: Vec<MenuEntry>,
}

/// One child of a [`MenuDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MenuEntry {
    /// A route path. `None` serializes as `null` for a page without a
    /// resolved route; the host drops or tolerates it.
    Page(Option<String>),
    /// A nested group of route paths.
    Group {
        /// Group label.
        text: String,
        /// Member route paths.
        children: Vec<Option<String>>,
    },
}

/// Builds the menu for every page whose relative file path starts with
/// `prefix`.
///
/// Survivors are stable-sorted ascending by relative file path, then the
/// whole ordering is reversed when `options.reverse` is set. With
/// `options.groups` the entries become one sub-group per file-path bucket;
/// relative file paths are unique per page, so every bucket holds a single
/// member. Preserved as published rather than regrouped.
pub fn build_menu(
    pages: &[Page],
    text: &str,
    prefix: &str,
    options: &MenuOptions,
) -> MenuDescriptor {
    let readme = format!("{prefix}/README.md");
    let mut selected: Vec<&Page> = pages
        .iter()
        .filter(|page| {
            page.file_path_relative
                .as_deref()
                .is_some_and(|rel| rel.starts_with(prefix))
        })
        .filter(|page| {
            options.include_readme || page.file_path_relative.as_deref() != Some(readme.as_str())
        })
        .collect();

    selected.sort_by(|a, b| a.file_path_relative.cmp(&b.file_path_relative));
    if options.reverse {
        selected.reverse();
    }

    let children = if options.groups {
        group_by_key(&selected, |page| {
            page.file_path_relative.clone().unwrap_or_default()
        })
        .into_iter()
        .map(|(key, members)| MenuEntry::Group {
            text: key,
            children: members.iter().map(|page| route_of(page)).collect(),
        })
        .collect()
    } else {
        selected
            .iter()
            .map(|page| MenuEntry::Page(route_of(page)))
            .collect()
    };

    MenuDescriptor {
        text: text.to_string(),
        children,
    }
}

/// Buckets `items` by a string key, keeping buckets in first-appearance
/// order.
pub fn group_by_key<T, K>(items: &[T], key: K) -> Vec<(String, Vec<&T>)>
where
    K: Fn(&T) -> String,
{
    let mut groups: Vec<(String, Vec<&T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

fn route_of(page: &Page) -> Option<String> {
    if page.path.is_none() {
        log::debug!(
            "page {:?} has no resolved route, emitting null menu entry",
            page.file_path_relative
        );
    }
    page.path.clone()
}
