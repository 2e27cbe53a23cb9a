#![deny(missing_docs)]
//! vmark VuePress layer: page model, menu builders, heading fixup, and the
//! lifecycle hooks the host build invokes.

/// In-place heading fixup.
pub mod headers;
/// Lifecycle hooks and site configuration.
pub mod hooks;
/// Section menu construction.
pub mod menu;
/// Mermaid fence rendering.
pub mod mermaid;
/// Top-level navbar construction.
pub mod navbar;
/// Host page model.
pub mod page;

pub use headers::fix_page_header;
pub use hooks::{NavbarSpec, PageDataOptions, PageDataPatch, SiteConfig};
pub use menu::{MenuDescriptor, MenuEntry, MenuOptions, build_menu, group_by_key};
pub use mermaid::{MermaidFenceRule, try_render_mermaid};
pub use navbar::{
    NavbarChild, NavbarGroup, NavbarItem, build_nav_menu, group_by_frontmatter_group,
};
pub use page::{Page, PageHeader};
