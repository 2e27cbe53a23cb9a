//! Lifecycle hooks and site configuration.
//!
//! The host build invokes three points: navbar construction after
//! initialization, per-page data extension, and markdown-extension setup.
//! Everything hangs off an explicit [`SiteConfig`] value handed to the host
//! at startup; there is no global state.

use crate::headers::fix_page_header;
use crate::mermaid::MermaidFenceRule;
use crate::navbar::{self, NavbarItem};
use crate::page::{Page, PageHeader};
use serde::Serialize;
use serde_json::{Map, Value};
use vmark_core::fence::FenceRule;

/// Declarative description of one navbar entry.
#[derive(Debug, Clone)]
pub enum NavbarSpec {
    /// A bare route link.
    Link(String),
    /// A drop-down built from pages under a route prefix.
    Menu {
        /// Display label.
        text: String,
        /// Route prefix selecting the member pages.
        prefix: String,
    },
    /// An external link.
    External {
        /// Display label.
        text: String,
        /// Target URL.
        link: String,
    },
}

/// Layout selection applied while extending page data.
#[derive(Debug, Clone)]
pub struct PageDataOptions {
    /// Relative-file-path prefix marking blog posts.
    pub posts_prefix: String,
    /// Layout assigned to posts without an explicit one.
    pub post_layout: String,
    /// Layout assigned to every other page without an explicit one.
    pub default_layout: String,
}

impl Default for PageDataOptions {
    fn default() -> Self {
        Self {
            posts_prefix: "posts/".to_string(),
            post_layout: "BlogPost".to_string(),
            default_layout: "Layout".to_string(),
        }
    }
}

/// Site configuration handed to the host at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// BCP 47 site language.
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description meta text.
    pub description: String,
    /// Declarative navbar layout.
    pub navbar: Vec<NavbarSpec>,
    /// Layout defaulting rules.
    pub page_data: PageDataOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en-GB".to_string(),
            title: "Sierra Softworks Blog".to_string(),
            description: "The official Sierra Softworks blog.".to_string(),
            navbar: vec![
                NavbarSpec::Link("/archive/".to_string()),
                NavbarSpec::Menu {
                    text: "Projects".to_string(),
                    prefix: "/projects/".to_string(),
                },
                NavbarSpec::Menu {
                    text: "Licenses".to_string(),
                    prefix: "/licenses/".to_string(),
                },
                NavbarSpec::External {
                    text: "About Me".to_string(),
                    link: "https://ben.pannell.dev".to_string(),
                },
            ],
            page_data: PageDataOptions::default(),
        }
    }
}

/// Fields returned to the host from [`SiteConfig::extend_page_data`].
#[derive(Debug, Clone, Serialize)]
pub struct PageDataPatch {
    /// Corrected heading tree.
    pub headers: Vec<PageHeader>,
    /// Frontmatter with `layout` defaulted.
    pub frontmatter: Map<String, Value>,
}

impl SiteConfig {
    /// Builds the navbar once per build, from the full known page set.
    pub fn on_initialized(&self, pages: &[Page]) -> Vec<NavbarItem> {
        log::debug!("building navbar from {} pages", pages.len());
        self.navbar
            .iter()
            .map(|spec| match spec {
                NavbarSpec::Link(path) => NavbarItem::Link(path.clone()),
                NavbarSpec::Menu { text, prefix } => {
                    NavbarItem::Group(navbar::build_nav_menu(pages, text, prefix))
                }
                NavbarSpec::External { text, link } => NavbarItem::External {
                    text: text.clone(),
                    link: link.clone(),
                },
            })
            .collect()
    }

    /// Per-page data extension: a corrected heading tree plus a frontmatter
    /// map with `layout` defaulted.
    ///
    /// An existing non-empty `layout` string wins; otherwise pages under the
    /// posts prefix get the post layout and everything else the default.
    pub fn extend_page_data(&self, page: &Page) -> PageDataPatch {
        let mut headers = page.headers.clone();
        for header in &mut headers {
            fix_page_header(header);
        }

        let mut frontmatter = page.frontmatter.clone();
        let has_layout = frontmatter
            .get("layout")
            .and_then(Value::as_str)
            .is_some_and(|layout| !layout.is_empty());
        if !has_layout {
            let layout = if page
                .file_path_relative
                .as_deref()
                .is_some_and(|rel| rel.starts_with(&self.page_data.posts_prefix))
            {
                &self.page_data.post_layout
            } else {
                &self.page_data.default_layout
            };
            frontmatter.insert("layout".to_string(), Value::String(layout.clone()));
        }

        PageDataPatch {
            headers,
            frontmatter,
        }
    }

    /// Installs the mermaid fence override during markdown-extension setup,
    /// capturing the renderer's previous rule as the fallback.
    pub fn fence_rule(&self, original: Box<dyn FenceRule>) -> MermaidFenceRule {
        MermaidFenceRule::new(original)
    }
}
