#![deny(missing_docs)]
//! Node.js bindings surfacing vmark's build hooks to the VuePress host.

use napi::bindgen_prelude::*;
use napi_derive::napi;
use serde_json::Value;
use vmark_core::fence::FenceToken;
use vmark_vuepress::{SiteConfig, build_menu, build_nav_menu, try_render_mermaid};

mod convert;
/// NAPI-exposed data structures.
pub mod types;

pub use types::*;

use convert::{menu_options_from_napi, page_from_napi, patch_to_napi};

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|err| Error::from_reason(err.to_string()))
}

/// Builds a section menu from every page whose relative file path starts
/// with `prefix`.
///
/// Entries are route paths sorted by relative file path; a page without a
/// resolved route yields `null`, which the theme drops.
#[napi(js_name = "buildMenu")]
pub fn build_menu_napi(
    pages: Vec<NapiPage>,
    text: String,
    prefix: String,
    options: Option<NapiMenuOptions>,
) -> Result<Value> {
    let pages: Vec<_> = pages.into_iter().map(page_from_napi).collect();
    let menu = build_menu(&pages, &text, &prefix, &menu_options_from_napi(options));
    to_json(&menu)
}

/// Builds a navbar drop-down from every page whose route starts with
/// `prefix`, bucketing pages by their `frontmatter.group` value.
#[napi(js_name = "buildNavMenu")]
pub fn build_nav_menu_napi(pages: Vec<NapiPage>, text: String, prefix: String) -> Result<Value> {
    let pages: Vec<_> = pages.into_iter().map(page_from_napi).collect();
    to_json(&build_nav_menu(&pages, &text, &prefix))
}

/// Builds the site's full navbar from the default configuration.
#[napi(js_name = "defaultNavbar")]
pub fn default_navbar_napi(pages: Vec<NapiPage>) -> Result<Value> {
    let pages: Vec<_> = pages.into_iter().map(page_from_napi).collect();
    to_json(&SiteConfig::default().on_initialized(&pages))
}

/// Extends one page's data: the corrected heading tree plus frontmatter
/// with `layout` defaulted.
#[napi(js_name = "extendPageData")]
pub fn extend_page_data_napi(page: NapiPage) -> NapiPageDataPatch {
    patch_to_napi(SiteConfig::default().extend_page_data(&page_from_napi(page)))
}

/// Renders a mermaid fence to HTML.
///
/// Returns `null` for every other fence; the JS side then falls back to the
/// renderer's original rule, which cannot cross the binding.
#[napi(js_name = "renderMermaidFence")]
pub fn render_mermaid_fence_napi(info: String, content: String) -> Result<Option<String>> {
    try_render_mermaid(&FenceToken { info, content })
        .map_err(|err| Error::from_reason(err.to_string()))
}
