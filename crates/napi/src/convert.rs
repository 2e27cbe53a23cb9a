//! Conversions between the NAPI mirror types and the vuepress model.

use crate::types::{NapiMenuOptions, NapiPage, NapiPageDataPatch, NapiPageHeader};
use serde_json::{Map, Value};
use vmark_vuepress::{MenuOptions, Page, PageDataPatch, PageHeader};

pub(crate) fn page_from_napi(page: NapiPage) -> Page {
    Page {
        path: page.path,
        file_path_relative: page.file_path_relative,
        frontmatter: match page.frontmatter {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        },
        headers: page
            .headers
            .unwrap_or_default()
            .into_iter()
            .map(header_from_napi)
            .collect(),
    }
}

pub(crate) fn header_from_napi(header: NapiPageHeader) -> PageHeader {
    PageHeader {
        title: header.title,
        children: header
            .children
            .unwrap_or_default()
            .into_iter()
            .map(header_from_napi)
            .collect(),
    }
}

pub(crate) fn header_to_napi(header: PageHeader) -> NapiPageHeader {
    NapiPageHeader {
        title: header.title,
        children: Some(header.children.into_iter().map(header_to_napi).collect()),
    }
}

pub(crate) fn menu_options_from_napi(options: Option<NapiMenuOptions>) -> MenuOptions {
    let options = options.unwrap_or_default();
    MenuOptions {
        reverse: options.reverse.unwrap_or(false),
        include_readme: options.include_readme.unwrap_or(false),
        groups: options.groups.unwrap_or(false),
    }
}

pub(crate) fn patch_to_napi(patch: PageDataPatch) -> NapiPageDataPatch {
    NapiPageDataPatch {
        headers: patch.headers.into_iter().map(header_to_napi).collect(),
        frontmatter: Value::Object(patch.frontmatter),
    }
}
