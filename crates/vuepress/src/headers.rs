//! In-place heading fixup.

use crate::page::PageHeader;
use vmark_core::decode_heading_entities;

/// Decodes entity escapes in `header.title` and recurses into every child.
///
/// This is the one place a host-owned structure is touched in place. The
/// host owns the tree before and after the call and nothing else aliases it
/// during the per-page hook, so the mutation stays confined here.
pub fn fix_page_header(header: &mut PageHeader) {
    header.title = decode_heading_entities(&header.title);
    for child in &mut header.children {
        fix_page_header(child);
    }
}
