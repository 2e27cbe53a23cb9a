#![deny(missing_docs)]
//! vmark core: entity decoding, caption splitting, and the fence-rule seam.

/// Caption extraction for diagram fences.
pub mod caption;
/// HTML entity decoding for heading titles.
pub mod entities;
/// Core error types.
pub mod error;
/// Fence token model and rendering-rule trait.
pub mod fence;

pub use caption::split_caption;
pub use entities::{HEADING_ENTITIES, decode_entities_once, decode_heading_entities};
pub use error::RenderError;
pub use fence::{FenceRule, FenceToken};
