use thiserror::Error;

/// Errors raised while rendering a fence override.
///
/// Rendering is total over well-formed tokens; the only fallible step is
/// serializing the block body for an HTML attribute. A failure here aborts
/// the host build, which is the wanted outcome over emitting bad output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Serializing the block body as a string literal failed.
    #[error("code serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
