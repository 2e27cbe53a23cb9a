//! Fence token model and rendering-rule trait.
//!
//! The host's markdown renderer owns fence parsing; this module only models
//! the token it hands a rendering rule and the trait a replacement rule
//! implements. The shape mirrors the renderer's rule slot: a new rule is
//! installed over the previous one and keeps it for fallback.

use crate::error::RenderError;

/// A fenced code block as surfaced by the markdown renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceToken {
    /// The string following the opening fence marker (a language tag plus
    /// any trailing text).
    pub info: String,
    /// Raw block body.
    pub content: String,
}

impl FenceToken {
    /// Builds a token from its info string and body.
    pub fn new(info: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            info: info.into(),
            content: content.into(),
        }
    }
}

/// A fence rendering rule: one token in, one HTML fragment out.
pub trait FenceRule {
    /// Render a fence token to an HTML fragment.
    fn render(&self, token: &FenceToken) -> Result<String, RenderError>;
}

impl<F> FenceRule for F
where
    F: Fn(&FenceToken) -> Result<String, RenderError>,
{
    fn render(&self, token: &FenceToken) -> Result<String, RenderError> {
        (self)(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_rules() {
        let rule = |token: &FenceToken| -> Result<String, RenderError> {
            Ok(format!("<pre>{}</pre>", token.content))
        };
        let html = rule
            .render(&FenceToken::new("js", "let x = 1;"))
            .expect("closure rule should render");
        assert_eq!(html, "<pre>let x = 1;</pre>");
    }
}
