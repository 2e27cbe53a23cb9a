//! Mermaid fence rendering.
//!
//! Replaces the renderer's fence rule. Fences tagged `mermaid` become a
//! `<Mermaid>` component invocation wrapped in `<ClientOnly>` (the diagram
//! renders client-side); every other fence falls through to whichever rule
//! was installed before.

use vmark_core::caption::split_caption;
use vmark_core::error::RenderError;
use vmark_core::fence::{FenceRule, FenceToken};

const MERMAID_TAG: &str = "mermaid";

/// Renders a mermaid fence token, or `None` when the token belongs to the
/// previously installed rule.
///
/// The caption comes from leading `#` lines in the block body, falling back
/// to any text after the `mermaid` tag in the info string. The diagram code
/// is serialized as a JSON string literal so it survives as a Vue binding
/// expression; double quotes in both attributes are entity-escaped for the
/// attribute position.
pub fn try_render_mermaid(token: &FenceToken) -> Result<Option<String>, RenderError> {
    if !token.info.starts_with(MERMAID_TAG) {
        return Ok(None);
    }

    let (body_caption, code) = split_caption(token.content.trim());
    let caption: &str = if body_caption.is_empty() {
        // Skip the tag and one separating character; out of range (a bare
        // `mermaid` info string) means no caption.
        token.info.get(MERMAID_TAG.len() + 1..).unwrap_or_default()
    } else {
        &body_caption
    };

    let safe_caption = caption.replace('"', "&quot;");
    let safe_code = serde_json::to_string(&code)?.replace('"', "&quot;");

    Ok(Some(format!(
        "<ClientOnly><Mermaid :value=\"{safe_code}\" caption=\"{safe_caption}\" /></ClientOnly>"
    )))
}

/// Fence rule wrapping the renderer's previous rule.
pub struct MermaidFenceRule {
    original: Box<dyn FenceRule>,
}

impl MermaidFenceRule {
    /// Captures `original` as the fallback for non-mermaid fences.
    pub fn new(original: Box<dyn FenceRule>) -> Self {
        Self { original }
    }
}

impl FenceRule for MermaidFenceRule {
    fn render(&self, token: &FenceToken) -> Result<String, RenderError> {
        match try_render_mermaid(token)? {
            Some(html) => Ok(html),
            None => self.original.render(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(info: &str, content: &str) -> String {
        try_render_mermaid(&FenceToken::new(info, content))
            .expect("mermaid rendering should not fail")
            .expect("token should be recognized as mermaid")
    }

    #[test]
    fn caption_taken_from_info_string() {
        let html = render("mermaid My Chart", "graph TD; A-->B");
        assert_eq!(
            html,
            "<ClientOnly><Mermaid :value=\"&quot;graph TD; A-->B&quot;\" caption=\"My Chart\" /></ClientOnly>"
        );
    }

    #[test]
    fn body_caption_wins_over_info_string() {
        let html = render("mermaid ignored", "# Build Flow\ngraph TD;\nA-->B");
        assert_eq!(
            html,
            "<ClientOnly><Mermaid :value=\"&quot;graph TD;\\nA-->B&quot;\" caption=\"Build Flow\" /></ClientOnly>"
        );
    }

    #[test]
    fn bare_mermaid_info_yields_empty_caption() {
        let html = render("mermaid", "graph TD; A-->B");
        assert!(html.contains("caption=\"\""));
    }

    #[test]
    fn double_quotes_in_caption_become_entities() {
        let html = render("mermaid Say \"Hi\"", "graph TD; A-->B");
        assert!(html.contains("caption=\"Say &quot;Hi&quot;\""));
    }

    #[test]
    fn code_quotes_survive_as_escaped_entities() {
        let html = render("mermaid", "graph TD; a[\"start\"]-->b");
        assert!(html.contains(":value=\"&quot;graph TD; a[\\&quot;start\\&quot;]-->b&quot;\""));
    }

    #[test]
    fn content_is_trimmed_before_caption_split() {
        let html = render("mermaid", "\n\n# Flow\ngraph TD; A-->B\n");
        assert!(html.contains("caption=\"Flow\""));
        assert!(html.contains(":value=\"&quot;graph TD; A-->B&quot;\""));
    }

    #[test]
    fn non_mermaid_tokens_are_left_for_the_original_rule() {
        let token = FenceToken::new("js", "let x = 1;");
        let outcome = try_render_mermaid(&token).expect("rendering should not fail");
        assert_eq!(outcome, None);
    }

    #[test]
    fn wrapped_rule_delegates_byte_for_byte() {
        let original = |token: &FenceToken| -> Result<String, RenderError> {
            Ok(format!("<pre>{}|{}</pre>", token.info, token.content))
        };
        let rule = MermaidFenceRule::new(Box::new(original));

        let passthrough = FenceToken::new("js", "let x = 1;");
        assert_eq!(
            rule.render(&passthrough).expect("delegate should render"),
            original.render(&passthrough).expect("original should render"),
        );

        let mermaid = FenceToken::new("mermaid", "graph TD; A-->B");
        assert!(
            rule.render(&mermaid)
                .expect("mermaid should render")
                .starts_with("<ClientOnly><Mermaid")
        );
    }
}
