//! HTML entity decoding for heading titles.
//!
//! The host extracts heading text from rendered HTML, so titles arrive with
//! a handful of characters entity-escaped. Only a fixed table is decoded,
//! and each entity is substituted once (first occurrence only) to match the
//! published site output.

/// Entity table applied to heading titles, in substitution order.
pub const HEADING_ENTITIES: &[(&str, &str)] = &[
    ("&#39;", "'"),
    ("&amp;", "&"),
    ("&quot;", "\""),
];

/// Decodes `pairs` against `input` in order, replacing only the **first**
/// occurrence of each entity.
///
/// A title containing the same entity twice keeps the second one escaped.
/// That is the published behavior, not an oversight here; callers wanting a
/// full decode need a real HTML entity decoder.
pub fn decode_entities_once(input: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = input.to_string();
    for (entity, literal) in pairs {
        out = out.replacen(entity, literal, 1);
    }
    out
}

/// Decodes the [`HEADING_ENTITIES`] table against `input`.
pub fn decode_heading_entities(input: &str) -> String {
    decode_entities_once(input, HEADING_ENTITIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_entity_in_the_table() {
        assert_eq!(
            decode_heading_entities("Tom&#39;s &quot;A &amp; B&quot; talk"),
            "Tom's \"A & B&quot; talk"
        );
    }

    #[test]
    fn replaces_only_the_first_occurrence_per_entity() {
        // Single substitution per entity is deliberate; the second &amp;
        // stays escaped.
        assert_eq!(
            decode_heading_entities("It&#39;s &amp; &amp; "),
            "It's & &amp; "
        );
    }

    #[test]
    fn leaves_plain_titles_untouched() {
        assert_eq!(decode_heading_entities("Getting Started"), "Getting Started");
    }

    #[test]
    fn applies_custom_pair_tables_in_order() {
        let pairs = &[("&lt;", "<"), ("&gt;", ">")];
        assert_eq!(decode_entities_once("a &lt;b&gt; &lt;c", pairs), "a <b> &lt;c");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(decode_heading_entities(""), "");
    }
}
