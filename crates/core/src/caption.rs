//! Caption extraction for diagram fences.

/// Splits leading `#`-marked lines off a fenced block body.
///
/// Consecutive lines at the start of `content` beginning with `#` become the
/// caption: the marker is stripped, the rest trimmed, and the lines joined
/// with single spaces. Everything from the first unmarked line on is
/// rejoined with `\n` untouched. Returns `("", content)` when the first
/// line carries no marker.
pub fn split_caption(content: &str) -> (String, String) {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut caption_lines = Vec::new();
    let mut taken = 0;

    while taken < lines.len() && lines[taken].starts_with('#') {
        caption_lines.push(lines[taken][1..].trim());
        taken += 1;
    }

    (caption_lines.join(" "), lines[taken..].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_caption_lines_with_spaces() {
        let (caption, rest) = split_caption("# Hello\n# World\nbody\nmore");
        assert_eq!(caption, "Hello World");
        assert_eq!(rest, "body\nmore");
    }

    #[test]
    fn returns_input_unchanged_without_marker() {
        let (caption, rest) = split_caption("no caption\nbody");
        assert_eq!(caption, "");
        assert_eq!(rest, "no caption\nbody");
    }

    #[test]
    fn consumes_every_line_when_all_are_marked() {
        let (caption, rest) = split_caption("# a\n# b");
        assert_eq!(caption, "a b");
        assert_eq!(rest, "");
    }

    #[test]
    fn marker_without_space_still_counts() {
        let (caption, rest) = split_caption("#Flow\ngraph TD");
        assert_eq!(caption, "Flow");
        assert_eq!(rest, "graph TD");
    }

    #[test]
    fn stops_at_first_unmarked_line() {
        let (caption, rest) = split_caption("# one\nmiddle\n# not a caption");
        assert_eq!(caption, "one");
        assert_eq!(rest, "middle\n# not a caption");
    }

    #[test]
    fn empty_input_yields_empty_parts() {
        assert_eq!(split_caption(""), (String::new(), String::new()));
    }
}
