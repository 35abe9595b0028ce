pub const FENCE: &str = "```";

/// Whether the line's trimmed form starts a fence delimiter.
pub fn is_marker(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

/// A consumed fence: language tag, normalized body, and the next scan
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    pub language: String,
    pub text: String,
    pub next_line: usize,
}

/// Consumes the fence opened at `lines[start]`.
///
/// The language tag is the trimmed text after the opening backticks. The
/// opening line's leading-whitespace width is recorded and stripped from
/// each contained line whose own leading characters are all whitespace;
/// other lines are kept verbatim. The scanner only opens a fence it has
/// confirmed will close, but an unclosed fence still terminates at end of
/// input.
pub fn consume(lines: &[&str], start: usize) -> FencedBlock {
    let opening = lines[start];
    let language = opening.trim()[FENCE.len()..].trim().to_string();
    let indent = opening.chars().take_while(|c| c.is_whitespace()).count();

    let mut body = Vec::new();
    let mut i = start + 1;
    while i < lines.len() && !is_marker(lines[i]) {
        body.push(strip_indent(lines[i], indent));
        i += 1;
    }

    FencedBlock {
        language,
        text: body.join("\n"),
        next_line: (i + 1).min(lines.len()),
    }
}

/// Strips up to `width` leading characters when they are all whitespace;
/// otherwise returns the line unmodified.
fn strip_indent(line: &str, width: usize) -> &str {
    let mut end = 0;
    for (taken, (idx, ch)) in line.char_indices().enumerate() {
        if taken == width {
            break;
        }
        if !ch.is_whitespace() {
            return line;
        }
        end = idx + ch.len_utf8();
    }
    &line[end..]
}
