/// Matches a bullet line: optional leading spaces/tabs, then `- ` or `* `.
///
/// The indent level is floor(whitespace count / 2), two spaces per level.
/// Returns the level and the content after the marker.
pub fn match_line(line: &str) -> Option<(usize, &str)> {
    let content = line.trim_start_matches([' ', '\t']);
    let indent = line.len() - content.len();
    let rest = content
        .strip_prefix("- ")
        .or_else(|| content.strip_prefix("* "))?;
    Some((indent / 2, rest))
}
