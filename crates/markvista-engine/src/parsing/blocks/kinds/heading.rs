/// Heading markers, longest first so `#### ` isn't read as a shorter prefix
/// plus text.
const MARKERS: [(&str, u8); 4] = [("#### ", 4), ("### ", 3), ("## ", 2), ("# ", 1)];

/// Matches a heading marker at the start of the raw line, returning the
/// level and the text after the marker. Five or more hashes match nothing.
pub fn match_prefix(line: &str) -> Option<(u8, &str)> {
    MARKERS
        .iter()
        .find_map(|(marker, level)| line.strip_prefix(marker).map(|rest| (*level, rest)))
}
