/// A link-wrapped image (`[![alt](image)](link)`), borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge<'a> {
    pub alt_text: &'a str,
    pub image_url: &'a str,
    pub link_url: &'a str,
    /// Bytes consumed from the start of the input, through the final `)`.
    pub len: usize,
}

pub const OPEN: &str = "[![";

/// Attempts to parse a badge at the start of `s`.
///
/// Locates five delimiters in order: the `]` closing the alt text, a `](`
/// opener, the `)` closing the image URL, a second `](`, and the final `)`.
/// Any delimiter missing means this is not a badge and `None` is returned;
/// the input is left for other rules.
pub fn parse(s: &str) -> Option<Badge<'_>> {
    let rest = s.strip_prefix(OPEN)?;
    let alt_end = OPEN.len() + rest.find(']')?;
    let img_open = alt_end + s[alt_end..].find("](")?;
    let img_end = img_open + 2 + s[img_open + 2..].find(')')?;
    let link_open = img_end + s[img_end..].find("](")?;
    let link_end = link_open + 2 + s[link_open + 2..].find(')')?;

    Some(Badge {
        alt_text: &s[OPEN.len()..alt_end],
        image_url: &s[img_open + 2..img_end],
        link_url: &s[link_open + 2..link_end],
        len: link_end + 1,
    })
}
