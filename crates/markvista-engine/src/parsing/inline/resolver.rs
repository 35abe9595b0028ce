use super::cursor::Cursor;
use super::kinds::{badge, link};
use super::types::{InlineContext, InlineToken};

/// Resolves one line (or table cell) of text into inline tokens.
///
/// Never fails; whatever doesn't parse as a construct joins a plain-text
/// run, so the marker-stripped output always reconstructs the visible text.
pub fn resolve(text: &str) -> Vec<InlineToken> {
    resolve_with(text, InlineContext::default())
}

/// Characters that end a plain-text run and restart construct matching.
const MARKERS: [char; 3] = ['*', '`', '['];

fn resolve_with(text: &str, ctx: InlineContext) -> Vec<InlineToken> {
    let mut cur = Cursor::new(text);
    let mut out = Vec::new();
    let mut run = String::new();

    while !cur.eof() {
        // Precedence per position: badge, link, bold, italic, code span.
        if cur.starts_with(badge::OPEN.as_bytes())
            && let Some(b) = badge::parse(cur.rest())
        {
            flush(&mut out, &mut run);
            out.push(InlineToken::ClickableImage {
                alt_text: b.alt_text.to_string(),
                image_url: b.image_url.to_string(),
                link_url: b.link_url.to_string(),
            });
            cur.advance(b.len);
            continue;
        }
        if cur.peek() == Some(b'[')
            && !ctx.code
            && let Some(l) = link::parse(cur.rest())
        {
            flush(&mut out, &mut run);
            out.push(InlineToken::Link {
                text: l.text.to_string(),
                url: l.url.to_string(),
                bold: ctx.bold,
                italic: ctx.italic,
            });
            cur.advance(l.len);
            continue;
        }
        if cur.starts_with(b"**")
            && !ctx.code
            && !ctx.bold
            && let Some(close) = cur.rest()[2..].find("**")
        {
            flush(&mut out, &mut run);
            let inner = &cur.rest()[2..2 + close];
            append_bold(&mut out, inner, ctx);
            cur.advance(close + 4);
            continue;
        }
        if cur.peek() == Some(b'*')
            && !cur.starts_with(b"**")
            && !ctx.code
            && !ctx.italic
            && let Some(close) = find_single_star(&cur.rest()[1..])
        {
            flush(&mut out, &mut run);
            let inner = &cur.rest()[1..1 + close];
            append_italic(&mut out, inner, ctx);
            cur.advance(close + 2);
            continue;
        }
        if cur.peek() == Some(b'`')
            && !ctx.code
            && let Some(close) = cur.rest()[1..].find('`')
        {
            flush(&mut out, &mut run);
            out.push(InlineToken::Code {
                text: cur.rest()[1..1 + close].to_string(),
            });
            cur.advance(close + 2);
            continue;
        }

        // Nothing matched here. The current char joins the text run (this is
        // how an unterminated backtick or stray `*` is absorbed), then the
        // run extends to the next marker.
        if let Some(c) = cur.next_char() {
            run.push(c);
        }
        while let Some(c) = cur.rest().chars().next() {
            if MARKERS.contains(&c) {
                break;
            }
            run.push(c);
            cur.advance(c.len_utf8());
        }
    }

    flush(&mut out, &mut run);
    out
}

/// Position of the next lone `*` in `s`. A `*` belonging to a `**` pair is
/// a bold delimiter and cannot close an italic span.
fn find_single_star(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'*' {
            if bytes.get(i + 1) == Some(&b'*') {
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }
    None
}

fn flush(out: &mut Vec<InlineToken>, run: &mut String) {
    if !run.is_empty() {
        out.push(InlineToken::Text {
            value: std::mem::take(run),
        });
    }
}

/// Resolves a `**…**` span and appends the result.
///
/// A single plain-text run flattens to one `Bold` token. Anything richer is
/// translated token by token so every emitted token carries the bold flag
/// itself; emphasis never nests structurally. Badges have no bold form and
/// are dropped.
fn append_bold(out: &mut Vec<InlineToken>, inner: &str, ctx: InlineContext) {
    let nested = resolve_with(inner, ctx.with_bold());
    if let [InlineToken::Text { value }] = nested.as_slice() {
        out.push(InlineToken::Bold {
            text: value.clone(),
            italic: ctx.italic,
        });
        return;
    }
    for token in nested {
        match token {
            InlineToken::Text { value } => out.push(InlineToken::Bold {
                text: value,
                italic: ctx.italic,
            }),
            InlineToken::Link {
                text, url, italic, ..
            } => out.push(InlineToken::Link {
                text,
                url,
                bold: true,
                italic,
            }),
            InlineToken::Italic { text, .. } => {
                out.push(InlineToken::Italic { text, bold: true })
            }
            InlineToken::Code { .. } | InlineToken::Bold { .. } => out.push(token),
            InlineToken::ClickableImage { .. } => {}
        }
    }
}

/// Resolves a `*…*` span, symmetric to [`append_bold`].
fn append_italic(out: &mut Vec<InlineToken>, inner: &str, ctx: InlineContext) {
    let nested = resolve_with(inner, ctx.with_italic());
    if let [InlineToken::Text { value }] = nested.as_slice() {
        out.push(InlineToken::Italic {
            text: value.clone(),
            bold: ctx.bold,
        });
        return;
    }
    for token in nested {
        match token {
            InlineToken::Text { value } => out.push(InlineToken::Italic {
                text: value,
                bold: ctx.bold,
            }),
            InlineToken::Link {
                text, url, bold, ..
            } => out.push(InlineToken::Link {
                text,
                url,
                bold,
                italic: true,
            }),
            InlineToken::Bold { text, .. } => {
                out.push(InlineToken::Bold { text, italic: true })
            }
            InlineToken::Code { .. } | InlineToken::Italic { .. } => out.push(token),
            InlineToken::ClickableImage { .. } => {}
        }
    }
}
