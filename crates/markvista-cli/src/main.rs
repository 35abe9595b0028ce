use anyhow::{Context, Result};
use markvista_engine::{BlockToken, io, parse, plain_text};
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <document.md>", args[0]);
        process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let text = io::read_document(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    for block in parse(&text) {
        println!("{}", describe(&block));
    }
    Ok(())
}

/// One outline line per block: kind, detail, and a text preview.
fn describe(block: &BlockToken) -> String {
    match block {
        BlockToken::Heading { level, text } => {
            format!("heading(h{level})  {}", preview(&plain_text(text)))
        }
        BlockToken::Paragraph { inlines } => {
            format!("paragraph   {}", preview(&plain_text(inlines)))
        }
        BlockToken::Bullet { level, inlines } => {
            format!("bullet({level})   {}", preview(&plain_text(inlines)))
        }
        BlockToken::CodeBlock { language, text } => {
            let lang = if language.is_empty() { "text" } else { language };
            format!("code({lang})  {} line(s)", text.lines().count())
        }
        BlockToken::Image { alt_text, url } => format!("image       \"{alt_text}\" -> {url}"),
        BlockToken::ClickableImage {
            alt_text, link_url, ..
        } => format!("badge       \"{alt_text}\" -> {link_url}"),
        BlockToken::Banner { kind, inlines } => {
            format!("banner({kind:?})  {}", preview(&plain_text(inlines)))
        }
        BlockToken::Table { headers, rows } => {
            format!("table       {} column(s), {} row(s)", headers.len(), rows.len())
        }
        BlockToken::HorizontalRule => "rule".to_string(),
    }
}

/// Truncates long text for a one-line outline.
fn preview(text: &str) -> String {
    const MAX: usize = 60;
    if text.chars().count() <= MAX {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX).collect();
    format!("{cut}…")
}
