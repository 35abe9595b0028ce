//! End-to-end tests for the parsing module: whole documents in, block
//! sequences out.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::blocks::kinds::BannerKind;
use crate::parsing::{BlockToken, InlineToken, parse};

fn text(s: &str) -> InlineToken {
    InlineToken::Text {
        value: s.to_string(),
    }
}

#[rstest]
#[case("# A", 1)]
#[case("## A", 2)]
#[case("### A", 3)]
#[case("#### A", 4)]
fn heading_levels(#[case] input: &str, #[case] level: u8) {
    assert_eq!(
        parse(input),
        vec![BlockToken::Heading {
            level,
            text: vec![text("A")],
        }]
    );
}

#[test]
fn five_hashes_fall_through_to_paragraph() {
    assert_eq!(
        parse("##### A"),
        vec![BlockToken::Paragraph {
            inlines: vec![text("##### A")],
        }]
    );
}

#[test]
fn heading_text_is_inline_resolved() {
    assert_eq!(
        parse("# **B** x"),
        vec![BlockToken::Heading {
            level: 1,
            text: vec![
                InlineToken::Bold {
                    text: "B".to_string(),
                    italic: false
                },
                text(" x"),
            ],
        }]
    );
}

#[rstest]
#[case("- a", 0, "a")]
#[case("  - b", 1, "b")]
#[case("    - c", 2, "c")]
#[case("* starred", 0, "starred")]
fn bullet_indent_levels(#[case] input: &str, #[case] level: usize, #[case] content: &str) {
    assert_eq!(
        parse(input),
        vec![BlockToken::Bullet {
            level,
            inlines: vec![text(content)],
        }]
    );
}

#[test]
fn fenced_code_block() {
    assert_eq!(
        parse("```kotlin\ncode\n```"),
        vec![BlockToken::CodeBlock {
            language: "kotlin".to_string(),
            text: "code".to_string(),
        }]
    );
}

#[test]
fn unterminated_fence_degrades_to_paragraphs() {
    let blocks = parse("```kotlin\ncode");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], BlockToken::Paragraph { .. }));
    assert_eq!(
        blocks[1],
        BlockToken::Paragraph {
            inlines: vec![text("code")],
        }
    );
}

#[test]
fn fence_indentation_is_normalized() {
    assert_eq!(
        parse("  ```rs\n    let x = 1;\n  done\n  ```"),
        vec![BlockToken::CodeBlock {
            language: "rs".to_string(),
            text: "  let x = 1;\ndone".to_string(),
        }]
    );
}

#[test]
fn table_with_separator() {
    assert_eq!(
        parse("|a|b|\n|-|-|\n|1|2|"),
        vec![BlockToken::Table {
            headers: vec![vec![text("a")], vec![text("b")]],
            rows: vec![vec![vec![text("1")], vec![text("2")]]],
        }]
    );
}

#[test]
fn table_ends_at_first_non_row_line() {
    let blocks = parse("|a|\n|1|\nafter");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], BlockToken::Table { .. }));
    assert!(matches!(blocks[1], BlockToken::Paragraph { .. }));
}

#[test]
fn badge_line_is_one_clickable_image() {
    assert_eq!(
        parse("[![alt](img.png)](http://x)"),
        vec![BlockToken::ClickableImage {
            alt_text: "alt".to_string(),
            image_url: "img.png".to_string(),
            link_url: "http://x".to_string(),
        }]
    );
}

#[test]
fn half_formed_badge_degrades_to_paragraph() {
    let blocks = parse("[![alt](img.png)");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0], BlockToken::Paragraph { .. }));
}

#[test]
fn image_line() {
    assert_eq!(
        parse("![alt](img.png)"),
        vec![BlockToken::Image {
            alt_text: "alt".to_string(),
            url: "img.png".to_string(),
        }]
    );
}

#[test]
fn half_formed_image_degrades_to_paragraph() {
    let blocks = parse("![alt](img.png");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0], BlockToken::Paragraph { .. }));
}

#[rstest]
#[case("!!! warning Careful", BannerKind::Warning, "Careful")]
#[case("!!! error Broken", BannerKind::Error, "Broken")]
#[case("!!! success Shipped", BannerKind::Success, "Shipped")]
#[case("!!! note Remember", BannerKind::Note, "Remember")]
#[case("!!! generic info", BannerKind::Info, "generic info")]
#[case("> Note: label kept", BannerKind::Note, "Note: label kept")]
fn banner_kinds(#[case] input: &str, #[case] kind: BannerKind, #[case] content: &str) {
    assert_eq!(
        parse(input),
        vec![BlockToken::Banner {
            kind,
            inlines: vec![text(content)],
        }]
    );
}

#[rstest]
#[case("---")]
#[case("***")]
#[case("___")]
fn horizontal_rules(#[case] input: &str) {
    assert_eq!(parse(input), vec![BlockToken::HorizontalRule]);
}

#[test]
fn blank_line_is_an_empty_paragraph() {
    assert_eq!(
        parse("a\n\nb"),
        vec![
            BlockToken::Paragraph {
                inlines: vec![text("a")],
            },
            BlockToken::Paragraph { inlines: vec![] },
            BlockToken::Paragraph {
                inlines: vec![text("b")],
            },
        ]
    );
}

#[test]
fn empty_document_yields_no_blocks() {
    assert_eq!(parse(""), vec![]);
}

#[test]
fn blocks_preserve_document_order() {
    let doc = "# Title\n\n- item\n\n```sh\nls\n```\n\n|h|\n|-|\n|c|\n\n---\ndone";
    let kinds: Vec<&str> = parse(doc)
        .iter()
        .map(|b| match b {
            BlockToken::Heading { .. } => "heading",
            BlockToken::Paragraph { .. } => "paragraph",
            BlockToken::Bullet { .. } => "bullet",
            BlockToken::CodeBlock { .. } => "code",
            BlockToken::Table { .. } => "table",
            BlockToken::HorizontalRule => "rule",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "bullet",
            "paragraph",
            "code",
            "paragraph",
            "table",
            "paragraph",
            "rule",
            "paragraph",
        ]
    );
}

/// Parsing is total: none of these may panic, whatever they produce.
#[test]
fn hostile_inputs_terminate() {
    let inputs = [
        "[![",
        "[![]",
        "![",
        "![]",
        "```",
        "``````",
        "|",
        "||",
        "|||",
        "**",
        "\u{0}",
        "# ",
        "- ",
        "!!! ",
        "> Note:",
        "[",
        "]",
        "`",
        "***bold**",
        "[a](",
        "[![a](b)](",
        "\t- tabbed",
        "é**é**é",
    ];
    for input in inputs {
        let _ = parse(input);
    }
    let _ = parse(&"*`[".repeat(2000));
}
