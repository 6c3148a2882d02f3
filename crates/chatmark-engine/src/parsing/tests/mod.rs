//! Integration tests for the parsing module.
//!
//! Outlines are compared with inline `insta` snapshots; every parse is also
//! run through the structural invariants.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    parsing::{
        Block, ParseOptions, normalize_line_endings, parse_message, parse_message_with,
        snapshot::{invariants, normalize::block_text, outline},
    },
    table::Table,
};

fn parse_checked(text: &str) -> Vec<Block> {
    let blocks = parse_message(text);
    invariants(&blocks, &ParseOptions::default());
    blocks
}

#[test]
fn heading_then_table_exports_csv() {
    let text = "## Results\n| Keyword | Clicks |\n|---|---|\n| shoes | 120 |\n| boots | 45 |";
    let blocks = parse_checked(text);

    assert_eq!(blocks.len(), 2);
    assert!(matches!(&blocks[0], Block::Heading { level: 2, .. }));
    assert_eq!(block_text(&blocks[0]), "Results");

    let table = blocks[1].as_table().unwrap();
    assert_eq!(
        table,
        &Table::new(
            vec!["Keyword".into(), "Clicks".into()],
            vec![
                vec!["shoes".into(), "120".into()],
                vec!["boots".into(), "45".into()],
            ],
        )
    );
    assert_eq!(table.to_delimited_text(), "Keyword,Clicks\nshoes,120\nboots,45");
}

#[test]
fn malformed_chart_keeps_surrounding_text() {
    let blocks = parse_checked("Before [CHART] {invalid json [/CHART] After");

    let text: String = blocks.iter().map(block_text).collect();
    assert!(text.contains("Before"));
    assert!(text.contains("After"));
    assert!(blocks.iter().all(|b| b.as_chart().is_none()));
}

#[test]
fn malformed_chart_region_lines_become_paragraphs() {
    let blocks = parse_checked("[CHART]\n{not json\n[/CHART]");
    assert_snapshot!(outline(&blocks), @r#"
    Paragraph: PlainText("[CHART]")
    Paragraph: PlainText("{not json")
    Paragraph: PlainText("[/CHART]")
    "#);
}

#[test]
fn bold_italic_is_one_span() {
    let blocks = parse_checked("***bold-italic***");
    assert_snapshot!(outline(&blocks), @r#"Paragraph: BoldItalic("bold-italic")"#);
}

#[test]
fn mixed_message_outline() {
    let text = "\
# Campaign review
Spend is **up** and CTR is *flat*, see [report](https://example.com/r).

- first point
  - nested `code`
1. step one
2. step two
> quoted
---
```sql
SELECT 1;
```";
    let blocks = parse_checked(text);
    assert_snapshot!(outline(&blocks), @r#"
    Heading(1): PlainText("Campaign review")
    Paragraph: PlainText("Spend is ") Bold("up") PlainText(" and CTR is ") Italic("flat") PlainText(", see ") Link("report" -> "https://example.com/r") PlainText(".")
    EmptyLine
    ListItem(unordered, depth=0): PlainText("first point")
    ListItem(unordered, depth=1): PlainText("nested ") Code("code")
    ListItem(ordered, depth=0, index=1): PlainText("step one")
    ListItem(ordered, depth=0, index=2): PlainText("step two")
    Blockquote: PlainText("quoted")
    HorizontalRule
    CodeBlock(sql): 1 lines
    "#);
}

#[test]
fn chart_between_paragraphs() {
    let text = r#"Here is the breakdown:
[CHART]
{"type":"pie","title":"Spend by channel","data":[{"name":"Search","value":60},{"name":"Social","value":40}]}
[/CHART]
Search dominates."#;
    let blocks = parse_checked(text);
    assert_snapshot!(outline(&blocks), @r#"
    Paragraph: PlainText("Here is the breakdown:")
    Chart(Pie): Spend by channel
    Paragraph: PlainText("Search dominates.")
    "#);

    let slices = blocks[1].as_chart().unwrap().pie_slices();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].name, "Search");
    assert_eq!(slices[1].value, 40.0);
}

#[test]
fn ordered_numbers_are_not_renumbered() {
    let blocks = parse_checked("3. c\n7. g");
    let indices: Vec<_> = blocks
        .iter()
        .map(|b| match b {
            Block::ListItem { index, .. } => *index,
            _ => None,
        })
        .collect();
    assert_eq!(indices, vec![Some(3), Some(7)]);
}

#[test]
fn fence_is_a_raw_zone() {
    let blocks = parse_checked("```\n# not heading\n| not | table |\n**not bold**\n```");
    assert_eq!(
        blocks,
        vec![Block::CodeBlock {
            language: None,
            lines: vec![
                "# not heading".into(),
                "| not | table |".into(),
                "**not bold**".into(),
            ],
        }]
    );
}

#[test]
fn unterminated_fence_consumes_rest() {
    let blocks = parse_checked("before\n```python\nprint(1)\n\nprint(2)");
    assert_snapshot!(outline(&blocks), @r#"
    Paragraph: PlainText("before")
    CodeBlock(python): 3 lines
    "#);
}

#[test]
fn ragged_table_is_padded() {
    let blocks = parse_checked("| a |\n|---|\n| 1 | 2 | 3 |");
    let table = blocks[0].as_table().unwrap();
    assert_eq!(table.header(), vec!["a", "", ""]);
    assert_eq!(table.body(), vec![vec!["1", "2", "3"]]);
}

#[rstest]
#[case("a\r\nb\r\n", "a\nb\n")]
#[case("a\rb", "a\nb")]
#[case("plain", "plain")]
fn line_endings_are_normalized(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_line_endings(input), expected);
}

#[test]
fn crlf_and_lf_parse_the_same() {
    let lf = "# T\n- a\n\n| x |";
    assert_eq!(parse_message(&lf.replace('\n', "\r\n")), parse_message(lf));
}

#[test]
fn custom_indent_and_depth_cap() {
    let options = ParseOptions {
        indent_width: 4,
        max_list_depth: 2,
    };
    let blocks = parse_message_with("    - one\n                    - deep", &options);
    invariants(&blocks, &options);
    let depths: Vec<_> = blocks
        .iter()
        .map(|b| match b {
            Block::ListItem { depth, .. } => *depth,
            _ => usize::MAX,
        })
        .collect();
    assert_eq!(depths, vec![1, 2]);
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("|")]
#[case("||")]
#[case("|||")]
#[case("[CHART]")]
#[case("[/CHART][CHART]")]
#[case("[CHART][/CHART]")]
#[case("[CHART]null[/CHART]")]
#[case("[CHART][1,2][/CHART] tail")]
#[case("```")]
#[case("****")]
#[case("* * *")]
#[case("#")]
#[case("1.")]
#[case("4294967296. overflow")]
#[case("[]()")]
#[case("`")]
#[case("> ")]
#[case("\t\t- tabbed")]
#[case("émoji 🎉 **ünïcödé** `ß`")]
fn parse_is_total(#[case] text: &str) {
    let blocks = parse_checked(text);
    assert!(blocks.len() <= text.lines().count());
}

#[test]
fn every_line_is_claimed_once_without_regions() {
    let text = "# a\nb\n\n- c\n1. d\n> e\n---";
    assert_eq!(parse_checked(text).len(), text.lines().count());
}

#[test]
fn unterminated_chart_openers_scale_linearly() {
    // Given thousands of chart openers with no closer anywhere
    let lines = 20_000;
    let text = "[CHART] {\"type\":\"bar\"}\n".repeat(lines);

    // When parsing
    let started = std::time::Instant::now();
    let blocks = parse_checked(&text);

    // Then every opener is plain text and the parse stays fast
    assert_eq!(blocks.len(), lines);
    assert!(blocks.iter().all(|b| matches!(b, Block::Paragraph { .. })));
    assert!(
        started.elapsed() < std::time::Duration::from_secs(5),
        "took {:?}",
        started.elapsed()
    );
}

#[test]
fn openers_sharing_a_distant_closer_scale_linearly() {
    // Given many openers whose only closer is at the very end
    let openers = 20_000;
    let text = format!("{}[/CHART]", "[CHART] {\"type\":\"bar\"}\n".repeat(openers));

    // When parsing
    let started = std::time::Instant::now();
    let blocks = parse_checked(&text);

    // Then only the last opener forms a chart with the closer
    assert_eq!(blocks.len(), openers);
    assert!(blocks[..openers - 1]
        .iter()
        .all(|b| matches!(b, Block::Paragraph { .. })));
    assert!(blocks[openers - 1].as_chart().is_some());
    assert!(
        started.elapsed() < std::time::Duration::from_secs(5),
        "took {:?}",
        started.elapsed()
    );
}
