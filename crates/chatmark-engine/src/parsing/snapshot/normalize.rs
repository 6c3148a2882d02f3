use serde::Serialize;

use crate::parsing::{
    blocks::Block,
    inline::{Span, spans_text},
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    /// Short description for blocks without inline content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub inline: Vec<InlineSnap>,
}

#[derive(Debug, Serialize)]
pub struct InlineSnap {
    pub kind: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub fn normalize(blocks: &[Block]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let kind = match b {
                Block::Heading { level, .. } => format!("Heading({level})"),
                Block::ListItem {
                    ordered: true,
                    depth,
                    index,
                    ..
                } => format!("ListItem(ordered, depth={depth}, index={})", index.unwrap_or(0)),
                Block::ListItem { depth, .. } => format!("ListItem(unordered, depth={depth})"),
                Block::CodeBlock {
                    language: Some(lang),
                    ..
                } => format!("CodeBlock({lang})"),
                Block::Table(table) => {
                    format!("Table({}x{})", table.column_count(), table.body().len())
                }
                Block::Chart { spec } => format!("Chart({:?})", spec.kind()),
                other => other.kind_name().to_string(),
            };

            let summary = match b {
                Block::CodeBlock { lines, .. } => Some(format!("{} lines", lines.len())),
                Block::Table(table) => Some(table.header().join(" | ")),
                Block::Chart { spec } => spec.title.clone(),
                _ => None,
            };

            let inline = b
                .spans()
                .unwrap_or_default()
                .iter()
                .map(|span| InlineSnap {
                    kind: span.kind_name().to_string(),
                    text: span.text().to_string(),
                    url: match span {
                        Span::Link { url, .. } => Some(url.clone()),
                        _ => None,
                    },
                })
                .collect();

            BlockSnap {
                kind,
                summary,
                inline,
            }
        })
        .collect();

    Snap { blocks }
}

/// One line per block: `Kind: Span("text") Span("text")` or `Kind: summary`.
pub fn outline(blocks: &[Block]) -> String {
    normalize(blocks)
        .blocks
        .iter()
        .map(|b| {
            let detail = if b.inline.is_empty() {
                b.summary.clone()
            } else {
                Some(
                    b.inline
                        .iter()
                        .map(|s| match &s.url {
                            Some(url) => format!("{}({:?} -> {:?})", s.kind, s.text, url),
                            None => format!("{}({:?})", s.kind, s.text),
                        })
                        .collect::<Vec<_>>()
                        .join(" "),
                )
            };
            match detail {
                Some(d) if !d.is_empty() => format!("{}: {d}", b.kind),
                _ => b.kind.clone(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display text of a block's inline content, for quick assertions.
pub fn block_text(block: &Block) -> String {
    block.spans().map(spans_text).unwrap_or_default()
}
