//! Turns parsed blocks into styled terminal lines.

use chatmark_engine::{Block as MessageBlock, ChartDescriptor, ChartKind, Span as InlineSpan, Table};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 28;

fn span_style(span: &InlineSpan) -> Style {
    match span {
        InlineSpan::PlainText { .. } => Style::default(),
        InlineSpan::Bold { .. } => Style::default().add_modifier(Modifier::BOLD),
        InlineSpan::Italic { .. } => Style::default().add_modifier(Modifier::ITALIC),
        InlineSpan::BoldItalic { .. } => Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::ITALIC),
        InlineSpan::Code { .. } => Style::default().fg(Color::Yellow),
        InlineSpan::Link { .. } => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    }
}

fn styled_spans(spans: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    let mut out = vec![];
    for span in spans {
        out.push(Span::styled(span.text().to_string(), base.patch(span_style(span))));
        if let InlineSpan::Link { url, .. } = span {
            out.push(Span::styled(
                format!(" <{url}>"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    out
}

/// Lines for one block, in display order.
pub fn block_lines(block: &MessageBlock) -> Vec<Line<'static>> {
    match block {
        MessageBlock::Heading { level, content } => {
            let style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            let mut spans = vec![Span::styled(format!("{} ", "#".repeat(*level as usize)), style)];
            spans.extend(styled_spans(content, style));
            vec![Line::from(spans)]
        }
        MessageBlock::Paragraph { content } => {
            vec![Line::from(styled_spans(content, Style::default()))]
        }
        MessageBlock::HorizontalRule => vec![Line::styled(
            "─".repeat(RULE_WIDTH),
            Style::default().fg(Color::DarkGray),
        )],
        MessageBlock::ListItem {
            depth,
            index,
            content,
            ..
        } => {
            let marker = match index {
                Some(n) => format!("{n}. "),
                None => "• ".to_string(),
            };
            let mut spans = vec![Span::raw(format!("{}{marker}", "  ".repeat(*depth)))];
            spans.extend(styled_spans(content, Style::default()));
            vec![Line::from(spans)]
        }
        MessageBlock::CodeBlock { language, lines } => {
            let style = Style::default().fg(Color::Green);
            let mut out = vec![];
            if let Some(lang) = language {
                out.push(Line::styled(
                    format!("[{lang}]"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            out.extend(lines.iter().map(|l| Line::styled(l.clone(), style)));
            out
        }
        MessageBlock::Blockquote { content } => {
            let style = Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC);
            let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::DarkGray))];
            spans.extend(styled_spans(content, style));
            vec![Line::from(spans)]
        }
        MessageBlock::EmptyLine => vec![Line::default()],
        MessageBlock::Table(table) => table_lines(table),
        MessageBlock::Chart { spec } => chart_lines(spec),
    }
}

/// Column-aligned table with a rule under the header.
pub fn table_lines(table: &Table) -> Vec<Line<'static>> {
    let widths: Vec<usize> = (0..table.column_count())
        .map(|col| {
            table
                .rows()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |row: &[String]| {
        row.iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" │ ")
    };

    let mut out = vec![Line::styled(
        format_row(table.header()),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    out.push(Line::styled(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
        Style::default().fg(Color::DarkGray),
    ));
    out.extend(table.body().iter().map(|row| Line::raw(format_row(row))));
    out
}

/// Text summary of a chart: a title line, then one line per data point.
pub fn chart_lines(spec: &ChartDescriptor) -> Vec<Line<'static>> {
    let kind = spec.kind();
    let title = spec.title.as_deref().unwrap_or("Untitled");
    let mut out = vec![Line::styled(
        format!("[{} chart] {title}", kind_label(kind)),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    if !spec.is_renderable() {
        out.push(Line::styled(
            "  (no data)",
            Style::default().fg(Color::DarkGray),
        ));
        return out;
    }

    if kind == ChartKind::Pie {
        out.extend(
            spec.pie_slices()
                .into_iter()
                .map(|slice| Line::raw(format!("  {}: {}", slice.name, slice.value))),
        );
        return out;
    }

    let y_keys = spec.derive_y_keys();
    for (i, row) in spec.data.iter().enumerate() {
        let label = row
            .get(&spec.x_key)
            .map(value_text)
            .unwrap_or_else(|| format!("Item {}", i + 1));
        let series = y_keys
            .iter()
            .map(|key| {
                let value = row.get(key).map(value_text).unwrap_or_default();
                format!("{key}={value}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push(Line::raw(format!("  {label}: {series}")));
    }
    out
}

fn kind_label(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "bar",
        ChartKind::Line => "line",
        ChartKind::Area => "area",
        ChartKind::Pie => "pie",
    }
}

fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Short single-line description for the block list.
pub fn block_label(block: &MessageBlock) -> String {
    let text = block
        .spans()
        .map(|spans| spans.iter().map(InlineSpan::text).collect::<String>())
        .unwrap_or_default();

    let label = match block {
        MessageBlock::Heading { level, .. } => format!("H{level} {text}"),
        MessageBlock::Paragraph { .. } => text,
        MessageBlock::ListItem { index: Some(n), .. } => format!("{n}. {text}"),
        MessageBlock::ListItem { .. } => format!("• {text}"),
        MessageBlock::Blockquote { .. } => format!("│ {text}"),
        MessageBlock::CodeBlock {
            language: Some(lang),
            ..
        } => format!("code ({lang})"),
        MessageBlock::CodeBlock { .. } => "code".to_string(),
        MessageBlock::HorizontalRule => "───".to_string(),
        MessageBlock::EmptyLine => "·".to_string(),
        MessageBlock::Table(table) => {
            format!("table {}×{}", table.column_count(), table.body().len())
        }
        MessageBlock::Chart { spec } => format!(
            "{} chart: {}",
            kind_label(spec.kind()),
            spec.title.as_deref().unwrap_or("Untitled")
        ),
    };

    truncate(&label, LABEL_WIDTH)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
