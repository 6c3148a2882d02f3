/// A recognised list line, before depth is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub ordered: bool,
    /// Source number of an ordered item.
    pub index: Option<u32>,
    /// Leading whitespace width in columns.
    pub indent: usize,
    /// Text after the marker and its following whitespace.
    pub content: &'a str,
}

/// List marker syntax.
///
/// Unordered: optional indent, `-` or `*`, whitespace, content.
/// Ordered: optional indent, digits, `.`, whitespace, content. The number is
/// passed through as written, never renumbered.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 2] = ['-', '*'];
    pub const ORDERED_DELIMITER: char = '.';

    /// Leading whitespace as (columns, byte offset). A tab counts as one full
    /// indent step.
    pub fn leading_indent(line: &str, indent_width: usize) -> (usize, usize) {
        let mut columns = 0;
        for (i, c) in line.char_indices() {
            match c {
                '\t' => columns += indent_width,
                c if c.is_whitespace() => columns += 1,
                _ => return (columns, i),
            }
        }
        (columns, line.len())
    }

    /// Indent level, capped at `max_depth`.
    pub fn depth(indent: usize, indent_width: usize, max_depth: usize) -> usize {
        (indent / indent_width.max(1)).min(max_depth)
    }

    pub fn unordered(line: &str, indent_width: usize) -> Option<ListLine<'_>> {
        let (indent, at) = Self::leading_indent(line, indent_width);
        let rest = &line[at..];
        let bullet = rest.chars().next().filter(|c| Self::BULLETS.contains(c))?;
        let content = Self::after_marker_space(&rest[bullet.len_utf8()..])?;
        Some(ListLine {
            ordered: false,
            index: None,
            indent,
            content,
        })
    }

    pub fn ordered(line: &str, indent_width: usize) -> Option<ListLine<'_>> {
        let (indent, at) = Self::leading_indent(line, indent_width);
        let rest = &line[at..];
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }
        let index = rest[..digits_len].parse::<u32>().ok().filter(|n| *n > 0)?;
        let after_number = rest[digits_len..].strip_prefix(Self::ORDERED_DELIMITER)?;
        let content = Self::after_marker_space(after_number)?;
        Some(ListLine {
            ordered: true,
            index: Some(index),
            indent,
            content,
        })
    }

    /// Requires at least one whitespace char after a marker and skips the run.
    fn after_marker_space(s: &str) -> Option<&str> {
        let trimmed = s.trim_start();
        (trimmed.len() < s.len()).then_some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some((0, "item")))]
    #[case("* item", Some((0, "item")))]
    #[case("  - nested", Some((2, "nested")))]
    #[case("\t- tabbed", Some((2, "tabbed")))]
    #[case("-   wide gap", Some((0, "wide gap")))]
    #[case("- ", Some((0, "")))]
    #[case("-item", None)]
    #[case("**bold** text", None)]
    #[case("*italic* text", None)]
    #[case("+ plus", None)]
    fn unordered_markers(#[case] line: &str, #[case] expected: Option<(usize, &str)>) {
        let got = ListMarker::unordered(line, 2).map(|l| (l.indent, l.content));
        assert_eq!(got, expected);
    }

    #[rstest]
    #[case("1. first", Some((1, 0, "first")))]
    #[case("7. seventh", Some((7, 0, "seventh")))]
    #[case("   12. twelfth", Some((12, 3, "twelfth")))]
    #[case("1.no space", None)]
    #[case("1) paren", None)]
    #[case("0. zero", None)]
    #[case("99999999999. overflow", None)]
    #[case(". dot", None)]
    fn ordered_markers(#[case] line: &str, #[case] expected: Option<(u32, usize, &str)>) {
        let got = ListMarker::ordered(line, 2).map(|l| (l.index.unwrap_or_default(), l.indent, l.content));
        assert_eq!(got, expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(5, 2)]
    #[case(12, 6)]
    #[case(40, 6)]
    fn depth_is_capped(#[case] indent: usize, #[case] expected: usize) {
        assert_eq!(ListMarker::depth(indent, 2, 6), expected);
    }

    #[test]
    fn zero_indent_width_does_not_divide_by_zero() {
        assert_eq!(ListMarker::depth(3, 0, 6), 3);
    }
}
