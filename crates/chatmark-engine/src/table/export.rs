//! Delimited-text (CSV) export of a [`Table`].
//!
//! Quoting follows RFC 4180 so the output opens cleanly in spreadsheet tools:
//! a field containing a comma, a double quote or a line break is wrapped in
//! double quotes with internal quotes doubled. Other fields are emitted as is.

use std::borrow::Cow;

use super::Table;

pub const FIELD_SEPARATOR: char = ',';
pub const RECORD_SEPARATOR: char = '\n';
const QUOTE: char = '"';

/// Escapes a single field.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([FIELD_SEPARATOR, QUOTE, '\n', '\r']) {
        Cow::Owned(format!("{QUOTE}{}{QUOTE}", field.replace(QUOTE, "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

impl Table {
    /// Serializes the header and body rows, one record per line.
    ///
    /// Records are separated by `\n` with no trailing newline. Identical tables
    /// always produce identical bytes.
    #[must_use]
    pub fn to_delimited_text(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push(RECORD_SEPARATOR);
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    out.push(FIELD_SEPARATOR);
                }
                out.push_str(&escape_field(cell));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("", "")]
    #[case("a,b", "\"a,b\"")]
    #[case("He said \"hi\", bye", "\"He said \"\"hi\"\", bye\"")]
    #[case("\"", "\"\"\"\"")]
    #[case("two\nlines", "\"two\nlines\"")]
    #[case("cr\rhere", "\"cr\rhere\"")]
    #[case("  spaced  ", "  spaced  ")]
    fn field_escaping(#[case] field: &str, #[case] expected: &str) {
        assert_eq!(escape_field(field), expected);
    }

    #[test]
    fn unescaped_field_is_borrowed() {
        assert!(matches!(escape_field("120"), Cow::Borrowed(_)));
    }

    #[test]
    fn keyword_table_export() {
        let table = Table::from_lines([
            "| Keyword | Clicks |",
            "|---|---|",
            "| shoes | 120 |",
            "| boots | 45 |",
        ]);
        assert_eq!(table.to_delimited_text(), "Keyword,Clicks\nshoes,120\nboots,45");
    }

    #[test]
    fn padded_cells_export_as_empty_fields() {
        let table = Table::from_lines(["| a | b | c |", "| 1 |"]);
        assert_eq!(table.to_delimited_text(), "a,b,c\n1,,");
    }

    #[test]
    fn header_only_table_has_one_record() {
        let table = Table::from_lines(["| Campaign, name |"]);
        assert_eq!(table.to_delimited_text(), "\"Campaign, name\"");
    }

    #[test]
    fn export_is_deterministic() {
        let table = Table::new(
            vec!["q".into(), "n".into()],
            vec![vec!["say \"x\"".into(), "1,000".into()]],
        );
        assert_eq!(table.to_delimited_text(), table.clone().to_delimited_text());
        assert_eq!(table.to_delimited_text(), "q,n\n\"say \"\"x\"\"\",\"1,000\"");
    }
}
