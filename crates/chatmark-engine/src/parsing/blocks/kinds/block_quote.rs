/// Blockquote block type with owned delimiter constant.
///
/// Only a single `> ` prefix is recognised; quotes do not nest and a bare
/// `>` without the space is ordinary text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, marker plus its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text after the prefix.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn nested_marker_stays_in_content() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
    }

    #[test]
    fn marker_without_space_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), None);
        assert_eq!(BlockQuote::strip_prefix(" > hello"), None);
    }
}
