/// Backtick code fence syntax.
///
/// Everything between an opener and the next closer is a raw zone: no block
/// or inline parsing happens inside.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If the line opens a fence, returns its info string (the language).
    pub fn opener(line: &str) -> Option<Option<String>> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;
        let lang = rest.trim_start_matches('`').trim();
        Some((!lang.is_empty()).then(|| lang.to_string()))
    }

    pub fn closes(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }
}
