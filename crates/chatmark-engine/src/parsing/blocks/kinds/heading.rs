/// ATX heading syntax, levels 1 to 4.
pub struct Heading;

impl Heading {
    /// Prefixes in longest-first order so `### ` is never read as `# `.
    pub const PREFIXES: [(&'static str, u8); 4] = [("#### ", 4), ("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns the level and the text after the prefix.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| line.strip_prefix(*prefix).map(|rest| (*level, rest)))
    }
}
