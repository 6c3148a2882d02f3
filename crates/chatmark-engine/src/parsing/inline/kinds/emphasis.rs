/// Emphasis delimiter runs.
///
/// Only asterisks are recognised; underscores are left as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis(pub &'static str);

impl Emphasis {
    pub const ITALIC: Emphasis = Emphasis("*");
    pub const BOLD: Emphasis = Emphasis("**");
    pub const BOLD_ITALIC: Emphasis = Emphasis("***");

    pub fn delimiter(self) -> &'static str {
        self.0
    }

    pub fn wrap(self, text: &str) -> String {
        format!("{d}{text}{d}", d = self.0)
    }
}
