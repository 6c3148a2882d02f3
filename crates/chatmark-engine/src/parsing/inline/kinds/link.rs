pub struct Link;

impl Link {
    pub const OPEN: char = '[';
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: char = ')';

    pub fn wrap(text: &str, url: &str) -> String {
        format!("{}{text}{}{url}{}", Self::OPEN, Self::MIDDLE, Self::CLOSE)
    }
}
