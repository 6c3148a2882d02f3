/// Horizontal rule: a line of three or more of the same rule character.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::CHARS.contains(&first) && t.len() >= Self::MIN_LEN && t.chars().all(|c| c == first)
    }
}
