use crate::parsing::{ParseOptions, blocks::Block};

/// Panics if `blocks` breaks a structural guarantee of the parser.
pub fn check(blocks: &[Block], options: &ParseOptions) {
    for b in blocks {
        match b {
            Block::Heading { level, .. } => {
                assert!((1..=4).contains(level), "heading level out of range: {level}");
            }
            Block::ListItem {
                ordered,
                depth,
                index,
                ..
            } => {
                assert_eq!(
                    *ordered,
                    index.is_some(),
                    "list index present iff ordered: {b:?}"
                );
                assert_ne!(*index, Some(0), "ordered index must be positive: {b:?}");
                assert!(
                    *depth <= options.max_list_depth,
                    "list depth {depth} above cap {}",
                    options.max_list_depth
                );
            }
            Block::Table(table) => {
                let width = table.header().len();
                assert!(width >= 1, "table without columns");
                for row in table.body() {
                    assert_eq!(row.len(), width, "ragged table row: {row:?}");
                }
            }
            Block::Paragraph { content } => {
                assert!(!content.is_empty(), "paragraph without content");
            }
            _ => {}
        }

        for span in b.spans().unwrap_or_default() {
            assert!(!span.text().is_empty(), "empty span in {b:?}");
        }
    }
}
