pub mod block_quote;
pub mod chart_region;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use chart_region::{ChartRegion, CloserIndex, RegionMatch, RegionReader};
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{ListLine, ListMarker};
pub use paragraph::{BlankLine, Paragraph};
pub use thematic_break::ThematicBreak;
