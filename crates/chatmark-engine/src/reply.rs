use serde::Serialize;

use crate::{
    actions::{ProposedAction, split_actions},
    chart::ChartDescriptor,
    parsing::{Block, ParseOptions, parse_message_with},
    table::Table,
};

/// A fully processed assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    /// The reply text with any action block removed.
    pub message: String,
    pub actions: Vec<ProposedAction>,
    pub blocks: Vec<Block>,
}

impl ChatReply {
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(Block::as_table)
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartDescriptor> {
        self.blocks.iter().filter_map(Block::as_chart)
    }
}

/// Splits off the action block, then scans what remains.
pub fn parse_chat_reply(content: &str, options: &ParseOptions) -> ChatReply {
    let split = split_actions(content);
    ChatReply {
        message: split.message.to_string(),
        blocks: parse_message_with(split.message, options),
        actions: split.actions,
    }
}
