//! # Proposed Actions
//!
//! An assistant reply may end with a machine-readable list of changes the user
//! can approve:
//!
//! ```text
//! Raise the bid on "shoes".
//! [ACTIONS]
//! {"actions":[{"scope":"inline","tool":"update_target_bid","label":"Raise bid to $0.50"}]}
//! [/ACTIONS]
//! ```
//!
//! [`split_actions`] cuts that block off so it never reaches the block
//! scanner. A block that fails to decode is left in the message untouched.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

pub const INLINE_SCOPE: &str = "inline";
pub const QUEUE_SCOPE: &str = "queue";

const ACTIONS_PATTERN: &str = r"(?s)\[ACTIONS\]\s*(\{.*?\})\s*\[/ACTIONS\]";

fn actions_regex() -> &'static Regex {
    static ACTIONS_REGEX: OnceLock<Regex> = OnceLock::new();
    ACTIONS_REGEX.get_or_init(|| Regex::new(ACTIONS_PATTERN).expect("Invalid actions regex"))
}

/// One proposed change. Every field is optional on the wire.
///
/// Ids and values are kept as the JSON the assistant wrote (`123456`,
/// `0.35` and `"$0.35"` are all common). Text fields of any other shape are
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProposedAction {
    /// `inline` (approve in chat) or `queue` (goes to an approval queue).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// Tool arguments, passed through untouched.
    pub arguments: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_value: Option<Value>,
}

impl ProposedAction {
    /// Reads an action entry. Returns `None` only when `item` is not an object.
    pub fn from_value(item: &Value) -> Option<Self> {
        let obj = item.as_object()?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        let raw = |key: &str| obj.get(key).filter(|v| !v.is_null()).cloned();

        Some(Self {
            scope: text("scope"),
            tool: text("tool"),
            arguments: raw("arguments").unwrap_or_default(),
            label: text("label"),
            change_type: text("change_type"),
            entity_name: text("entity_name"),
            entity_id: raw("entity_id"),
            current_value: raw("current_value"),
            proposed_value: raw("proposed_value"),
        })
    }

    /// `current -> proposed`, when both values are present.
    #[must_use]
    pub fn value_change(&self) -> Option<String> {
        let current = value_text(self.current_value.as_ref()?);
        let proposed = value_text(self.proposed_value.as_ref()?);
        Some(format!("{current} -> {proposed}"))
    }

    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.scope.as_deref() == Some(INLINE_SCOPE)
    }

    #[must_use]
    pub fn is_queued(&self) -> bool {
        self.scope.as_deref() == Some(QUEUE_SCOPE)
    }

    /// Label for display, falling back to the tool name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.tool.as_deref())
            .unwrap_or("Proposed change")
    }
}

/// A reply with its action block removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSplit<'a> {
    pub message: &'a str,
    pub actions: Vec<ProposedAction>,
}

/// Splits the first `[ACTIONS] {...} [/ACTIONS]` block off `content`.
///
/// The message becomes the (trimmed) text before the block. A missing
/// `actions` field counts as an empty list. When the JSON is malformed, or
/// `actions` is not an array, `content` is returned unchanged with no actions.
/// Array entries that are not JSON objects are skipped.
pub fn split_actions(content: &str) -> ActionSplit<'_> {
    let unchanged = ActionSplit {
        message: content,
        actions: vec![],
    };

    let Some(caps) = actions_regex().captures(content) else {
        return unchanged;
    };
    let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
        return unchanged;
    };

    let data: Value = match serde_json::from_str(body.as_str().trim()) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to parse [ACTIONS] JSON in chat response: {e}");
            return unchanged;
        }
    };

    let actions = match data.get("actions") {
        None => vec![],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let action = ProposedAction::from_value(item);
                if action.is_none() {
                    log::debug!("skipping action entry that is not an object: {item}");
                }
                action
            })
            .collect(),
        Some(_) => return unchanged,
    };

    ActionSplit {
        message: content[..whole.start()].trim(),
        actions,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_split_trailing_actions() {
        // Given a reply that ends with an action block
        let content = "Raise the bid.\n\n[ACTIONS]\n{\"actions\":[{\"scope\":\"inline\",\"tool\":\"update_target_bid\",\"arguments\":{\"body\":{\"bid\":0.5}},\"label\":\"Raise bid\",\"current_value\":\"$0.35\",\"proposed_value\":\"$0.50\"}]}\n[/ACTIONS]";

        // When splitting
        let split = split_actions(content);

        // Then the message loses the block and the action is decoded
        assert_eq!(split.message, "Raise the bid.");
        assert_eq!(
            split.actions,
            vec![ProposedAction {
                scope: Some("inline".into()),
                tool: Some("update_target_bid".into()),
                arguments: json!({"body": {"bid": 0.5}}),
                label: Some("Raise bid".into()),
                current_value: Some(json!("$0.35")),
                proposed_value: Some(json!("$0.50")),
                ..Default::default()
            }]
        );
        assert!(split.actions[0].is_inline());
    }

    #[test]
    fn test_no_action_block() {
        let split = split_actions("Just a reply.");
        assert_eq!(split.message, "Just a reply.");
        assert!(split.actions.is_empty());
    }

    #[test]
    fn test_malformed_json_leaves_reply_untouched() {
        let content = "Reply\n[ACTIONS] {\"actions\": [} [/ACTIONS]";
        let split = split_actions(content);
        assert_eq!(split.message, content);
        assert!(split.actions.is_empty());
    }

    #[test]
    fn test_non_array_actions_leaves_reply_untouched() {
        let content = "Reply\n[ACTIONS]{\"actions\": \"all\"}[/ACTIONS]";
        assert_eq!(split_actions(content).message, content);
    }

    #[test]
    fn test_missing_actions_field_strips_block() {
        let split = split_actions("Reply\n[ACTIONS]{}[/ACTIONS]");
        assert_eq!(split.message, "Reply");
        assert!(split.actions.is_empty());
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let split = split_actions(
            "R [ACTIONS]{\"actions\":[1, \"x\", null, {\"scope\":\"queue\"}, {\"label\": 5}]}[/ACTIONS]",
        );
        assert_eq!(split.actions.len(), 2);
        assert!(split.actions[0].is_queued());
        assert_eq!(split.actions[0].arguments, Value::Null);
        // A wrongly typed label is dropped, the entry is kept.
        assert_eq!(split.actions[1].label, None);
        assert_eq!(split.actions[1].display_label(), "Proposed change");
    }

    #[test]
    fn test_numeric_ids_and_values_are_kept() {
        // Given an action whose id and values are bare JSON numbers
        let content = "Raise it.\n[ACTIONS]\n{\"actions\":[{\"scope\":\"inline\",\"tool\":\"keyword_management-update_target_bid\",\"label\":\"Raise bid\",\"entity_id\":123456,\"current_value\":0.35,\"proposed_value\":0.5}]}\n[/ACTIONS]";

        // When splitting
        let split = split_actions(content);

        // Then the action survives with its values as written
        assert_eq!(split.message, "Raise it.");
        assert_eq!(split.actions.len(), 1);
        let action = &split.actions[0];
        assert_eq!(action.entity_id, Some(json!(123456)));
        assert_eq!(action.current_value, Some(json!(0.35)));
        assert_eq!(action.proposed_value, Some(json!(0.5)));
        assert_eq!(action.value_change().as_deref(), Some("0.35 -> 0.5"));
    }

    #[test]
    fn test_value_change_uses_strings_verbatim() {
        let action = ProposedAction {
            current_value: Some(json!("$90")),
            proposed_value: Some(json!("$50")),
            ..Default::default()
        };
        assert_eq!(action.value_change().as_deref(), Some("$90 -> $50"));
        assert_eq!(ProposedAction::default().value_change(), None);
    }

    #[test]
    fn test_serializes_values_unchanged() {
        let action =
            ProposedAction::from_value(&json!({"entity_id": 7, "current_value": "$1", "extra": true}))
                .unwrap();
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"arguments": null, "entity_id": 7, "current_value": "$1"})
        );
    }

    #[test]
    fn test_display_label_falls_back_to_tool() {
        let action = ProposedAction {
            tool: Some("delete_target".into()),
            ..Default::default()
        };
        assert_eq!(action.display_label(), "delete_target");
        assert_eq!(ProposedAction::default().display_label(), "Proposed change");
    }
}
