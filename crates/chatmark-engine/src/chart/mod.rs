//! # Chart Declarations
//!
//! A chart is declared inline in a reply as a JSON object between `[CHART]`
//! and `[/CHART]`:
//!
//! ```text
//! [CHART]
//! {"type":"bar","title":"Top Campaigns","data":[{"name":"A","spend":150}],"xKey":"name","yKeys":["spend"]}
//! [/CHART]
//! ```
//!
//! [`ChartDescriptor::decode`] keeps the declaration faithful to its input.
//! Everything a renderer derives from it (series keys, pie slices, the
//! effective chart kind) lives in [`normalize`] so it can be tested on its own.
//!
//! Only two things make a declaration undecodable: invalid JSON, and a
//! top-level value that is not an object. Below that, decoding is lenient and
//! a field of the wrong shape is treated as absent.

pub mod normalize;

use std::io;

use serde::Serialize;
use serde_json::{Map, Value};

pub use normalize::{ChartKind, PieSlice};

pub const DEFAULT_X_KEY: &str = "name";
pub const DEFAULT_NAME_KEY: &str = "name";
pub const DEFAULT_VALUE_KEY: &str = "value";
pub const VERTICAL_LAYOUT: &str = "vertical";

/// One chart data row, keys in declaration order.
pub type DataRow = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("chart body is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("chart body must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

/// Renderer-agnostic chart declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescriptor {
    /// The type string as declared; see [`ChartDescriptor::kind`].
    #[serde(rename = "type")]
    pub chart_type: Option<String>,
    pub title: Option<String>,
    pub data: Vec<DataRow>,
    pub x_key: String,
    /// Declared series keys; may be empty, see [`ChartDescriptor::derive_y_keys`].
    pub y_keys: Vec<String>,
    /// `nameKey` as declared, `None` when absent.
    pub name_key: Option<String>,
    /// `valueKey` as declared, `None` when absent.
    pub value_key: Option<String>,
    pub layout: Option<String>,
}

impl ChartDescriptor {
    /// Decodes the text between `[CHART]` and `[/CHART]`.
    pub fn decode(body: &str) -> Result<Self, ChartError> {
        Self::from_value(serde_json::from_str(body.trim())?)
    }

    /// Like [`ChartDescriptor::decode`], but pulls the body from `reader`.
    /// Reading stops at the first syntax error.
    pub fn read(reader: impl io::Read) -> Result<Self, ChartError> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    fn from_value(value: Value) -> Result<Self, ChartError> {
        let Value::Object(obj) = value else {
            return Err(ChartError::NotAnObject {
                found: json_kind(&value),
            });
        };
        Ok(Self::from_object(&obj))
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        let string = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

        let data = match obj.get("data") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_object().cloned())
                .collect(),
            _ => vec![],
        };

        let y_keys = match obj.get("yKeys") {
            Some(Value::Array(keys)) => keys
                .iter()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect(),
            _ => vec![],
        };

        Self {
            chart_type: string("type"),
            title: string("title"),
            data,
            x_key: string("xKey").unwrap_or_else(|| DEFAULT_X_KEY.to_string()),
            y_keys,
            name_key: string("nameKey"),
            value_key: string("valueKey"),
            layout: string("layout"),
        }
    }

    /// `nameKey`, defaulting to `"name"`.
    #[must_use]
    pub fn name_key(&self) -> &str {
        self.name_key.as_deref().unwrap_or(DEFAULT_NAME_KEY)
    }

    /// `valueKey`, defaulting to `"value"`.
    #[must_use]
    pub fn value_key(&self) -> &str {
        self.value_key.as_deref().unwrap_or(DEFAULT_VALUE_KEY)
    }

    /// A chart without data renders as an empty state.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.data.is_empty()
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.layout.as_deref() == Some(VERTICAL_LAYOUT)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
