//! Render-time derivations over a [`ChartDescriptor`].
//!
//! These never mutate the descriptor; they compute what a renderer needs from
//! the declaration and its first data row.

use serde::Serialize;
use serde_json::Value;

use super::ChartDescriptor;

/// Chart kinds a renderer draws. Anything unrecognised draws as a bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
}

impl ChartKind {
    pub fn from_type(chart_type: Option<&str>) -> Self {
        match chart_type {
            Some("line") => ChartKind::Line,
            Some("area") => ChartKind::Area,
            Some("pie") => ChartKind::Pie,
            _ => ChartKind::Bar,
        }
    }
}

/// One pie segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

impl ChartDescriptor {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        ChartKind::from_type(self.chart_type.as_deref())
    }

    /// Series keys to plot.
    ///
    /// Declared `yKeys` win. Otherwise a declared `valueKey` is the single
    /// series; otherwise every numeric field of the first data row except
    /// `xKey`, in row order.
    #[must_use]
    pub fn derive_y_keys(&self) -> Vec<String> {
        if !self.y_keys.is_empty() {
            return self.y_keys.clone();
        }
        if let Some(value_key) = &self.value_key {
            return vec![value_key.clone()];
        }
        let Some(first) = self.data.first() else {
            return vec![];
        };
        first
            .iter()
            .filter(|(key, value)| *key != &self.x_key && value.is_number())
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Projects every data row to a `{name, value}` pie slice.
    ///
    /// The label comes from `nameKey` when declared, else `xKey`, falling back
    /// to `Item N` (1-indexed). The value comes from `valueKey` when declared,
    /// else the first derived series key, falling back to 0.
    #[must_use]
    pub fn pie_slices(&self) -> Vec<PieSlice> {
        let label_key = self.name_key.as_deref().unwrap_or(&self.x_key);
        let value_key = self
            .value_key
            .clone()
            .or_else(|| self.derive_y_keys().into_iter().next());

        self.data
            .iter()
            .enumerate()
            .map(|(i, row)| PieSlice {
                name: row
                    .get(label_key)
                    .and_then(label_of)
                    .unwrap_or_else(|| format!("Item {}", i + 1)),
                value: value_key
                    .as_deref()
                    .and_then(|k| row.get(k))
                    .and_then(number_of)
                    .unwrap_or(0.0),
            })
            .collect()
    }
}

fn label_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn chart(json: &str) -> ChartDescriptor {
        ChartDescriptor::decode(json).unwrap()
    }

    #[rstest]
    #[case(r#"{"type":"bar"}"#, ChartKind::Bar)]
    #[case(r#"{"type":"line"}"#, ChartKind::Line)]
    #[case(r#"{"type":"area"}"#, ChartKind::Area)]
    #[case(r#"{"type":"pie"}"#, ChartKind::Pie)]
    #[case(r#"{"type":"radar"}"#, ChartKind::Bar)]
    #[case(r#"{}"#, ChartKind::Bar)]
    fn kind_falls_back_to_bar(#[case] json: &str, #[case] expected: ChartKind) {
        assert_eq!(chart(json).kind(), expected);
    }

    #[test]
    fn declared_y_keys_win() {
        let c = chart(r#"{"data":[{"name":"a","x":1,"y":2}],"yKeys":["y"],"valueKey":"x"}"#);
        assert_eq!(c.derive_y_keys(), vec!["y"]);
    }

    #[test]
    fn value_key_is_used_when_y_keys_are_empty() {
        let c = chart(r#"{"data":[{"name":"a","spend":1,"sales":2}],"valueKey":"sales"}"#);
        assert_eq!(c.derive_y_keys(), vec!["sales"]);
    }

    #[test]
    fn numeric_fields_of_first_row_are_derived() {
        let c = chart(
            r#"{"data":[{"date":"2024-01-01","spend":12.5,"label":"x","sales":40,"ok":true},{"other":1}],"xKey":"date"}"#,
        );
        assert_eq!(c.derive_y_keys(), vec!["spend", "sales"]);
    }

    #[test]
    fn x_key_is_excluded_even_when_numeric() {
        let c = chart(r#"{"data":[{"day":1,"clicks":3}],"xKey":"day"}"#);
        assert_eq!(c.derive_y_keys(), vec!["clicks"]);
    }

    #[test]
    fn no_data_derives_no_keys() {
        assert!(chart(r#"{"type":"line"}"#).derive_y_keys().is_empty());
    }

    #[test]
    fn pie_uses_name_and_value_keys() {
        let c = chart(
            r#"{"type":"pie","data":[{"campaign":"A","spend":150},{"campaign":"B","spend":90}],"nameKey":"campaign","valueKey":"spend"}"#,
        );
        assert_eq!(
            c.pie_slices(),
            vec![
                PieSlice {
                    name: "A".into(),
                    value: 150.0
                },
                PieSlice {
                    name: "B".into(),
                    value: 90.0
                },
            ]
        );
    }

    #[test]
    fn pie_falls_back_to_x_key_and_first_derived_key() {
        let c = chart(r#"{"type":"pie","data":[{"name":"Sponsored","orders":7,"units":9}]}"#);
        assert_eq!(
            c.pie_slices(),
            vec![PieSlice {
                name: "Sponsored".into(),
                value: 7.0
            }]
        );
    }

    #[test]
    fn pie_fallback_label_and_value() {
        let c = chart(
            r#"{"type":"pie","data":[{"value":"n/a"},{"name":null,"value":"12.5"},{"name":3,"value":4}],"valueKey":"value"}"#,
        );
        assert_eq!(
            c.pie_slices(),
            vec![
                PieSlice {
                    name: "Item 1".into(),
                    value: 0.0
                },
                PieSlice {
                    name: "Item 2".into(),
                    value: 12.5
                },
                PieSlice {
                    name: "3".into(),
                    value: 4.0
                },
            ]
        );
    }

    #[test]
    fn pie_without_any_series_key_is_all_zero() {
        let c = chart(r#"{"type":"pie","data":[{"name":"a","note":"x"}]}"#);
        assert_eq!(
            c.pie_slices(),
            vec![PieSlice {
                name: "a".into(),
                value: 0.0
            }]
        );
    }
}
