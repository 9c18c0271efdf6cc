use std::collections::HashSet;

use indexmap::IndexSet;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{engine::ResultRow, schema::METADATA_COLUMN, Error, Result};

/// Materialized result row, keyed by output label in projection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(pub Map<String, Value>);

impl Row {
    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }
    pub fn into_value(self) -> Value { Value::Object(self.0) }
    pub fn into_map(self) -> Map<String, Value> { self.0 }

    /// Lowercase labels whose values are stored as JSON text, read from the
    /// metadata column. Missing or unreadable metadata yields an empty set.
    pub fn json_columns(row: &ResultRow) -> IndexSet<String> {
        row.get(METADATA_COLUMN)
            .and_then(|column| column.value.as_text())
            .and_then(|text| serde_json::from_str::<Vec<String>>(text).ok())
            .map(|labels| labels.into_iter().map(|l| l.to_lowercase()).collect())
            .unwrap_or_default()
    }

    /// Convert an engine row, decoding JSON-typed columns and rejecting labels
    /// that collide case-insensitively.
    pub fn materialize(row: &ResultRow) -> Result<Row> {
        let json_columns = Self::json_columns(row);
        let mut seen = HashSet::with_capacity(row.column_count());
        let mut out = Map::new();

        for column in &row.columns {
            if column.label.eq_ignore_ascii_case(METADATA_COLUMN) {
                continue;
            }

            let lower = column.label.to_lowercase();
            if !seen.insert(lower.clone()) {
                return Err(Error::DuplicateColumn(column.label.clone()));
            }

            let native = || column.value.to_json(column.sql_type());
            let value = if json_columns.contains(&lower) {
                match column.value.as_text().map(serde_json::from_str::<Value>) {
                    Some(Ok(decoded)) => decoded,
                    Some(Err(err)) => {
                        debug!(column = %column.label, error = %err, "stored JSON did not decode, using native value");
                        native()
                    }
                    None => native(),
                }
            } else {
                native()
            };

            out.insert(column.label.clone(), value);
        }

        Ok(Row(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ResultColumn, SqlValue};
    use serde_json::json;

    fn metadata(labels: &str) -> ResultColumn {
        ResultColumn::new(METADATA_COLUMN, Some("TEXT"), SqlValue::Text(labels.into()))
    }

    #[test]
    fn test_decodes_json_columns() {
        let row = ResultRow::new(vec![
            ResultColumn::new("meta", Some("TEXT"), SqlValue::Text(r#"{"k":1}"#.into())),
            ResultColumn::new("name", Some("TEXT"), SqlValue::Text(r#"{"not":"decoded"}"#.into())),
            metadata(r#"["meta"]"#),
        ]);

        let out = Row::materialize(&row).unwrap();
        assert_eq!(out.into_value(), json!({
            "meta": {"k": 1},
            "name": "{\"not\":\"decoded\"}"
        }));
    }

    #[test]
    fn test_json_column_falls_back_to_native() {
        let row = ResultRow::new(vec![
            ResultColumn::new("a", Some("TEXT"), SqlValue::Text("not json".into())),
            ResultColumn::new("b", Some("TEXT"), SqlValue::Null),
            metadata(r#"["a","b"]"#),
        ]);

        let out = Row::materialize(&row).unwrap();
        assert_eq!(out.get("a"), Some(&json!("not json")));
        assert_eq!(out.get("b"), Some(&json!(null)));
    }

    #[test]
    fn test_duplicate_labels_are_rejected() {
        let row = ResultRow::new(vec![
            ResultColumn::new("n", Some("TEXT"), SqlValue::Text("x".into())),
            ResultColumn::new("N", Some("TEXT"), SqlValue::Text("x".into())),
            metadata("[]"),
        ]);

        let err = Row::materialize(&row).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn(label) if label == "N"));
    }

    #[test]
    fn test_metadata_columns_are_skipped() {
        let row = ResultRow::new(vec![
            ResultColumn::new("a", Some("DECIMAL"), SqlValue::Integer(1)),
            metadata("[]"),
            metadata("[]"),
        ]);

        let out = Row::materialize(&row).unwrap();
        assert_eq!(out.into_value(), json!({"a": 1}));
    }

    #[test]
    fn test_labels_merely_containing_metadata_name_are_kept() {
        let row = ResultRow::new(vec![
            ResultColumn::new("x___metadata___", Some("DECIMAL"), SqlValue::Integer(2)),
            metadata("[]"),
        ]);

        let out = Row::materialize(&row).unwrap();
        assert_eq!(out.into_value(), json!({"x___metadata___": 2}));
    }

    #[test]
    fn test_booleans_restored_from_declared_type() {
        let row = ResultRow::new(vec![
            ResultColumn::new("vip", Some("BOOLEAN"), SqlValue::Integer(1)),
            ResultColumn::new("flag_expr", None, SqlValue::Integer(0)),
            metadata("[]"),
        ]);

        let out = Row::materialize(&row).unwrap();
        assert_eq!(out.into_value(), json!({"vip": true, "flag_expr": 0}));
    }

    #[test]
    fn test_missing_metadata_means_no_json_columns() {
        let row = ResultRow::new(vec![
            ResultColumn::new("meta", Some("TEXT"), SqlValue::Text("[1]".into())),
        ]);

        assert!(Row::json_columns(&row).is_empty());
        assert_eq!(Row::materialize(&row).unwrap().get("meta"), Some(&json!("[1]")));
    }
}
