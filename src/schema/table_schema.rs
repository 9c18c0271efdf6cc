use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use tracing::trace;

use crate::{
    document::ResolvedNode,
    parser::Identifier,
    schema::{AliasIndex, BindValue, ColumnSpec, SqlType, METADATA_COLUMN},
    Result,
};

/// Inferred schema of the single-row ephemeral table.
///
/// `columns` is keyed by lowercase column name, so the first casing seen is the
/// one used in DDL. Column order here is DDL order and bind-value order.
/// `json_columns` holds the lowercase output labels (column names and their
/// aliases) whose values must be decoded back from JSON text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSchema {
    pub columns: IndexMap<String, ColumnSpec>,
    pub json_columns: IndexSet<String>,
}

impl TableSchema {
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(&name.to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Register `name` with the value it resolved to. Returns `false` when a
    /// column with the same lowercase name is already present, or when `name`
    /// is the reserved metadata column.
    pub fn classify(&mut self, name: &str, node: ResolvedNode<'_>, aliases: &AliasIndex) -> bool {
        if name.eq_ignore_ascii_case(METADATA_COLUMN) {
            trace!(column = %name, "skipped reserved column name");
            return false;
        }

        let lower = name.to_lowercase();
        if self.columns.contains_key(&lower) {
            return false;
        }

        let spec = ColumnSpec::infer_column_spec(name, node);
        trace!(column = %spec.name, sql_type = %spec.sql_type, json = spec.is_json, "classified column");

        if spec.is_json {
            self.json_columns.insert(lower.clone());
            self.json_columns.extend(aliases.aliases_of(&lower).cloned());
        }
        self.columns.insert(lower, spec);
        true
    }

    /// Classify every top-level field of `root` that no query reference captured,
    /// in document order.
    pub fn infer_remaining(&mut self, root: &Value, aliases: &AliasIndex) {
        let Value::Object(fields) = root else {
            return;
        };

        for (key, value) in fields {
            let name = Identifier::strip_decoration(key);
            self.classify(name, ResolvedNode::Present(value), aliases);
        }
    }

    pub fn bind_values(&self) -> Vec<BindValue> {
        self.columns.values().map(|spec| spec.value.clone()).collect()
    }

    /// Serialized JSON-column set stored in the metadata column.
    pub fn metadata_value(&self) -> Result<String> {
        let labels: Vec<&str> = self.json_columns.iter().map(String::as_str).collect();
        Ok(serde_json::to_string(&labels)?)
    }

    pub fn create_table_sql(&self, table: &str) -> String {
        let mut sql = format!("CREATE TABLE {} (\n", Identifier::quote(table));
        for spec in self.columns.values() {
            sql.push_str(&format!("{} {},\n", Identifier::quote(&spec.name), spec.sql_type));
        }
        sql.push_str(&format!("{} {}\n);", Identifier::quote(METADATA_COLUMN), SqlType::Text));
        sql
    }

    /// Bind values for the single row: data columns in DDL order, then metadata.
    pub fn row_values(&self) -> Result<Vec<BindValue>> {
        let mut values = self.bind_values();
        values.push(BindValue::Text(self.metadata_value()?));
        Ok(values)
    }
}
