use crate::{engine::SqlValue, schema::SqlType};

#[derive(Debug, Clone, PartialEq)]
pub struct ResultColumn {
    /// Output label (alias if present, otherwise the column name)
    pub label: String,
    /// Declared type of the originating table column, if any
    pub declared_type: Option<String>,
    pub value: SqlValue,
}

impl ResultColumn {
    pub fn new(label: impl Into<String>, declared_type: Option<&str>, value: SqlValue) -> Self {
        Self {
            label: label.into(),
            declared_type: declared_type.map(str::to_string),
            value,
        }
    }

    pub fn sql_type(&self) -> Option<SqlType> {
        self.declared_type.as_deref().and_then(SqlType::from_declared)
    }
}

/// One row of a query result, columns in projection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    pub columns: Vec<ResultColumn>,
}

impl ResultRow {
    pub fn new(columns: Vec<ResultColumn>) -> Self {
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&ResultColumn> {
        self.columns.iter().find(|c| c.label == label)
    }
}
