use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::document::JsonPrimitive;

/// Column type used in the ephemeral table's DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlType {
    Text,
    Decimal,
    Boolean,
}

impl SqlType {
    pub fn of_primitive(primitive: JsonPrimitive) -> SqlType {
        match primitive {
            JsonPrimitive::Int | JsonPrimitive::Float => SqlType::Decimal,
            JsonPrimitive::Bool => SqlType::Boolean,
            JsonPrimitive::Missing
            | JsonPrimitive::Null
            | JsonPrimitive::String
            | JsonPrimitive::Object
            | JsonPrimitive::Array => SqlType::Text,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Decimal => "DECIMAL",
            SqlType::Boolean => "BOOLEAN",
        }
    }

    /// Match a declared column type reported by the engine.
    pub fn from_declared(declared: &str) -> Option<SqlType> {
        match declared.trim().to_ascii_uppercase().as_str() {
            "TEXT" => Some(SqlType::Text),
            "DECIMAL" => Some(SqlType::Decimal),
            "BOOLEAN" | "BOOL" => Some(SqlType::Boolean),
            _ => None,
        }
    }
}

impl Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}
