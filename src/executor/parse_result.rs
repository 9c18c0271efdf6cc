use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{executor::Row, Result};

/// Outcome of querying a document.
///
/// `message` is set only on failure and `data` only on success; both are
/// omitted from the serialized form when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl ParseResult {
    pub fn ok(data: Map<String, Value>) -> Self {
        Self { success: true, message: None, data: Some(data) }
    }

    pub fn fail(message: impl Display) -> Self {
        Self { success: false, message: Some(message.to_string()), data: None }
    }
}

impl From<Result<Row>> for ParseResult {
    fn from(value: Result<Row>) -> Self {
        match value {
            Ok(row) => Self::ok(row.into_map()),
            Err(err) => Self::fail(err),
        }
    }
}
