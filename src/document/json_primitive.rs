use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::ResolvedNode;

/// Shape of whatever a column path resolved to. `Missing` and `Null` stay
/// distinct here even though both end up as a NULL TEXT column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPrimitive {
    Missing,
    Null,
    Bool,
    Int,
    Float,
    String,
    Object,
    Array,
}

impl JsonPrimitive {
    pub fn of_value(value: &Value) -> JsonPrimitive {
        match value {
            Value::Null => JsonPrimitive::Null,
            Value::Bool(_) => JsonPrimitive::Bool,
            Value::Number(n) if n.is_f64() => JsonPrimitive::Float,
            Value::Number(_) => JsonPrimitive::Int,
            Value::String(_) => JsonPrimitive::String,
            Value::Array(_) => JsonPrimitive::Array,
            Value::Object(_) => JsonPrimitive::Object,
        }
    }

    pub fn of_node(node: &ResolvedNode<'_>) -> JsonPrimitive {
        match node {
            ResolvedNode::Missing => JsonPrimitive::Missing,
            ResolvedNode::Present(value) => Self::of_value(value),
        }
    }

    /// Objects and arrays are stored as serialized JSON text.
    pub fn is_structured(self) -> bool {
        matches!(self, JsonPrimitive::Object | JsonPrimitive::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_of_value() {
        assert_eq!(JsonPrimitive::of_value(&json!(null)), JsonPrimitive::Null);
        assert_eq!(JsonPrimitive::of_value(&json!(true)), JsonPrimitive::Bool);
        assert_eq!(JsonPrimitive::of_value(&json!(3)), JsonPrimitive::Int);
        assert_eq!(JsonPrimitive::of_value(&json!(3.5)), JsonPrimitive::Float);
        assert_eq!(JsonPrimitive::of_value(&json!("x")), JsonPrimitive::String);
        assert_eq!(JsonPrimitive::of_value(&json!([1])), JsonPrimitive::Array);
        assert_eq!(JsonPrimitive::of_value(&json!({"a": 1})), JsonPrimitive::Object);
    }

    #[test]
    fn test_missing_is_distinct_from_null() {
        let null = json!(null);
        assert_eq!(JsonPrimitive::of_node(&ResolvedNode::Missing), JsonPrimitive::Missing);
        assert_eq!(JsonPrimitive::of_node(&ResolvedNode::Present(&null)), JsonPrimitive::Null);
    }

    #[test]
    fn test_structured() {
        assert!(JsonPrimitive::Object.is_structured());
        assert!(JsonPrimitive::Array.is_structured());
        assert!(!JsonPrimitive::String.is_structured());
        assert!(!JsonPrimitive::Int.is_structured());
    }
}
