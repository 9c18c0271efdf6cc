use serde_json::Value;

/// Value bound to a column placeholder when the single row is inserted.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&Value> for BindValue {
    /// Objects and arrays bind as their serialized JSON text.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => BindValue::Null,
            Value::Bool(b) => BindValue::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(BindValue::Null, BindValue::Number),
            Value::String(s) => BindValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => BindValue::Text(value.to_string()),
        }
    }
}
