use serde_json::{Number, Value};

use crate::schema::SqlType;

/// Natively typed value read back from the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Convert to JSON, restoring booleans for columns declared `BOOLEAN`.
    pub fn to_json(&self, declared: Option<SqlType>) -> Value {
        let boolean = declared == Some(SqlType::Boolean);
        match self {
            SqlValue::Null => Value::Null,
            SqlValue::Integer(i) if boolean => Value::Bool(*i != 0),
            SqlValue::Integer(i) => Value::Number((*i).into()),
            SqlValue::Real(f) if boolean => Value::Bool(*f != 0.0),
            SqlValue::Real(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            SqlValue::Text(text) => Value::String(text.clone()),
            SqlValue::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json() {
        assert_eq!(SqlValue::Null.to_json(None), json!(null));
        assert_eq!(SqlValue::Integer(5).to_json(Some(SqlType::Decimal)), json!(5));
        assert_eq!(SqlValue::Real(2.5).to_json(None), json!(2.5));
        assert_eq!(SqlValue::Real(f64::NAN).to_json(None), json!(null));
        assert_eq!(SqlValue::Text("x".into()).to_json(Some(SqlType::Text)), json!("x"));
        assert_eq!(SqlValue::Blob(vec![1, 2]).to_json(None), json!([1, 2]));
    }

    #[test]
    fn test_boolean_restoration() {
        assert_eq!(SqlValue::Integer(1).to_json(Some(SqlType::Boolean)), json!(true));
        assert_eq!(SqlValue::Integer(0).to_json(Some(SqlType::Boolean)), json!(false));
        assert_eq!(SqlValue::Null.to_json(Some(SqlType::Boolean)), json!(null));
        assert_eq!(SqlValue::Integer(1).to_json(None), json!(1));
    }
}
