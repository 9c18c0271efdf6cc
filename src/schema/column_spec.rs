use crate::{
    document::{JsonPrimitive, ResolvedNode},
    schema::{BindValue, SqlType},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub sql_type: SqlType,
    pub is_json: bool,
    pub value: BindValue,
}

impl ColumnSpec {
    pub fn infer_column_spec(name: &str, node: ResolvedNode<'_>) -> ColumnSpec {
        let primitive = JsonPrimitive::of_node(&node);
        ColumnSpec {
            name: name.to_string(),
            sql_type: SqlType::of_primitive(primitive),
            is_json: primitive.is_structured(),
            value: node.value().map_or(BindValue::Null, BindValue::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_is_nullable_text() {
        let spec = ColumnSpec::infer_column_spec("gone", ResolvedNode::Missing);
        assert_eq!(spec.sql_type, SqlType::Text);
        assert_eq!(spec.value, BindValue::Null);
        assert!(!spec.is_json);
    }

    #[test]
    fn test_object_is_json_text() {
        let meta = json!({"k": 1});
        let spec = ColumnSpec::infer_column_spec("Meta", ResolvedNode::Present(&meta));
        assert_eq!(spec.sql_type, SqlType::Text);
        assert!(spec.is_json);
        assert_eq!(spec.value, BindValue::Text(r#"{"k":1}"#.into()));
        assert_eq!(spec.name, "Meta");
    }

    #[test]
    fn test_bool_and_number() {
        let flag = json!(true);
        let spec = ColumnSpec::infer_column_spec("flag", ResolvedNode::Present(&flag));
        assert_eq!(spec.sql_type, SqlType::Boolean);
        assert_eq!(spec.value, BindValue::Bool(true));

        let price = json!(10.5);
        let spec = ColumnSpec::infer_column_spec("price", ResolvedNode::Present(&price));
        assert_eq!(spec.sql_type, SqlType::Decimal);
        assert_eq!(spec.value, BindValue::Number(10.5));
    }
}
