use rusqlite::{params_from_iter, types::ValueRef, Connection};
use tracing::debug;

use crate::{
    engine::{insert_sql, Engine, EngineKind, ResultColumn, ResultRow, Session, SqlValue},
    schema::BindValue,
    Result,
};

/// SQLite backed engine; every connection is a private in-memory database.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SqliteEngine {
    pub kind: EngineKind,
}

impl SqliteEngine {
    pub fn new(kind: EngineKind) -> Self {
        Self { kind }
    }
}

impl Engine for SqliteEngine {
    fn connect(&self) -> Result<Box<dyn Session>> {
        let conn = match self.kind {
            EngineKind::Memory => Connection::open_in_memory()?,
        };
        Ok(Box::new(SqliteSession { conn }))
    }
}

pub struct SqliteSession {
    conn: Connection,
}

impl SqliteSession {
    fn bind(value: &BindValue) -> rusqlite::types::Value {
        match value {
            BindValue::Null => rusqlite::types::Value::Null,
            BindValue::Text(text) => rusqlite::types::Value::Text(text.clone()),
            BindValue::Number(n) => rusqlite::types::Value::Real(*n),
            BindValue::Bool(b) => rusqlite::types::Value::Integer(i64::from(*b)),
        }
    }

    fn value_from_ref(value: ValueRef<'_>) -> SqlValue {
        match value {
            ValueRef::Null => SqlValue::Null,
            ValueRef::Integer(i) => SqlValue::Integer(i),
            ValueRef::Real(f) => SqlValue::Real(f),
            ValueRef::Text(text) => SqlValue::Text(String::from_utf8_lossy(text).into_owned()),
            ValueRef::Blob(bytes) => SqlValue::Blob(bytes.to_vec()),
        }
    }
}

impl Session for SqliteSession {
    fn execute(&mut self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    fn insert(&mut self, table: &str, values: &[BindValue]) -> Result<()> {
        let sql = insert_sql(table, values.len());
        let inserted = self.conn.execute(&sql, params_from_iter(values.iter().map(Self::bind)))?;
        debug!(table, inserted, "inserted row");
        Ok(())
    }

    fn query_first(&mut self, sql: &str) -> Result<Option<ResultRow>> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<(String, Option<String>)> = stmt
            .columns()
            .iter()
            .map(|c| (c.name().to_string(), c.decl_type().map(str::to_string)))
            .collect();

        let mut rows = stmt.query([])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let mut out = Vec::with_capacity(columns.len());
        for (idx, (label, declared)) in columns.into_iter().enumerate() {
            let value = Self::value_from_ref(row.get_ref(idx)?);
            out.push(ResultColumn { label, declared_type: declared, value });
        }

        Ok(Some(ResultRow::new(out)))
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Box<dyn Session> {
        SqliteEngine::default().connect().unwrap()
    }

    #[test]
    fn test_create_insert_query() {
        let mut session = session();
        session.execute("CREATE TABLE t (\"name\" TEXT, \"age\" DECIMAL, \"vip\" BOOLEAN)").unwrap();
        session
            .insert("t", &[BindValue::Text("Ana".into()), BindValue::Number(30.0), BindValue::Bool(true)])
            .unwrap();

        let row = session.query_first("SELECT \"name\" AS n, \"age\", \"vip\" FROM t").unwrap().unwrap();
        assert_eq!(row.labels().collect::<Vec<_>>(), vec!["n", "age", "vip"]);
        assert_eq!(row.columns[0].value, SqlValue::Text("Ana".into()));
        // NUMERIC affinity stores integral reals as integers
        assert_eq!(row.columns[1].value, SqlValue::Integer(30));
        assert_eq!(row.columns[2].value, SqlValue::Integer(1));
        assert_eq!(row.columns[2].declared_type.as_deref(), Some("BOOLEAN"));

        session.drop_table("t").unwrap();
        session.close().unwrap();
    }

    #[test]
    fn test_query_without_rows() {
        let mut session = session();
        session.execute("CREATE TABLE t (\"a\" DECIMAL)").unwrap();
        session.insert("t", &[BindValue::Number(5.0)]).unwrap();

        assert!(session.query_first("SELECT \"a\" FROM t WHERE \"a\" > 10").unwrap().is_none());
    }

    #[test]
    fn test_engine_errors_propagate() {
        let mut session = session();
        let err = session.execute("CREATE TABLE t (\"a\" TEXT, \"A\" TEXT)").unwrap_err();
        assert!(matches!(err, crate::Error::Engine(_)));
        assert!(session.drop_table("missing").is_err());
    }
}
