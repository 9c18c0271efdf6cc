use crate::{engine::ResultRow, parser::Identifier, schema::BindValue, Result};

/// Factory for connections to an execution engine.
pub trait Engine: Send + Sync {
    fn connect(&self) -> Result<Box<dyn Session>>;
}

/// A live connection able to host the ephemeral table.
pub trait Session {
    /// Run DDL or DML text.
    fn execute(&mut self, sql: &str) -> Result<()>;

    /// Insert one row into `table`, binding `values` positionally.
    fn insert(&mut self, table: &str, values: &[BindValue]) -> Result<()>;

    /// Run a query and return its first row, if any.
    fn query_first(&mut self, sql: &str) -> Result<Option<ResultRow>>;

    fn drop_table(&mut self, table: &str) -> Result<()> {
        self.execute(&format!("DROP TABLE {}", Identifier::quote(table)))
    }

    fn close(self: Box<Self>) -> Result<()>;
}

pub fn insert_sql(table: &str, arity: usize) -> String {
    format!("INSERT INTO {} VALUES({})", Identifier::quote(table), vec!["?"; arity].join(", "))
}
