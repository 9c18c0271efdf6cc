use std::{fs, path::Path};

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    engine::{validate_table_name, Engine, ResultRow, Session, SqliteEngine, TableNameSource, TableNames},
    executor::{ParseResult, Row},
    parser::{ColumnExtractor, Identifier, SelectStatement},
    schema::{BindValue, TableSchema, METADATA_COLUMN},
    Config, Error, Result,
};

/// Everything needed to host the document and run the rewritten query.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    pub table: String,
    pub ddl: String,
    /// Data columns in DDL order, then the metadata value
    pub values: Vec<BindValue>,
    pub query: String,
}

/// Runs a select-list and optional where-clause against a single JSON document.
///
/// Each call materializes the document as one row of a freshly named table on
/// its own engine connection, queries it, and tears the table down again. A
/// runner holds no per-call state and can be shared between threads.
pub struct QueryRunner {
    config: Config,
    names: Box<dyn TableNameSource>,
    engine: Box<dyn Engine>,
}

impl Default for QueryRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryRunner {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            names: Box::new(TableNames::new(config.table_names, config.name_length)),
            engine: Box::new(SqliteEngine::new(config.engine)),
            config,
        }
    }

    pub fn with_name_source(mut self, names: impl TableNameSource + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    pub fn with_engine(mut self, engine: impl Engine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Query the document in `json_text`. Never fails: every error is reported
    /// through the returned `ParseResult`.
    pub fn parse(&self, json_text: &str, select: &str, where_clause: Option<&str>) -> ParseResult {
        match serde_json::from_str::<Value>(json_text) {
            Ok(root) => self.parse_value(&root, select, where_clause),
            Err(err) => ParseResult::fail(Error::from(err)),
        }
    }

    pub fn parse_value(&self, root: &Value, select: &str, where_clause: Option<&str>) -> ParseResult {
        let result = self.query(root, select, where_clause);
        if let Err(err) = &result {
            debug!(error = %err, "query failed");
        }
        result.into()
    }

    /// Read the document from `path` and query it.
    pub fn parse_file(&self, path: impl AsRef<Path>, select: &str, where_clause: Option<&str>) -> ParseResult {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => self.parse(&text, select, where_clause),
            Err(source) => ParseResult::fail(Error::Io { path: path.to_path_buf(), source }),
        }
    }

    /// Build the DDL, row values and rewritten query for `root` without
    /// touching the engine.
    pub fn prepare(&self, root: &Value, select: &str, where_clause: Option<&str>) -> Result<PreparedQuery> {
        // 1) Name the table
        let table = self.names.next_name();
        validate_table_name(&table)?;

        // 2) Parse
        let sql = SelectStatement::compose(select, &Identifier::quote(&table), where_clause);
        let mut statement = SelectStatement::parse(&sql, self.config.dialect)?;

        // 3) Extract references, then the rest of the document
        let aliases = ColumnExtractor::scan_aliases(&statement.select()?.projection);
        let mut schema = TableSchema::default();
        ColumnExtractor::new(root, &aliases, &mut schema).extract_statement(&mut statement)?;
        schema.infer_remaining(root, &aliases);

        // 4) Carry the JSON column set through the projection
        statement.push_column(METADATA_COLUMN)?;

        Ok(PreparedQuery {
            ddl: schema.create_table_sql(&table),
            values: schema.row_values()?,
            query: statement.to_string(),
            table,
        })
    }

    pub fn query(&self, root: &Value, select: &str, where_clause: Option<&str>) -> Result<Row> {
        let prepared = self.prepare(root, select, where_clause)?;
        debug!(table = %prepared.table, ddl = %prepared.ddl, query = %prepared.query, "prepared ephemeral table");

        let row = self.with_table(&prepared.table, &prepared.ddl, |session| {
            session.insert(&prepared.table, &prepared.values)?;
            session.query_first(&prepared.query)
        })?;

        match row {
            Some(row) => Row::materialize(&row),
            None => Ok(Row::default()),
        }
    }

    /// Create `table` on a fresh connection, run `f`, then drop the table and
    /// close the connection whatever `f` returned. Cleanup failures are logged
    /// and never replace the outcome of `f`.
    fn with_table<F>(&self, table: &str, ddl: &str, f: F) -> Result<Option<ResultRow>>
    where
        F: FnOnce(&mut dyn Session) -> Result<Option<ResultRow>>,
    {
        let mut session = self.engine.connect()?;

        let outcome = match session.execute(ddl) {
            Ok(()) => {
                let outcome = f(session.as_mut());
                if let Err(err) = session.drop_table(table) {
                    warn!(%table, error = %err, "failed to drop ephemeral table");
                }
                outcome
            }
            Err(err) => Err(err),
        };

        if let Err(err) = session.close() {
            warn!(%table, error = %err, "failed to close engine connection");
        }

        outcome
    }
}
