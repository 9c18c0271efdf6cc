//! Query a single JSON document with a SQL select-list and where-clause.
//!
//! The document is loaded as one row of an ephemeral SQLite table whose
//! schema is inferred from the document and from the columns the query
//! references. Objects and arrays travel through the engine as JSON text and
//! are decoded again in the result.
//!
//! ```no_run
//! let result = sqlson::parse(r#"{"Name": "x", "meta": {"k": 1}}"#, "name AS n, meta", None);
//! assert!(result.success);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::*;

pub mod document;
pub use document::{JsonPrimitive, PathResolver, ResolvedNode};

pub mod schema;
pub use schema::{ColumnSpec, SqlType, TableSchema};

pub mod parser;

pub mod engine;
pub use engine::{Engine, NameStrategy, Session, SqliteEngine, TableNameSource};

pub mod executor;
pub use executor::{ParseResult, PreparedQuery, QueryRunner, Row};

/// Query `json_text` with a default [`QueryRunner`].
pub fn parse(json_text: &str, select: &str, where_clause: Option<&str>) -> ParseResult {
    QueryRunner::new().parse(json_text, select, where_clause)
}
