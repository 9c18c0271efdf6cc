use std::path::PathBuf;

use sqlparser::parser::ParserError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input document (or the stored metadata) is not valid JSON.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQL parse error: {0}")]
    Sql(#[from] ParserError),

    #[error("unsupported statement: {0}")]
    UnsupportedStatement(String),

    #[error("invalid table name '{0}'")]
    InvalidTableName(String),

    #[error("engine error: {0}")]
    Engine(#[from] rusqlite::Error),

    /// Two output columns share the same label, compared case-insensitively.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_column_message() {
        let err = Error::DuplicateColumn("n".into());
        assert_eq!(err.to_string(), "duplicate column name: n");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON document"));
    }
}
