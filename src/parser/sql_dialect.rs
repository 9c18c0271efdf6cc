use serde::{Deserialize, Serialize};
use sqlparser::dialect::{Dialect, GenericDialect, SQLiteDialect};

/// SQL dialect used to parse the query text.
///
/// `Sqlite` (default) accepts backtick, bracket and double-quote delimited identifiers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlDialect {
    #[default]
    Sqlite,
    Generic,
}

impl SqlDialect {
    pub fn dialect(&self) -> Box<dyn Dialect> {
        match self {
            SqlDialect::Sqlite => Box::new(SQLiteDialect {}),
            SqlDialect::Generic => Box::new(GenericDialect {}),
        }
    }
}
