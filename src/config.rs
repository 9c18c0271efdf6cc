use serde::{Deserialize, Serialize};

use crate::{engine::{EngineKind, NameStrategy}, parser::SqlDialect};

pub const DEFAULT_NAME_LENGTH: usize = 10;

/// Runner configuration.
///
/// - `engine` selects the backing execution engine.
/// - `table_names` controls how ephemeral table identifiers are generated.
/// - `name_length` is the length of generated alphabetic names.
/// - `dialect` selects the SQL dialect used to parse the query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineKind,
    pub table_names: NameStrategy,
    pub name_length: usize,
    pub dialect: SqlDialect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            table_names: NameStrategy::default(),
            name_length: DEFAULT_NAME_LENGTH,
            dialect: SqlDialect::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(table_names: NameStrategy, name_length: usize) -> Self {
        Self {
            table_names,
            name_length,
            ..Self::default()
        }
    }

    /// Convenience: alphabetic table names of `name_length` characters.
    pub fn alphabetic(name_length: usize) -> Self {
        Self::from(NameStrategy::Alphabetic, name_length)
    }

    pub fn uuid() -> Self {
        Self::from(NameStrategy::Uuid, DEFAULT_NAME_LENGTH)
    }

    pub fn sequential() -> Self {
        Self::from(NameStrategy::Sequential, DEFAULT_NAME_LENGTH)
    }

    pub fn with_dialect(mut self, dialect: SqlDialect) -> Self {
        self.dialect = dialect;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.engine, EngineKind::Memory);
        assert_eq!(config.table_names, NameStrategy::Alphabetic);
        assert_eq!(config.name_length, DEFAULT_NAME_LENGTH);
        assert_eq!(config.dialect, SqlDialect::Sqlite);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_value(json!({
            "table_names": "Sequential",
            "dialect": "Generic"
        })).unwrap();

        assert_eq!(config.table_names, NameStrategy::Sequential);
        assert_eq!(config.dialect, SqlDialect::Generic);
        assert_eq!(config.name_length, DEFAULT_NAME_LENGTH);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Config::alphabetic(16).name_length, 16);
        assert_eq!(Config::uuid().table_names, NameStrategy::Uuid);
        assert_eq!(Config::sequential().table_names, NameStrategy::Sequential);
    }
}
