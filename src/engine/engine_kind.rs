use serde::{Deserialize, Serialize};

/// Execution engine hosting the ephemeral table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum EngineKind {
    /// Private in-memory SQLite database per connection.
    #[default]
    Memory,
}
