pub mod sql_type;
pub use sql_type::*;

pub mod bind_value;
pub use bind_value::*;

pub mod column_spec;
pub use column_spec::*;

pub mod alias_index;
pub use alias_index::*;

pub mod table_schema;
pub use table_schema::*;

/// Trailing pseudo-column carrying the JSON-typed column set through the engine.
pub const METADATA_COLUMN: &str = "___metadata___";
