pub mod sql_dialect;
pub use sql_dialect::*;

pub mod identifier;
pub use identifier::*;

pub mod select_statement;
pub use select_statement::*;

pub mod column_extractor;
pub use column_extractor::*;
