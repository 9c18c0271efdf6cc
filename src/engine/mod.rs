pub mod engine_kind;
pub use engine_kind::*;

pub mod name_strategy;
pub use name_strategy::*;

pub mod table_names;
pub use table_names::*;

pub mod sql_value;
pub use sql_value::*;

pub mod result_row;
pub use result_row::*;

pub mod session;
pub use session::*;

pub mod sqlite_engine;
pub use sqlite_engine::*;
