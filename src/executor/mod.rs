pub mod row;
pub use row::*;

pub mod parse_result;
pub use parse_result::*;

pub mod query_runner;
pub use query_runner::*;
