pub mod json_primitive;
pub use json_primitive::*;

pub mod resolved_node;
pub use resolved_node::*;

pub mod path_resolver;
pub use path_resolver::*;
