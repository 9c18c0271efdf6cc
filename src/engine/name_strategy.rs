use serde::{Deserialize, Serialize};

/// Strategy used for generating ephemeral table identifiers.
///
/// - `Alphabetic`: random ASCII letters; uniqueness is probabilistic.
/// - `Uuid`: a `t_` prefix followed by a v4 UUID in simple form.
/// - `Sequential`: a process-wide counter, unique for the lifetime of the source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum NameStrategy {
    /// Random alphabetic names (default).
    #[default]
    Alphabetic,
    /// UUID based names.
    Uuid,
    /// Counter based names.
    Sequential,
}
