use serde_json::Value;

/// Outcome of resolving a column path against a document.
///
/// `Missing` means no field matched; it is not the same as a field holding JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedNode<'a> {
    Missing,
    Present(&'a Value),
}

impl<'a> ResolvedNode<'a> {
    pub fn is_missing(&self) -> bool {
        matches!(self, ResolvedNode::Missing)
    }

    pub fn value(&self) -> Option<&'a Value> {
        match self {
            ResolvedNode::Missing => None,
            ResolvedNode::Present(value) => Some(value),
        }
    }
}
