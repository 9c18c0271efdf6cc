use serde_json::Value;

use crate::document::ResolvedNode;

pub struct PathResolver;

impl PathResolver {
    /// Resolve a dotted, lowercase path (`a.b.c`) against `root`.
    ///
    /// Each segment is matched against the lowercase form of the current object's
    /// keys, first match in document order wins. Descending into anything that is
    /// not an object, or a segment with no matching key, yields `Missing`.
    pub fn resolve<'a>(root: &'a Value, path: &str) -> ResolvedNode<'a> {
        let mut node = root;
        for segment in path.split('.') {
            let Value::Object(fields) = node else {
                return ResolvedNode::Missing;
            };

            match fields.iter().find(|(key, _)| key.to_lowercase() == segment) {
                Some((_, value)) => node = value,
                None => return ResolvedNode::Missing,
            }
        }

        ResolvedNode::Present(node)
    }
}
