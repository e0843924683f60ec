use crate::NodeResource;

/// Orders the collection most-recently-created first.
///
/// `a` is ordered before `b` exactly when `a.created_at > b.created_at`. The
/// relative order of nodes with equal timestamps is unspecified; callers must
/// not rely on it.
pub fn sort_by_created_at_desc(nodes: &mut [NodeResource]) {
    nodes.sort_by(|a, b| b.attributes.created_at.cmp(&a.attributes.created_at));
}
