use crate::NodeResource;

/// Builds the search predicate for one search term.
///
/// An empty term accepts every node. Otherwise the predicate does a
/// case-insensitive substring match of the term against the node id, name,
/// and EVM chain id, accepting the node when any of the three contains it.
/// Lower-casing is the Unicode default, not locale-aware collation.
///
/// Callers are expected to trim the term first; the predicate itself treats
/// the term verbatim.
pub fn node_filter(search: &str) -> impl Fn(&NodeResource) -> bool {
    let term = search.to_lowercase();

    move |node| {
        if term.is_empty() {
            return true;
        }

        matches_simple(node, &term)
    }
}

// Simple match on the id, name, and EVM chain id.
fn matches_simple(node: &NodeResource, lowercase_term: &str) -> bool {
    let dataset = [
        node.id.as_str(),
        node.name.as_str(),
        node.evm_chain_id.as_str(),
    ];

    dataset
        .iter()
        .any(|field| field.to_lowercase().contains(lowercase_term))
}
