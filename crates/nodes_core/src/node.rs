/// One node resource as the console displays it.
///
/// This is the display projection of an operator API resource. The collection
/// arrives from the engine already sorted most-recently-created first; the
/// core preserves that order and never mutates a resource in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeResource {
    pub id: String,
    pub name: String,
    pub evm_chain_id: String,
    /// Creation timestamp, pre-formatted for display.
    pub created_at: String,
}
