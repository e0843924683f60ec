use crate::NodeResource;

/// Title applied to the terminal window when the view starts.
pub const PAGE_TITLE: &str = "Nodes";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Raw search input, echoed back in the prompt line.
    pub search: String,
    /// True while the fetch has neither delivered data nor failed.
    pub loading: bool,
    pub error: Option<String>,
    /// Filtered rows in the order established by the fetch.
    pub rows: Vec<NodeRowView>,
    /// Size of the unfiltered collection.
    pub total: usize,
    pub closing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRowView {
    pub id: String,
    pub name: String,
    pub evm_chain_id: String,
    pub created_at: String,
}

impl From<&NodeResource> for NodeRowView {
    fn from(node: &NodeResource) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            evm_chain_id: node.evm_chain_id.clone(),
            created_at: node.created_at.clone(),
        }
    }
}
