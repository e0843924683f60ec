//! Node console engine: operator API client and background fetch runtime.
mod engine;
mod fetch;
mod sort;
mod types;

pub use engine::EngineHandle;
pub use fetch::{ApiSettings, NodesApi, ReqwestNodesApi};
pub use sort::sort_by_created_at_desc;
pub use types::{
    EngineEvent, FailureKind, FetchError, NodeAttributes, NodeResource, NodesDocument,
};
