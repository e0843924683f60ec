//! Node console core: pure state machine and view-model helpers.
mod effect;
mod filter;
mod msg;
mod node;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::node_filter;
pub use msg::Msg;
pub use node::NodeResource;
pub use state::{AppState, FetchState};
pub use update::update;
pub use view_model::{AppViewModel, NodeRowView, PAGE_TITLE};
