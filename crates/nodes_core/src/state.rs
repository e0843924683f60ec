use crate::view_model::{AppViewModel, NodeRowView};
use crate::{node_filter, NodeResource};

/// Fetch half of the view state.
///
/// `Loading` is the initial state. The transition to `Loaded` or `Failed`
/// happens at most once; the two terminal states are mutually exclusive by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Vec<NodeResource>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search: String,
    fetch: FetchState,
    started: bool,
    closed: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the render input from current state.
    ///
    /// The filtered row list is recomputed from the collection and the
    /// trimmed search term on every call; nothing derived is cached in state.
    pub fn view(&self) -> AppViewModel {
        let filter = node_filter(self.search.trim());

        match &self.fetch {
            FetchState::Loading => AppViewModel {
                search: self.search.clone(),
                loading: true,
                error: None,
                rows: Vec::new(),
                total: 0,
                closing: self.closed,
            },
            FetchState::Failed(message) => AppViewModel {
                search: self.search.clone(),
                loading: false,
                error: Some(message.clone()),
                rows: Vec::new(),
                total: 0,
                closing: self.closed,
            },
            FetchState::Loaded(nodes) => AppViewModel {
                search: self.search.clone(),
                loading: false,
                error: None,
                rows: nodes
                    .iter()
                    .filter(|node| filter(node))
                    .map(NodeRowView::from)
                    .collect(),
                total: nodes.len(),
                closing: self.closed,
            },
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Marks the view as started. Returns false when it already was, so the
    /// caller can keep the initial fetch and title effects run-once.
    pub(crate) fn mark_started(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_search(&mut self, raw: String) {
        if self.search != raw {
            self.search = raw;
            self.mark_dirty();
        }
    }

    /// Stores the fetched collection. A settled fetch never settles again;
    /// late deliveries are dropped.
    pub(crate) fn apply_loaded(&mut self, nodes: Vec<NodeResource>) {
        if matches!(self.fetch, FetchState::Loading) {
            self.fetch = FetchState::Loaded(nodes);
            self.mark_dirty();
        }
    }

    /// Stores the fetch failure, under the same settle-once rule.
    pub(crate) fn apply_failed(&mut self, message: String) {
        if matches!(self.fetch, FetchState::Loading) {
            self.fetch = FetchState::Failed(message);
            self.mark_dirty();
        }
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
        self.mark_dirty();
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
