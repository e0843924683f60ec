use crate::{AppState, Effect, Msg, PAGE_TITLE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if !state.mark_started() {
                return (state, Vec::new());
            }
            vec![
                Effect::SetWindowTitle {
                    title: PAGE_TITLE.to_string(),
                },
                Effect::FetchNodes,
            ]
        }
        Msg::SearchChanged(raw) => {
            state.set_search(raw);
            Vec::new()
        }
        Msg::NodesLoaded(nodes) => {
            state.apply_loaded(nodes);
            Vec::new()
        }
        Msg::FetchFailed(message) => {
            state.apply_failed(message);
            Vec::new()
        }
        Msg::QuitRequested => {
            if state.is_closed() {
                return (state, Vec::new());
            }
            state.close();
            vec![Effect::Shutdown]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
