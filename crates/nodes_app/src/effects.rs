use std::io::Write;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use console_logging::{console_info, console_warn};
use nodes_core::{Effect, Msg};
use nodes_engine::{ApiSettings, EngineEvent, EngineHandle};

/// Display format for node creation timestamps.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchNodes => {
                    console_info!("FetchNodes dispatched");
                    self.engine.fetch_nodes();
                }
                Effect::SetWindowTitle { title } => {
                    set_terminal_title(&title);
                }
                Effect::Shutdown => {
                    console_info!("Shutdown requested; cancelling engine");
                    self.engine.shutdown();
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let EngineEvent::FetchCompleted { result } = event;
                let msg = match result {
                    Ok(nodes) => Msg::NodesLoaded(nodes.iter().map(to_display_node).collect()),
                    Err(err) => {
                        console_warn!("Node fetch failed: {}", err);
                        Msg::FetchFailed(err.to_string())
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn to_display_node(resource: &nodes_engine::NodeResource) -> nodes_core::NodeResource {
    nodes_core::NodeResource {
        id: resource.id.clone(),
        name: resource.attributes.name.clone(),
        evm_chain_id: resource.attributes.evm_chain_id.clone(),
        created_at: format_created_at(resource.attributes.created_at),
    }
}

fn format_created_at(at: DateTime<Utc>) -> String {
    at.format(CREATED_AT_FORMAT).to_string()
}

// OSC 0 sets the terminal window title (and icon name).
fn set_terminal_title(title: &str) {
    print!("\x1b]0;{title}\x07");
    let _ = std::io::stdout().flush();
}
