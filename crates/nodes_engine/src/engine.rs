use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tokio_util::sync::CancellationToken;

use crate::fetch::{ApiSettings, NodesApi, ReqwestNodesApi};
use crate::EngineEvent;

enum EngineCommand {
    FetchNodes,
}

/// Handle to the background fetch runtime.
///
/// Commands go in over one channel, events come back over another. The event
/// receiver is shared so clones of the handle can poll from any thread.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let api = Arc::new(ReqwestNodesApi::new(settings));
        let task_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                let cancel = task_cancel.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx, cancel).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            cancel,
        }
    }

    /// Requests the collection fetch.
    pub fn fetch_nodes(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchNodes);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Cancels in-flight work. No events are delivered afterwards.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    api: &dyn NodesApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    cancel: CancellationToken,
) {
    match command {
        EngineCommand::FetchNodes => {
            log::debug!("fetching node collection");
            let result = api.get_nodes(&cancel).await;
            // A torn-down consumer must not observe a late settlement.
            if cancel.is_cancelled() {
                return;
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { result });
        }
    }
}
