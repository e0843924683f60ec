use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use console_logging::console_info;
use nodes_core::{update, AppState, Msg};

use crate::config;
use crate::effects::EffectRunner;
use crate::logging::{self, LogDestination};
use crate::ui;

const QUIT_COMMAND: &str = ":q";

/// Runs the console until the user quits or stdin closes.
///
/// One loop owns the state; `update` is the only mutator. Stdin lines and
/// engine completions both arrive as messages on a single channel, so the
/// update path stays synchronous and race-free.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let config = config::load();
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(config.api_settings(), msg_tx.clone());

    spawn_input_reader(msg_tx);

    let mut state = AppState::new();

    // Instantiation: sets the title and requests the single fetch.
    let (next, effects) = update(state, Msg::Started);
    state = next;
    runner.run(effects);
    render_if_dirty(&mut state)?;

    while let Ok(msg) = msg_rx.recv() {
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);
        render_if_dirty(&mut state)?;

        if state.is_closed() {
            break;
        }
    }

    console_info!("Console closed");
    Ok(())
}

/// Forwards stdin lines as search input. Each submitted line replaces the
/// whole search term; `:q` or end of input closes the console.
fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let msg = if line.trim() == QUIT_COMMAND {
                Msg::QuitRequested
            } else {
                Msg::SearchChanged(line)
            };
            if msg_tx.send(msg).is_err() {
                return;
            }
        }
        let _ = msg_tx.send(Msg::QuitRequested);
    });
}

fn render_if_dirty(state: &mut AppState) -> io::Result<()> {
    if state.consume_dirty() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(ui::render::render(&state.view()).as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}
