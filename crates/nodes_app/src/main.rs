mod app;
mod config;
mod effects;
mod logging;
mod ui;

fn main() -> anyhow::Result<()> {
    app::run_app()
}
