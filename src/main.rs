mod error;
mod store;
mod task;
mod task_list;
mod ui;

use std::io;
use store::TaskStore;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let store = TaskStore::default();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    ui::run_app(&store, ui::Palette::detect(), &mut input, &mut output)?;
    Ok(())
}
