//! replay-viewer — step through a recorded multi-robot task log.
//!
//! ```text
//! replay-viewer data/gt_case3.csv [--config viewer.toml] [--start 10]
//! ```
//!
//! Right arrow advances one row, left arrow goes back; both wrap around the
//! ends of the log.  Set `RUST_LOG=debug` to print each decoded row.

mod app;
mod config;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rr_core::ZoneLayout;
use rr_log::load_log_csv;
use rr_replay::{DisplayList, ReplaySession};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{NavKeys, ViewerApp};
use config::{Cli, ViewerConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = ViewerConfig::load(cli.config.as_deref())?;

    let layout = ZoneLayout::try_new(config.scene).context("invalid [scene] configuration")?;
    let keys = NavKeys::resolve(&config.keys).context("invalid [keys] configuration")?;
    let table = load_log_csv(&cli.log, &config.columns.into())
        .with_context(|| format!("loading task log {}", cli.log.display()))?;

    let session = match cli.start {
        Some(row) => ReplaySession::starting_at(table, layout, DisplayList::new(), row),
        None      => ReplaySession::new(table, layout, DisplayList::new()),
    };
    info!(rows = session.table().len(), "viewer ready");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Robot Task Replay")
            .with_inner_size([1280.0, 800.0])
            .with_maximized(true),
        ..Default::default()
    };
    eframe::run_native(
        "Robot Task Replay",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(session, keys)))),
    )
    .map_err(|e| anyhow!("viewer window failed: {e}"))
}
