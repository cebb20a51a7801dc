use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod media;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::{commands::BackendCommand, runtime},
    config::CliOverrides,
    controller::events::UiEvent,
    ui::DesktopGuiApp,
};

#[derive(Debug, Parser)]
#[command(name = "timetravel", about = "TimeTravel Agency desktop client")]
struct Args {
    /// Settings file; defaults to `timetravel.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long)]
    assets_dir: Option<PathBuf>,
    /// Used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut settings = config::load_settings(args.config.as_deref())?;
    settings.apply_cli(CliOverrides {
        model: args.model,
        endpoint: args.endpoint,
        assets_dir: args.assets_dir,
    });
    tracing::info!(
        model = %settings.gemini_model,
        assets_dir = %settings.assets_dir.display(),
        assistant_enabled = settings.gemini_api_key.is_some(),
        "starting desktop client"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TimeTravel Agency")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TimeTravel Agency",
        options,
        Box::new(|_cc| Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("desktop client exited with error: {err}"))
}
