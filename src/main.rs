//! FitTrack - Offline Workout Tracker
//!
//! Main entry point for the application.

use anyhow::Context;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fittrack::i18n;
use fittrack::session::FitnessSession;
use fittrack::storage::config::{get_data_dir, load_config, MIN_WINDOW_SIZE};
use fittrack::storage::database::Database;

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fittrack=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Default::default()
    });

    let db_path = config.database_path();
    let db = Database::open(&db_path)
        .with_context(|| format!("opening database at {}", db_path.display()))?;
    i18n::init(&get_data_dir());
    let session = FitnessSession::load(db, &config).context("loading session")?;

    let zoom_factor = config.ui.zoom_factor();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.ui.window_size())
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title("FitTrack"),
        ..Default::default()
    };

    eframe::run_native(
        "FitTrack",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_zoom_factor(zoom_factor);
            Ok(Box::new(app::FitTrackApp::new(cc, session)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}
