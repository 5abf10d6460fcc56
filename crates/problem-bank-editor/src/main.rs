//! Problem bank editor: rename a problem bank and edit its problems

use eframe::egui;

mod app;
mod bridge;
mod dialog;
mod host;
mod launch_button;
mod ui;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting problem bank editor");

    let settings = host::HostSettings::from_env()?;
    let bridge = bridge::EditorBridge::new(settings.adapter)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Problem Bank Editor")
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Problem Bank Editor",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app::App::new(settings.bank, bridge)))),
    )
    .map_err(|e| eyre::eyre!("eframe exited with error: {e}"))
}
