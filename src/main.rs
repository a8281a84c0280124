//! ClauseWise - legal-document assistant
//!
//! A Rust-based desktop front-end that simplifies legal phrasing and previews
//! entity extraction, classification and Q&A for a selected document.

mod app;
mod core;
mod ui;

use app::ClauseWiseApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting ClauseWise...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("ClauseWise"),
        ..Default::default()
    };

    eframe::run_native(
        "ClauseWise",
        native_options,
        Box::new(|cc| Ok(Box::new(ClauseWiseApp::new(cc)))),
    )
}
