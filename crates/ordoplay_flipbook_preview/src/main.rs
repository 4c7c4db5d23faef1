// SPDX-License-Identifier: MIT OR Apache-2.0
//! `OrdoPlay` Flipbook preview.
//!
//! Runs one flipbook animation through a simulated host loop and logs every
//! frame shown and every playback event.
//!
//! Usage: `flipbook_preview [settings.ron]`. Without a file the built-in
//! preview settings are used.

mod runner;
mod settings;

use settings::PreviewSettings;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ordoplay_flipbook=debug,flipbook_preview=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OrdoPlay Flipbook preview v{}", env!("CARGO_PKG_VERSION"));

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match PreviewSettings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Failed to load preview settings {:?}: {e}", path);
                std::process::exit(1);
            }
        },
        None => PreviewSettings::default(),
    };

    match runner::run(&settings) {
        Ok(report) => tracing::info!(
            ticks = report.ticks,
            frames = report.frames_shown.len(),
            events = report.events.len(),
            "Preview finished"
        ),
        Err(e) => {
            tracing::error!("Preview failed: {e}");
            std::process::exit(1);
        }
    }
}
