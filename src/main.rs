// SPDX-License-Identifier: MPL-2.0
use hts_icons::generator::{self, DEFAULT_TARGETS};
use hts_icons::IconRenderer;
use std::process::ExitCode;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let icons_dir = generator::default_icons_dir();
    match generator::generate_icons(&icons_dir, &DEFAULT_TARGETS, &IconRenderer::new()) {
        Ok(_) => {
            info!("Icon generation complete!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Icon generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
