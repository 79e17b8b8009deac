//! Clean-Air Sentinel - AI illegal waste burning detection console
//!
//! Desktop demo build: landing page, sign-in stub and the monitoring
//! dashboard, all served from static mock data. No camera ingestion or
//! alert delivery happens in this build.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

mod app;
mod config;
mod data;
mod gui;
mod logging;

use crate::app::SentinelApp;
use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "sentinel", version, about = "Clean-Air Sentinel console")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, env = "SENTINEL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_ref())?;
    let level = cli
        .log_level
        .unwrap_or_else(|| config.app.log_level.clone());
    let _log_guard = logging::init(&config.log_dir(), &level)?;

    info!("🚀 Starting Clean-Air Sentinel v{}", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|errors| anyhow::anyhow!("Invalid configuration: {}", errors.join("; ")))?;
    info!("✅ Configuration loaded and validated");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([960.0, 640.0])
            .with_maximized(config.ui.start_maximized)
            .with_title("Clean-Air Sentinel")
            .with_icon(load_icon()),
        centered: true,
        follow_system_theme: false,
        default_theme: if config.ui.theme == "dark" {
            eframe::Theme::Dark
        } else {
            eframe::Theme::Light
        },
        ..Default::default()
    };

    info!("🖥️ Starting console...");

    let app = SentinelApp::new(config);

    eframe::run_native(
        "Clean-Air Sentinel",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}

fn load_icon() -> egui::IconData {
    match std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icon.png")) {
        Ok(icon_bytes) => match image::load_from_memory(&icon_bytes) {
            Ok(image) => {
                let rgba_image = image.to_rgba8();
                let (width, height) = rgba_image.dimensions();
                egui::IconData {
                    rgba: rgba_image.into_raw(),
                    width,
                    height,
                }
            }
            Err(_) => create_fallback_icon(),
        },
        Err(_) => create_fallback_icon(),
    }
}

fn create_fallback_icon() -> egui::IconData {
    // Fallback: a 32x32 emerald disc, close enough to the shield mark
    let size = 32i32;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    let center = size / 2;
    let radius = (size / 2) as f32;
    for y in 0..size {
        for x in 0..size {
            let dist = (((x - center).pow(2) + (y - center).pow(2)) as f32).sqrt();
            if dist <= radius {
                rgba.extend_from_slice(&[16, 185, 129, 255]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
