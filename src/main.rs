#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use wishcard_core::CardConfig;

/// Global card content, resolved from command line before launch
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card content (from --card/--track or built-in defaults)
pub fn card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Wishcard - an animated birthday card
#[derive(Parser, Debug)]
#[command(name = "wishcard-desktop")]
#[command(about = "Animated birthday card with music and confetti")]
struct Args {
    /// Card content JSON (recipient, letter, track path)
    #[arg(short, long)]
    card: Option<PathBuf>,

    /// Music track, overrides the one in the card JSON
    #[arg(short, long)]
    track: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match args.card {
        Some(path) => CardConfig::load(&path)
            .with_context(|| format!("loading card {}", path.display()))?,
        None => CardConfig::default(),
    };
    if let Some(track) = args.track {
        config.track = track;
    }

    tracing::info!(
        "starting card for {} (track: {})",
        config.recipient,
        config.track.display()
    );

    let _ = CARD_CONFIG.set(config);

    // Window sized like a greeting card: portrait, roomy enough for the letter.
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Wishcard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
