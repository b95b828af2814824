mod cli;
mod export;
mod frames;
mod viewer;

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use portray_engine::device::GpuInit;
use portray_engine::logging::{LoggingConfig, init_logging};
use portray_engine::scene::FontWeight;
use portray_engine::text::FontSystem;
use portray_engine::window::{Runtime, RuntimeConfig};
use portray_grid::{AssetManifest, GridInteraction, GridRenderer};

use cli::Cli;
use viewer::GridViewer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    let frames = frames::load_frames(&cli.frames)?;
    if frames.is_empty() {
        log::warn!("{} contains no frames", cli.frames.display());
    }

    let manifest = load_manifest(cli.manifest.as_deref())?;
    let mut renderer = GridRenderer::with_manifest(cli.grid_config(), &manifest)?
        .with_interaction(Box::new(GridInteraction::new()));
    let ready = renderer.load_assets(&cli.assets, &manifest);
    log::info!("{ready} assets ready under {}", cli.assets.display());

    let fonts = load_fonts(&cli)?;

    if cli.window {
        let surface = renderer.geometry().surface();
        let canvas = (surface.width.round() as u32, surface.height.round() as u32);
        let viewer = GridViewer::new(renderer, fonts, frames, Duration::from_millis(cli.interval_ms))?;
        return Runtime::run(RuntimeConfig::for_canvas("portray", canvas), GpuInit::default(), viewer);
    }

    let written = export::export_frames(&mut renderer, &fonts, &frames, &cli.out)?;
    log::info!("{written} frames written to {}", cli.out.display());
    Ok(())
}

fn load_manifest(path: Option<&Path>) -> Result<AssetManifest> {
    let Some(path) = path else {
        return Ok(AssetManifest::default());
    };
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    AssetManifest::from_json(&json).with_context(|| format!("invalid asset manifest {}", path.display()))
}

fn load_fonts(cli: &Cli) -> Result<FontSystem> {
    let mut fonts = FontSystem::new();
    if let Some(path) = &cli.font {
        fonts
            .load_font_file(FontWeight::Regular, path)
            .with_context(|| format!("failed to load font {}", path.display()))?;
    }
    if let Some(path) = &cli.bold_font {
        fonts
            .load_font_file(FontWeight::Bold, path)
            .with_context(|| format!("failed to load font {}", path.display()))?;
    }
    if !fonts.has_faces() {
        log::warn!("no font loaded; labels will not be drawn");
    }
    Ok(fonts)
}
