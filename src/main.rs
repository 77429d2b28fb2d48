// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line driver: replay a selection drag over an image and save the crop.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cropframe::constant::DEFAULT_SURFACE;
use cropframe::{CropRegion, Cropper, CropperConfig, DisplayLayout, PointerEvent, SurfaceSize};

#[derive(Parser, Debug)]
#[command(version, about = "Crop an image with a fixed aspect ratio selection")]
struct Args {
    /// Image to crop.
    input: PathBuf,

    /// Where to write the cropped image; the format follows the extension.
    output: PathBuf,

    /// Display surface the image is fitted into, as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_surface)]
    surface: Option<SurfaceSize>,

    /// Aspect ratio as W:H (overrides the config file).
    #[arg(long)]
    aspect_ratio: Option<String>,

    /// Minimum selection width in source pixels (overrides the config file).
    #[arg(long)]
    minimum_width: Option<f32>,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drag from X1,Y1 to X2,Y2, in display coordinates of the fitted image.
    #[arg(long, value_parser = parse_select, allow_hyphen_values = true)]
    select: [f32; 4],

    /// Print layout and crop region as JSON on stdout.
    #[arg(long)]
    print_region: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    layout: DisplayLayout,
    region: CropRegion,
}

fn parse_surface(value: &str) -> Result<SurfaceSize, String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width: f32 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let height: f32 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok(SurfaceSize::new(width, height))
}

fn parse_select(value: &str) -> Result<[f32; 4], String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("'{part}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    parts
        .try_into()
        .map_err(|_| format!("expected X1,Y1,X2,Y2, got '{value}'"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CropperConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CropperConfig::default(),
    };
    if let Some(ratio) = args.aspect_ratio {
        config.aspect_ratio = ratio;
    }
    if let Some(width) = args.minimum_width {
        config.minimum_width = width;
    }
    // The input argument wins over a configured image.
    config.image = None;

    let (default_w, default_h) = DEFAULT_SURFACE;
    let surface = args
        .surface
        .unwrap_or(SurfaceSize::new(default_w, default_h));

    let mut cropper = Cropper::new(surface, config).context("Invalid cropper configuration")?;
    let layout = cropper
        .open_image(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;

    let [x1, y1, x2, y2] = args.select;
    cropper.handle_event(PointerEvent::down(x1, y1));
    cropper.handle_event(PointerEvent::moved(x2, y2));
    cropper.handle_event(PointerEvent::up(x2, y2));

    let region = cropper
        .crop_region()
        .context("Selection does not cover any pixel of the image")?;

    if args.print_region {
        let report = Report { layout, region };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let cropped = cropper.cropped_image()?;
    cropped
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!(
        "Cropped {}x{} at ({}, {}) into {}",
        region.width,
        region.height,
        region.x,
        region.y,
        args.output.display()
    );

    cropper.destroy();
    Ok(())
}
