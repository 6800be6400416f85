//! Headless rendering of a drawing surface to image files.

use crate::draw::{Color, fill_background};
use crate::input::InputState;
use cairo::{Context, Format, ImageSurface, SvgSurface};
use log::info;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported output format '{0}' (expected .png or .svg)")]
    UnsupportedFormat(String),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Output file format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    /// Determines the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err(ExportError::UnsupportedFormat(extension)),
        }
    }
}

/// Canvas used for a headless render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    /// Painted under all strokes; `None` keeps the canvas transparent
    pub background: Option<Color>,
}

impl ExportOptions {
    fn checked_size(&self) -> Result<(i32, i32), ExportError> {
        let invalid = || ExportError::InvalidSize {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(invalid());
        }
        let width = i32::try_from(self.width).map_err(|_| invalid())?;
        let height = i32::try_from(self.height).map_err(|_| invalid())?;
        Ok((width, height))
    }
}

fn paint(ctx: &Context, state: &InputState, options: &ExportOptions) {
    if let Some(background) = options.background {
        fill_background(ctx, background);
    }
    let plan = state.render_plan();
    crate::draw::render_plan(ctx, &plan);
}

/// Renders the surface into an in-memory ARGB32 image.
///
/// The erase cursor is UI chrome and is not part of the drawing, so it is
/// never included.
pub fn render_to_image(
    state: &InputState,
    options: &ExportOptions,
) -> Result<ImageSurface, ExportError> {
    let (width, height) = options.checked_size()?;
    let surface = ImageSurface::create(Format::ARgb32, width, height)?;
    {
        let ctx = Context::new(&surface)?;
        paint(&ctx, state, options);
    }
    surface.flush();
    Ok(surface)
}

/// Writes the surface as a PNG file.
pub fn export_png(
    state: &InputState,
    path: &Path,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let surface = render_to_image(state, options)?;
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}

/// Writes the surface as an SVG document.
pub fn export_svg(
    state: &InputState,
    path: &Path,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    options.checked_size()?;
    let surface = SvgSurface::new(
        f64::from(options.width),
        f64::from(options.height),
        Some(path),
    )?;
    {
        let ctx = Context::new(&surface)?;
        paint(&ctx, state, options);
    }
    surface.finish();
    Ok(())
}

/// Writes the surface to `path`, choosing PNG or SVG from the extension.
///
/// Missing parent directories are created.
///
/// # Returns
/// The path that was written
pub fn export_to_path(
    state: &InputState,
    path: &Path,
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let format = ExportFormat::from_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            info!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    match format {
        ExportFormat::Png => export_png(state, path, options)?,
        ExportFormat::Svg => export_svg(state, path, options)?,
    }

    info!(
        "Exported {}x{} {:?} to {}",
        options.width,
        options.height,
        format,
        path.display()
    );
    Ok(path.to_path_buf())
}
