use std::path::{Path, PathBuf};
use plotters::prelude::{RGBColor, BLACK, WHITE};
const METERS_PER_INCH: f64 = 0.0254;
/// Decade sweep of time constants, `base^start ..= base^stop`.
#[derive(Clone, Copy, Debug)]
pub struct SweepConfig {
    pub start_exponent: f64,
    pub stop_exponent: f64,
    pub base: f64,
    /// Mantissa digits after the decimal point in the table.
    pub decimal_places: usize,
}
impl Default for SweepConfig {
    fn default() -> Self {
        // 1 ns up to 10 s.
        Self {
            start_exponent: -9.0,
            stop_exponent: 1.0,
            base: 10.0,
            decimal_places: 1,
        }
    }
}
/// Where the two renderings of the figure land.
#[derive(Clone, Debug)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub file_stem: String,
}
impl OutputConfig {
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
    pub fn vector_path(&self) -> PathBuf {
        self.path_with_extension("svg")
    }
    pub fn raster_path(&self) -> PathBuf {
        self.path_with_extension("png")
    }
    fn path_with_extension(&self, extension: &str) -> PathBuf {
        Path::new(&self.directory).join(format!("{}.{extension}", self.file_stem))
    }
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_stem: "RC".to_owned(),
        }
    }
}
/// Figure geometry in inches, text and strokes in points.
#[derive(Clone, Debug)]
pub struct FigureStyle {
    pub width_in: f64,
    pub height_in: f64,
    /// Layout density of the SVG document.
    pub vector_dpi: f64,
    pub raster_dpi: f64,
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub line: RGBColor,
    pub grid: RGBColor,
    pub title_pt: f64,
    pub caption_pt: f64,
    pub text_pt: f64,
    pub line_width_pt: f64,
    pub grid_width_pt: f64,
}
impl FigureStyle {
    /// PNG `pHYs` density for the raster output.
    pub fn raster_pixels_per_meter(&self) -> u32 {
        (self.raster_dpi / METERS_PER_INCH).round() as u32
    }
    pub fn pixels(&self, dpi: f64) -> (u32, u32) {
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }
}
impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width_in: 6.4,
            height_in: 10.0,
            vector_dpi: 100.0,
            raster_dpi: 300.0,
            background: WHITE,
            foreground: BLACK,
            line: RGBColor(31, 119, 180),
            grid: RGBColor(128, 128, 128),
            title_pt: 16.0,
            caption_pt: 12.0,
            text_pt: 10.0,
            line_width_pt: 1.5,
            grid_width_pt: 0.1,
        }
    }
}
