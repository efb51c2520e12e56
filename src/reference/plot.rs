use std::ops::Range;
use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use crate::reference::config::FigureStyle;
use crate::reference::error::ReferenceError;
use crate::reference::fonts::{self, FAMILY};
use crate::reference::format::{format_value, TableRow};
use crate::reference::sample::SampleSet;
pub const TITLE: &str = "RC Low Pass Filter Reference";
pub const CHART_TITLE: &str = "Cutoff Frequency (Hz) vs. Time Constant (s)";
pub const TIME_CONSTANT_LABEL: &str = "Time Constant (s)";
pub const CUTOFF_FREQUENCY_LABEL: &str = "Cutoff Frequency (Hz)";
const POINTS_PER_INCH: f64 = 72.0;
/// Converts point sizes to device pixels at a given dpi.
#[derive(Clone, Copy, Debug)]
struct Scale {
    pixels_per_point: f64,
}
impl Scale {
    fn at(dpi: f64) -> Self {
        Self {
            pixels_per_point: dpi / POINTS_PER_INCH,
        }
    }
    fn px(&self, points: f64) -> f64 {
        points * self.pixels_per_point
    }
    fn stroke(&self, points: f64) -> u32 {
        (self.px(points).round() as u32).max(1)
    }
}
/// Decade (major) and in-between (minor) gridline positions inside `min..=max`.
pub fn log_gridlines(min: f64, max: f64) -> (Vec<f64>, Vec<f64>) {
    let mut major = Vec::new();
    let mut minor = Vec::new();
    if !(min > 0.0 && max > min) {
        return (major, minor);
    }
    let first = min.log10().floor() as i32;
    let last = max.log10().ceil() as i32;
    for exponent in first..=last {
        let decade = 10f64.powi(exponent);
        for multiple in 1..=9 {
            let value = multiple as f64 * decade;
            // Nudge the bounds so exact decades at the ends survive rounding.
            if value < min * (1.0 - 1e-9) || value > max * (1.0 + 1e-9) {
                continue;
            }
            if multiple == 1 {
                major.push(value);
            } else {
                minor.push(value);
            }
        }
    }
    (major, minor)
}
/// Widens `range` a hair so decade ticks computed at its ends stay inside.
fn axis_range(range: &Range<f64>) -> Range<f64> {
    range.start * (1.0 - 1e-6)..range.end * (1.0 + 1e-6)
}
/// Labelled ticks: one per decade covered by `range`, both ends included.
pub fn decade_ticks(range: &Range<f64>) -> Vec<f64> {
    log_gridlines(range.start, range.end).0
}
fn title_font(size: f64, weight: FontStyle, color: &RGBColor) -> TextStyle<'static> {
    (FAMILY, size).into_font().style(weight).color(color)
}
/// Draws the titled table + chart figure on any backend.
pub fn draw_figure<DB>(
    root: &DrawingArea<DB, Shift>,
    samples: &SampleSet,
    rows: &[TableRow],
    style: &FigureStyle,
    dpi: f64,
) -> Result<(), ReferenceError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let scale = Scale::at(dpi);
    root.fill(&style.background)?;
    let body = root.titled(
        TITLE,
        title_font(scale.px(style.title_pt), FontStyle::Bold, &style.foreground),
    )?;
    let (_, body_height) = body.dim_in_pixel();
    let (table_area, chart_area) = body.split_vertically(body_height / 2);
    draw_table(&table_area, rows, style, scale)?;
    draw_chart(&chart_area, samples, style, scale)?;
    Ok(())
}
fn draw_table<DB>(
    area: &DrawingArea<DB, Shift>,
    rows: &[TableRow],
    style: &FigureStyle,
    scale: Scale,
) -> Result<(), ReferenceError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (width, height) = area.dim_in_pixel();
    let line_count = rows.len() + 1;
    let row_height = (scale.px(style.text_pt) * 1.8).min(height as f64 * 0.95 / line_count as f64);
    let column_width = width as f64 * 0.4;
    let left = (width as f64 - 2.0 * column_width) / 2.0;
    let top = (height as f64 - line_count as f64 * row_height) / 2.0;
    let border = style.foreground.stroke_width(scale.stroke(0.5));
    let text = (FAMILY, scale.px(style.text_pt))
        .into_font()
        .color(&style.foreground)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let header = [TIME_CONSTANT_LABEL, CUTOFF_FREQUENCY_LABEL];
    let lines = std::iter::once(header.map(str::to_owned)).chain(
        rows.iter()
            .map(|row| [row.time_constant.clone(), row.cutoff_frequency.clone()]),
    );
    for (line, cells) in lines.enumerate() {
        let y0 = top + line as f64 * row_height;
        for (column, cell) in cells.into_iter().enumerate() {
            let x0 = left + column as f64 * column_width;
            area.draw(&Rectangle::new(
                [
                    (x0.round() as i32, y0.round() as i32),
                    ((x0 + column_width).round() as i32, (y0 + row_height).round() as i32),
                ],
                border,
            ))?;
            let center = (
                (x0 + column_width / 2.0).round() as i32,
                (y0 + row_height / 2.0).round() as i32,
            );
            area.draw(&Text::new(cell, center, text.clone()))?;
        }
    }
    Ok(())
}
fn draw_chart<DB>(
    area: &DrawingArea<DB, Shift>,
    samples: &SampleSet,
    style: &FigureStyle,
    scale: Scale,
) -> Result<(), ReferenceError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let x_range = axis_range(&(samples.first().time_constant..samples.last().time_constant));
    let y_range = axis_range(&(samples.last().cutoff_frequency..samples.first().cutoff_frequency));
    let x_ticks = decade_ticks(&x_range);
    let y_ticks = decade_ticks(&y_range);
    let label_font = (FAMILY, scale.px(style.text_pt))
        .into_font()
        .color(&style.foreground);
    let mut chart = ChartBuilder::on(area)
        .margin(scale.px(12.0) as u32)
        // Half of the last decade label hangs past the plot edge.
        .margin_right(scale.px(style.text_pt * 2.5) as u32)
        .caption(
            CHART_TITLE,
            (FAMILY, scale.px(style.caption_pt))
                .into_font()
                .color(&style.foreground),
        )
        .set_label_area_size(LabelAreaPosition::Left, scale.px(60.0) as u32)
        .set_label_area_size(LabelAreaPosition::Bottom, scale.px(40.0) as u32)
        .build_cartesian_2d(
            x_range.clone().log_scale().with_key_points(x_ticks.clone()),
            y_range.clone().log_scale().with_key_points(y_ticks.clone()),
        )?;
    let decade_label = |v: &f64| format_value(*v, 0);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(x_ticks.len())
        .y_labels(y_ticks.len())
        .x_label_formatter(&decade_label)
        .y_label_formatter(&decade_label)
        .x_desc(TIME_CONSTANT_LABEL)
        .y_desc(CUTOFF_FREQUENCY_LABEL)
        .label_style(label_font.clone())
        .axis_desc_style(label_font)
        .axis_style(style.foreground.stroke_width(scale.stroke(0.8)))
        .draw()?;
    let major_style = style.grid.stroke_width(scale.stroke(style.grid_width_pt));
    let minor_style = style.grid.mix(0.5).stroke_width(scale.stroke(style.grid_width_pt));
    let (_, x_minor) = log_gridlines(x_range.start, x_range.end);
    let (_, y_minor) = log_gridlines(y_range.start, y_range.end);
    let vertical = |x: f64| vec![(x, y_range.start), (x, y_range.end)];
    let horizontal = |y: f64| vec![(x_range.start, y), (x_range.end, y)];
    chart.draw_series(x_minor.into_iter().map(|x| PathElement::new(vertical(x), minor_style)))?;
    chart.draw_series(y_minor.into_iter().map(|y| PathElement::new(horizontal(y), minor_style)))?;
    chart.draw_series(x_ticks.into_iter().map(|x| PathElement::new(vertical(x), major_style)))?;
    chart.draw_series(y_ticks.into_iter().map(|y| PathElement::new(horizontal(y), major_style)))?;
    chart.draw_series(LineSeries::new(
        samples.iter().map(|s| (s.time_constant, s.cutoff_frequency)),
        style.line.stroke_width(scale.stroke(style.line_width_pt)),
    ))?;
    Ok(())
}
pub fn render_svg(
    samples: &SampleSet,
    rows: &[TableRow],
    style: &FigureStyle,
) -> Result<String, ReferenceError> {
    fonts::ensure_registered()?;
    let mut document = String::new();
    {
        let root = SVGBackend::with_string(&mut document, style.pixels(style.vector_dpi))
            .into_drawing_area();
        draw_figure(&root, samples, rows, style, style.vector_dpi)?;
        root.present()?;
    }
    Ok(document)
}
pub fn render_png(
    samples: &SampleSet,
    rows: &[TableRow],
    style: &FigureStyle,
) -> Result<Vec<u8>, ReferenceError> {
    fonts::ensure_registered()?;
    let (width, height) = style.pixels(style.raster_dpi);
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_figure(&root, samples, rows, style, style.raster_dpi)?;
        root.present()?;
    }
    encode_png(buffer, width, height, style.raster_pixels_per_meter())
}
/// RGB8 PNG with a `pHYs` chunk so the raster keeps its print density.
fn encode_png(
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    pixels_per_meter: u32,
) -> Result<Vec<u8>, ReferenceError> {
    let len = buffer.len();
    let frame = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        ReferenceError::Plot(format!("{len} byte buffer does not hold a {width}x{height} frame"))
    })?;
    let mut output = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut output, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: pixels_per_meter,
            yppu: pixels_per_meter,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(frame.as_raw())?;
        writer.finish()?;
    }
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::format::format_table;
    use crate::reference::sample::generate_samples;
    #[test]
    fn gridlines_cover_every_decade() {
        let (major, minor) = log_gridlines(1e-9, 10.0);
        assert_eq!(major.len(), 11);
        assert_eq!(minor.len(), 10 * 8);
        assert!((major[0] - 1e-9).abs() < 1e-21);
        assert!((major[10] - 10.0).abs() < 1e-9);
    }
    #[test]
    fn gridlines_clip_to_range() {
        let (major, minor) = log_gridlines(0.0159, 1.59e8);
        assert_eq!(major.len(), 10);
        assert!(minor.iter().all(|v| *v >= 0.0159 && *v <= 1.59e8));
        assert!(minor.iter().any(|v| (*v - 0.02).abs() < 1e-12));
        assert!(log_gridlines(-1.0, 1.0).0.is_empty());
    }
    #[test]
    fn decade_ticks_include_both_ends() {
        let samples = generate_samples();
        let x_range = axis_range(&(samples.first().time_constant..samples.last().time_constant));
        let ticks = decade_ticks(&x_range);
        assert_eq!(ticks.len(), 11);
        assert!((ticks[0] - 1e-9).abs() < 1e-21);
        assert!((ticks[10] - 10.0).abs() < 1e-9);
        let labels: Vec<String> = ticks.iter().map(|v| format_value(*v, 0)).collect();
        assert_eq!(labels.first().map(String::as_str), Some("1e-09"));
        assert_eq!(labels.last().map(String::as_str), Some("1e+01"));
    }
    fn dark_bytes(weight: FontStyle) -> usize {
        fonts::ensure_registered().unwrap();
        let (width, height) = (800u32, 100u32);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            root.titled(TITLE, title_font(50.0, weight, &BLACK)).unwrap();
            root.present().unwrap();
        }
        buffer.iter().filter(|b| **b < 128).count()
    }
    #[test]
    fn bitmap_title_is_bold() {
        let bold = dark_bytes(FontStyle::Bold);
        let normal = dark_bytes(FontStyle::Normal);
        assert!(normal > 0);
        assert!(bold > normal, "bold={bold} normal={normal}");
    }
    #[test]
    fn svg_contains_titles_and_headers() {
        let samples = generate_samples();
        let rows = format_table(&samples, 1);
        let svg = render_svg(&samples, &rows, &FigureStyle::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(TITLE));
        assert!(svg.contains(TIME_CONSTANT_LABEL));
        assert!(svg.contains(CUTOFF_FREQUENCY_LABEL));
        assert!(svg.contains("1.6e+08"));
    }
    #[test]
    fn png_decodes_at_full_resolution() {
        let samples = generate_samples();
        let rows = format_table(&samples, 1);
        let png = render_png(&samples, &rows, &FigureStyle::default()).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1920, 3000));
        // pHYs payload: x ppu, y ppu (big endian), unit 1 = meter.
        let at = png.windows(4).position(|w| w == b"pHYs").unwrap() + 4;
        let ppu = |i: usize| u32::from_be_bytes(png[at + i..at + i + 4].try_into().unwrap());
        assert_eq!((ppu(0), ppu(4), png[at + 8]), (11811, 11811, 1));
    }
}
