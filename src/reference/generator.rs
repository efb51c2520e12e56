use std::fs;
use std::path::{Path, PathBuf};
use log::info;
use crate::reference::config::{FigureStyle, OutputConfig, SweepConfig};
use crate::reference::error::ReferenceError;
use crate::reference::format::{check_format, format_table};
use crate::reference::plot::{render_png, render_svg};
use crate::reference::sample::SampleSet;
/// Paths of the files written by one run.
#[derive(Clone, Debug)]
pub struct ReferenceOutputs {
    pub vector_path: PathBuf,
    pub raster_path: PathBuf,
}
/// generate -> validate -> format -> render -> save, once.
#[derive(Clone, Debug, Default)]
pub struct ReferenceGenerator {
    sweep: SweepConfig,
    style: FigureStyle,
    output: OutputConfig,
}
impl ReferenceGenerator {
    pub fn new(sweep: SweepConfig, style: FigureStyle, output: OutputConfig) -> Self {
        Self {
            sweep,
            style,
            output,
        }
    }
    pub fn run(&self) -> Result<ReferenceOutputs, ReferenceError> {
        let samples = SampleSet::logspace(&self.sweep);
        info!(
            "generated {} samples, tau {:e}..{:e} s",
            samples.len(),
            samples.first().time_constant,
            samples.last().time_constant
        );
        samples.validate()?;
        check_format()?;
        info!("self-tests passed");
        let rows = format_table(&samples, self.sweep.decimal_places);
        // Render both before touching the disk so a failure leaves no partial output.
        let svg = render_svg(&samples, &rows, &self.style)?;
        let png = render_png(&samples, &rows, &self.style)?;
        let outputs = ReferenceOutputs {
            vector_path: self.output.vector_path(),
            raster_path: self.output.raster_path(),
        };
        write_output(&outputs.vector_path, svg.as_bytes())?;
        write_output(&outputs.raster_path, &png)?;
        Ok(outputs)
    }
}
fn write_output(path: &Path, contents: &[u8]) -> Result<(), ReferenceError> {
    fs::write(path, contents).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
