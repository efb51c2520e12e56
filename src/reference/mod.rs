// src/reference/mod.rs
pub mod config;
pub mod error;
pub mod fonts;
pub mod format;
pub mod generator;
pub mod plot;
pub mod sample;
pub use config::{FigureStyle, OutputConfig, SweepConfig};
pub use error::ReferenceError;
pub use format::{check_format, format_table, format_value, TableRow};
pub use generator::{ReferenceGenerator, ReferenceOutputs};
pub use plot::{render_png, render_svg};
pub use sample::{generate_samples, validate, Sample, SampleSet, SAMPLE_COUNT};
