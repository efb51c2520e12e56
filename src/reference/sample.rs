use std::f64::consts::PI;
use std::ops::Index;
use log::debug;
use crate::reference::config::SweepConfig;
use crate::reference::error::ReferenceError;
/// One point per decade from 1 ns to 10 s.
pub const SAMPLE_COUNT: usize = 11;
const RELATIVE_TOLERANCE: f64 = 1e-5;
const ABSOLUTE_TOLERANCE: f64 = 1e-8;
/// (index, expected cutoff in Hz, time constant name)
const PINNED_FREQUENCIES: [(usize, f64, &str); 4] = [
    (0, 159.1549431e6, "nanosecond"),
    (6, 159.1549431, "millisecond"),
    (SAMPLE_COUNT - 2, 0.1591549431, "second"),
    (SAMPLE_COUNT - 1, 0.0159154943, "ten second"),
];
/// A time constant and the -3 dB cutoff of the RC low pass it describes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time_constant: f64,
    pub cutoff_frequency: f64,
}
impl Sample {
    pub fn from_time_constant(time_constant: f64) -> Self {
        Self {
            time_constant,
            cutoff_frequency: cutoff_frequency(time_constant),
        }
    }
}
/// `f = 1 / (2 pi tau)`
pub fn cutoff_frequency(time_constant: f64) -> f64 {
    1.0 / (2.0 * PI * time_constant)
}
/// Samples in ascending time constant order (descending frequency).
#[derive(Clone, Debug)]
pub struct SampleSet {
    samples: [Sample; SAMPLE_COUNT],
}
impl SampleSet {
    /// Logarithmically spaced time constants over the inclusive exponent range.
    pub fn logspace(config: &SweepConfig) -> Self {
        let step = (config.stop_exponent - config.start_exponent) / (SAMPLE_COUNT - 1) as f64;
        let samples = std::array::from_fn(|i| {
            let exponent = if i == SAMPLE_COUNT - 1 {
                config.stop_exponent
            } else {
                config.start_exponent + i as f64 * step
            };
            Sample::from_time_constant(config.base.powf(exponent))
        });
        Self { samples }
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
    pub fn first(&self) -> &Sample {
        &self.samples[0]
    }
    pub fn last(&self) -> &Sample {
        &self.samples[SAMPLE_COUNT - 1]
    }
    /// Checks the pinned cutoff frequencies.
    pub fn validate(&self) -> Result<(), ReferenceError> {
        for (index, expected, name) in PINNED_FREQUENCIES {
            let actual = self.samples[index].cutoff_frequency;
            if !is_close(actual, expected) {
                return Err(ReferenceError::ComputationIntegrity(format!(
                    "The {name} time constant is incorrect (expected {expected} Hz, got {actual} Hz)."
                )));
            }
            debug!("{name} time constant ok: {actual} Hz");
        }
        Ok(())
    }
}
impl Index<usize> for SampleSet {
    type Output = Sample;
    fn index(&self, index: usize) -> &Sample {
        &self.samples[index]
    }
}
impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
/// The fixed 1 ns .. 10 s reference sweep.
pub fn generate_samples() -> SampleSet {
    SampleSet::logspace(&SweepConfig::default())
}
pub fn validate(samples: &SampleSet) -> Result<(), ReferenceError> {
    samples.validate()
}
fn is_close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * expected.abs()
}
