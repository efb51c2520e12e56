use crate::reference::error::ReferenceError;
use crate::reference::sample::SampleSet;
/// Formatted cells of one table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub time_constant: String,
    pub cutoff_frequency: String,
}
/// Scientific notation with `decimal_places` mantissa digits and a signed,
/// zero padded exponent: `1.2e-09`.
///
/// Trailing zeros of the mantissa are kept so every cell in a column has the
/// same width. With zero decimal places the point is dropped (`1e-09`).
pub fn format_value(x: f64, decimal_places: usize) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    // `{:e}` rounds correctly but prints the exponent bare (`1.2e-9`).
    let raw = format!("{x:.decimal_places$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    let mut out = String::with_capacity(mantissa.len() + digits.len().max(2) + 2);
    out.push_str(mantissa);
    out.push('e');
    out.push(sign);
    if digits.len() < 2 {
        out.push('0');
    }
    out.push_str(digits);
    out
}
/// Self-test of [`format_value`] against a pinned string.
pub fn check_format() -> Result<(), ReferenceError> {
    let formatted = format_value(1.23456789e-9, 1);
    if formatted != "1.2e-09" {
        return Err(ReferenceError::ComputationIntegrity(format!(
            "The format_value function is incorrect (expected 1.2e-09, got {formatted})."
        )));
    }
    Ok(())
}
pub fn format_table(samples: &SampleSet, decimal_places: usize) -> Vec<TableRow> {
    samples
        .iter()
        .map(|sample| TableRow {
            time_constant: format_value(sample.time_constant, decimal_places),
            cutoff_frequency: format_value(sample.cutoff_frequency, decimal_places),
        })
        .collect()
}
