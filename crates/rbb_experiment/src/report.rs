//! Report formatting for experiment results.
//!
//! The text format prints one block per bin count:
//!
//! ```text
//! Results for 100 bins:
//! (1, 2.71828)       <- (scale factor, average max load), one per factor
//! ...
//! (1, 0.367879)      <- (scale factor, average empty-bin fraction), one per factor
//! ...
//! ```
//!
//! Averages use general notation with six significant digits, so the output
//! matches the published data points. The JSON format serialises the reports
//! as-is.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ExperimentError;
use crate::sweep::BinCountReport;

/// Significant digits used for floating point values in text reports.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Output format of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text `(x, y)` pairs
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown format: {}. Supported: text, json", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Formats `value` in general notation with [`SIGNIFICANT_DIGITS`]
/// significant digits and trailing zeros removed.
///
/// Fixed notation is used for decimal exponents in `[-4, 6)`, scientific
/// notation otherwise.
///
/// # Examples
///
/// ```rust
/// use rbb_experiment::report::format_general;
///
/// assert_eq!(format_general(3.0), "3");
/// assert_eq!(format_general(0.123456789), "0.123457");
/// assert_eq!(format_general(12.3456789), "12.3457");
/// assert_eq!(format_general(0.0000125), "1.25e-05");
/// ```
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Scientific rendering fixes the exponent after rounding
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(exp) => (m, exp),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strips trailing zeros, and a dangling decimal point, from a decimal string.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Renders the reports in the plain-text format.
pub fn render_text(reports: &[BinCountReport]) -> String {
    let mut out = String::new();

    for report in reports {
        out.push_str(&format!("Results for {} bins:\n", report.num_bins));
        for point in &report.points {
            out.push_str(&format!(
                "({}, {})\n",
                point.scale_factor,
                format_general(point.avg_max_load)
            ));
        }
        for point in &report.points {
            out.push_str(&format!(
                "({}, {})\n",
                point.scale_factor,
                format_general(point.avg_empty_bin_fraction)
            ));
        }
    }

    out
}

/// Renders the reports as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ExperimentError::Serialisation`] if serialisation fails.
pub fn render_json(reports: &[BinCountReport]) -> Result<String, ExperimentError> {
    serde_json::to_string_pretty(reports).map_err(|e| ExperimentError::serialisation(e.to_string()))
}

/// Renders the reports in the requested format.
pub fn render(reports: &[BinCountReport], format: OutputFormat) -> Result<String, ExperimentError> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::SweepPoint;

    fn sample_reports() -> Vec<BinCountReport> {
        vec![BinCountReport {
            num_bins: 100,
            points: vec![
                SweepPoint {
                    num_bins: 100,
                    scale_factor: 1,
                    num_balls: 100,
                    avg_max_load: 4.5,
                    avg_empty_bin_fraction: 0.375,
                },
                SweepPoint {
                    num_bins: 100,
                    scale_factor: 4,
                    num_balls: 400,
                    avg_max_load: 12.0,
                    avg_empty_bin_fraction: 0.1234567,
                },
            ],
        }]
    }

    #[test]
    fn test_format_general_fixed() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(4.5), "4.5");
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(-2.25), "-2.25");
    }

    #[test]
    fn test_format_general_rounding_carries_exponent() {
        assert_eq!(format_general(99.9999999), "100");
        assert_eq!(format_general(0.99999999), "1");
    }

    #[test]
    fn test_format_general_scientific() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(2.5e-10), "2.5e-10");
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_reports());
        let expected = "Results for 100 bins:\n\
                        (1, 4.5)\n\
                        (4, 12)\n\
                        (1, 0.375)\n\
                        (4, 0.123457)\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_render_json_roundtrip() {
        let reports = sample_reports();
        let json = render(&reports, OutputFormat::Json).unwrap();
        let parsed: Vec<BinCountReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reports);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
