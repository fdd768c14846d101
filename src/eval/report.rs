//! Rendering of an [`EvalReport`] for stdout.

use crate::eval::EvalReport;
use std::fmt;

/// Significant digits of a ratio in the text report.
const RATIO_DIGITS: i32 = 12;

/// Output rendering selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// `<matched> <tp> <fp>` followed by `Precision/Recall <p> <r>`.
    #[default]
    Text,
    /// One JSON object.
    Json,
}

impl EvalReport {
    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => serde_json::to_string(self),
        }
    }
}

impl fmt::Display for EvalReport {
    /// Two lines, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            self.matched, self.true_positives, self.false_positives
        )?;
        write!(
            f,
            "Precision/Recall {} {}",
            format_ratio(self.precision),
            format_ratio(self.recall)
        )
    }
}

/// `%.12g`, with `.0` appended to whole numbers: `0.5`, `1.0`,
/// `0.666666666667`, `1e-05`.
pub fn format_ratio(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    // Exponent after rounding to the significant digits.
    let sci = format!("{:.*e}", (RATIO_DIGITS - 1) as usize, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= RATIO_DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_fraction_zeros(mantissa), sign, exp.abs())
    } else {
        let fixed = format!("{:.*}", (RATIO_DIGITS - 1 - exp) as usize, value);
        let trimmed = strip_fraction_zeros(&fixed);
        if trimmed.contains('.') {
            trimmed.to_string()
        } else {
            format!("{}.0", trimmed)
        }
    }
}

fn strip_fraction_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
