//! Loaders for the label file and the score file.

use crate::error::{EvalError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Fields per label-file row: label, sentence and one unused column.
const LABEL_FIELDS: usize = 3;

/// One row of the label file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSentence {
    /// Ground-truth label, compared as an opaque string.
    pub label: String,
    /// Sentence text; the deduplication key.
    pub sentence: String,
}

impl LabeledSentence {
    pub fn new(label: impl Into<String>, sentence: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sentence: sentence.into(),
        }
    }
}

/// Load a tab-separated label file (`label<TAB>sentence<TAB>unused`).
pub fn load_labels(path: &Path) -> Result<Vec<LabeledSentence>> {
    load_labels_with_delimiter(path, b'\t')
}

/// Load a label file with a custom single-byte delimiter.
///
/// Each line is one row with exactly three fields. Fields may be wrapped in
/// `"` quotes (doubled quotes escape), so `"a b"` and `a b` are the same
/// sentence. A blank line is a row with no fields and fails like any other
/// short row.
pub fn load_labels_with_delimiter(path: &Path, delimiter: u8) -> Result<Vec<LabeledSentence>> {
    let mut builder = csv::ReaderBuilder::new();
    builder.delimiter(delimiter).has_headers(false).flexible(true);

    let mut labels = Vec::new();
    let mut record = csv::StringRecord::new();
    for (idx, raw) in open_lines(path)?.enumerate() {
        let line = idx as u64 + 1;
        let raw = read_line(path, line, raw)?;

        // The csv reader skips empty input instead of yielding an empty row.
        let fields = if builder
            .from_reader(raw.as_bytes())
            .read_record(&mut record)
            .map_err(|e| EvalError::parse(path, line, e.to_string()))?
        {
            record.len()
        } else {
            0
        };

        if fields != LABEL_FIELDS {
            return Err(EvalError::parse(
                path,
                line,
                format!("expected {} fields, found {}", LABEL_FIELDS, fields),
            ));
        }

        labels.push(LabeledSentence::new(&record[0], &record[1]));
    }

    log::debug!("Loaded {} labels from {}", labels.len(), path.display());
    Ok(labels)
}

/// Load a score file with one floating-point value per line.
///
/// Surrounding whitespace is trimmed. NaN is rejected because it has no rank.
pub fn load_scores(path: &Path) -> Result<Vec<f64>> {
    let mut scores = Vec::new();
    for (idx, raw) in open_lines(path)?.enumerate() {
        let line = idx as u64 + 1;
        let raw = read_line(path, line, raw)?;
        let text = raw.trim();
        let score: f64 = text
            .parse()
            .map_err(|e| EvalError::parse(path, line, format!("invalid score {:?}: {}", text, e)))?;
        if score.is_nan() {
            return Err(EvalError::parse(path, line, "score is NaN"));
        }
        scores.push(score);
    }

    log::debug!("Loaded {} scores from {}", scores.len(), path.display());
    Ok(scores)
}

fn open_lines(path: &Path) -> Result<std::io::Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| EvalError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file).lines())
}

/// Invalid UTF-8 is a malformed line; any other read failure is file access.
fn read_line(path: &Path, line: u64, raw: std::io::Result<String>) -> Result<String> {
    raw.map_err(|source| match source.kind() {
        std::io::ErrorKind::InvalidData => EvalError::parse(path, line, source.to_string()),
        _ => EvalError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
    })
}
