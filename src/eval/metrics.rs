//! Deduplicated precision/recall over a fully ranked list.

use crate::error::{EvalError, Result};
use crate::eval::LabeledSentence;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Label value treated as positive when no other is configured.
pub const DEFAULT_POSITIVE_LABEL: &str = "1";

/// Rank direction of the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher score ranks first.
    High,
    /// Lower score ranks first.
    Low,
}

impl Direction {
    /// `"high"` ranks descending; any other literal ranks ascending.
    pub fn from_arg(arg: &str) -> Self {
        Self::from_arg_with(arg, "high")
    }

    pub fn from_arg_with(arg: &str, high_literal: &str) -> Self {
        if arg == high_literal {
            Direction::High
        } else {
            Direction::Low
        }
    }

    pub fn is_descending(self) -> bool {
        self == Direction::High
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::High => f.write_str("high"),
            Direction::Low => f.write_str("low"),
        }
    }
}

/// A labeled sentence joined with its score by line position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub label: String,
    pub sentence: String,
    pub score: f64,
}

/// Outcome of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    /// Distinct sentences kept after deduplication.
    pub matched: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    /// `true_positives / (true_positives + false_positives)`.
    pub precision: f64,
    /// `true_positives / matched`. Equal to `precision` because every kept
    /// record lands in exactly one of the two buckets.
    pub recall: f64,
    pub direction: Direction,
    /// Input records skipped because their sentence was already seen.
    pub duplicates_dropped: usize,
}

/// Join labels and scores line by line.
///
/// Returns `EvalError::Alignment` when the two inputs have different lengths.
pub fn pair_records(labels: Vec<LabeledSentence>, scores: &[f64]) -> Result<Vec<ScoredRecord>> {
    if labels.len() != scores.len() {
        return Err(EvalError::Alignment {
            labels: labels.len(),
            scores: scores.len(),
        });
    }
    Ok(labels
        .into_iter()
        .zip(scores.iter().copied())
        .map(|(ls, score)| ScoredRecord {
            label: ls.label,
            sentence: ls.sentence,
            score,
        })
        .collect())
}

/// Stable sort by score in the given direction. Ties keep input order.
pub fn rank_records(records: &mut [ScoredRecord], direction: Direction) {
    // Scores are NaN-free (rejected at load), so partial_cmp is total here.
    let by_score = |a: &f64, b: &f64| a.partial_cmp(b).unwrap_or(Ordering::Equal);
    match direction {
        Direction::High => records.sort_by(|a, b| by_score(&b.score, &a.score)),
        Direction::Low => records.sort_by(|a, b| by_score(&a.score, &b.score)),
    }
}

/// Rank, deduplicate by sentence and tally labels.
///
/// The best-ranked occurrence of each sentence is the only one counted. Fails
/// with `EvalError::DivisionByZero` when nothing is left to count.
pub fn evaluate(
    labels: Vec<LabeledSentence>,
    scores: &[f64],
    direction: Direction,
) -> Result<EvalReport> {
    evaluate_with_label(labels, scores, direction, DEFAULT_POSITIVE_LABEL)
}

/// [`evaluate`] with a custom positive label.
pub fn evaluate_with_label(
    labels: Vec<LabeledSentence>,
    scores: &[f64],
    direction: Direction,
    positive_label: &str,
) -> Result<EvalReport> {
    let mut records = pair_records(labels, scores)?;
    let total = records.len();
    rank_records(&mut records, direction);

    let mut seen: HashSet<&str> = HashSet::with_capacity(total);
    let (true_positives, false_positives) = records
        .iter()
        .filter(|r| seen.insert(r.sentence.as_str()))
        .fold((0usize, 0usize), |(tp, fp), r| {
            if r.label == positive_label {
                (tp + 1, fp)
            } else {
                (tp, fp + 1)
            }
        });
    let matched = seen.len();
    let duplicates_dropped = total - matched;

    log::info!(
        "Ranked {} records ({}), kept {} unique sentences, dropped {} duplicates",
        total,
        direction,
        matched,
        duplicates_dropped
    );

    let precision = ratio(true_positives, true_positives + false_positives, "precision")?;
    let recall = ratio(true_positives, matched, "recall")?;

    Ok(EvalReport {
        matched,
        true_positives,
        false_positives,
        precision,
        recall,
        direction,
        duplicates_dropped,
    })
}

fn ratio(numerator: usize, denominator: usize, metric: &'static str) -> Result<f64> {
    if denominator == 0 {
        return Err(EvalError::DivisionByZero { metric });
    }
    Ok(numerator as f64 / denominator as f64)
}
