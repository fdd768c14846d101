//! Evaluation pipeline: load labels and scores, rank, deduplicate, report.

pub mod input;
pub mod metrics;
pub mod report;

pub use input::{load_labels, load_labels_with_delimiter, load_scores, LabeledSentence};
pub use metrics::{
    evaluate, evaluate_with_label, pair_records, rank_records, Direction, EvalReport,
    ScoredRecord,
};
pub use report::ReportFormat;

use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Run the full pipeline over a label file and a score file.
///
/// `direction` is the raw command-line literal; it ranks descending only when
/// it equals the configured high literal.
pub fn run(labels_path: &Path, scores_path: &Path, direction: &str, config: &Config) -> Result<EvalReport> {
    let labels = load_labels_with_delimiter(labels_path, config.delimiter_byte()?)?;
    let scores = load_scores(scores_path)?;
    let direction = Direction::from_arg_with(direction, &config.evaluator.high_direction);
    evaluate_with_label(labels, &scores, direction, &config.evaluator.positive_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use std::fs;
    use tempfile::TempDir;

    fn inputs(dir: &TempDir, labels: &str, scores: &str) -> (std::path::PathBuf, std::path::PathBuf) {
        let labels_path = dir.path().join("labels.tsv");
        let scores_path = dir.path().join("scores.txt");
        fs::write(&labels_path, labels).unwrap();
        fs::write(&scores_path, scores).unwrap();
        (labels_path, scores_path)
    }

    #[test]
    fn test_run_scenario_a() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, scores) = inputs(&temp_dir, "1\ts1\tx\n0\ts2\ty\n", "0.9\n0.1\n");
        let report = run(&labels, &scores, "high", &Config::default()).unwrap();
        assert_eq!(report.to_string(), "2 1 1\nPrecision/Recall 0.5 0.5");
    }

    #[test]
    fn test_run_dedup_both_directions() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, scores) = inputs(&temp_dir, "1\ts1\t_\n0\ts1\t_\n", "0.2\n0.8\n");
        let config = Config::default();

        let high = run(&labels, &scores, "high", &config).unwrap();
        assert_eq!(high.to_string(), "1 0 1\nPrecision/Recall 0.0 0.0");

        let low = run(&labels, &scores, "low", &config).unwrap();
        assert_eq!(low.to_string(), "1 1 0\nPrecision/Recall 1.0 1.0");
    }

    #[test]
    fn test_run_blank_label_line_fails() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, scores) = inputs(&temp_dir, "1\ts1\tx\n\n0\ts2\ty\n", "0.9\n0.1\n");
        let err = run(&labels, &scores, "high", &Config::default()).unwrap_err();
        assert!(matches!(err, EvalError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_run_quoted_sentence_dedups_with_bare_form() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, scores) = inputs(
            &temp_dir,
            "1\t\"what is it\"\tx\n0\twhat is it\ty\n",
            "0.9\n0.1\n",
        );
        let report = run(&labels, &scores, "high", &Config::default()).unwrap();
        assert_eq!(report.to_string(), "1 1 0\nPrecision/Recall 1.0 1.0");
    }

    #[test]
    fn test_run_empty_files() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, scores) = inputs(&temp_dir, "", "");
        let err = run(&labels, &scores, "high", &Config::default()).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero { .. }));
    }

    #[test]
    fn test_run_misaligned_files() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, scores) = inputs(&temp_dir, "1\ts1\t_\n0\ts2\t_\n", "0.2\n");
        let err = run(&labels, &scores, "high", &Config::default()).unwrap_err();
        assert!(matches!(err, EvalError::Alignment { labels: 2, scores: 1 }));
    }

    #[test]
    fn test_run_missing_score_file() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, _) = inputs(&temp_dir, "1\ts1\t_\n", "0.2\n");
        let missing = temp_dir.path().join("nope.txt");
        let err = run(&labels, &missing, "high", &Config::default()).unwrap_err();
        assert!(matches!(err, EvalError::FileAccess { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_run_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, scores) = inputs(
            &temp_dir,
            "1\ta\t_\n0\tb\t_\n0\ta\t_\n1\tc\t_\n",
            "0.4\n0.4\n0.7\n0.1\n",
        );
        let config = Config::default();
        let first = run(&labels, &scores, "high", &config).unwrap().to_string();
        let second = run(&labels, &scores, "high", &config).unwrap().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_with_custom_config() {
        let temp_dir = TempDir::new().unwrap();
        let (labels, scores) = inputs(&temp_dir, "yes,s1,_\nno,s1,_\n", "0.2\n0.8\n");
        let config_path = temp_dir.path().join("evaluator.toml");
        fs::write(
            &config_path,
            "[evaluator]\npositive_label = \"yes\"\nhigh_direction = \"desc\"\ndelimiter = \",\"\n",
        )
        .unwrap();
        let config = Config::load(Some(&config_path)).unwrap();

        let report = run(&labels, &scores, "desc", &config).unwrap();
        assert_eq!(report.direction, Direction::High);
        assert_eq!((report.true_positives, report.false_positives), (0, 1));

        // "high" is no longer the descending literal under this config
        let report = run(&labels, &scores, "high", &config).unwrap();
        assert_eq!(report.direction, Direction::Low);
        assert_eq!((report.true_positives, report.false_positives), (1, 0));
    }
}
