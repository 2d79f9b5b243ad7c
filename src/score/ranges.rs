use crate::utils::{open_reader, Result};
use itertools::Itertools;
use serde::Deserialize;
use std::path::Path;

/// A model score for one window, as read from a prediction file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub seq_id: String,
    pub start: f64,
    pub end: f64,
    pub score: f64,
}

/// A prediction together with the window that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPair {
    pub current: Prediction,
    pub next: Prediction,
}

impl PredictionPair {
    /// True when the next window starts strictly inside the current one.
    pub fn overlaps(&self) -> bool {
        self.next.start > self.current.start && self.next.start < self.current.end
    }
}

/// Inclusive `[start, end]` span carrying a single score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRange {
    pub start: u64,
    pub end: u64,
    pub score: f64,
}

/// Reads a headerless `seq_id start end score` TSV.
pub fn read_predictions(path: &Path) -> Result<Vec<Prediction>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(open_reader(path)?);
    reader
        .deserialize()
        .map(|result| result.map_err(|e| format!("{}: {}", path.display(), e)))
        .collect()
}

/// Pairs every prediction with its successor; the last row has no partner.
///
/// Pairs whose windows do not overlap are counted and reported but kept.
pub fn pair_predictions(predictions: &[Prediction]) -> Vec<PredictionPair> {
    let pairs = predictions
        .iter()
        .cloned()
        .tuple_windows()
        .map(|(current, next)| PredictionPair { current, next })
        .collect_vec();

    let non_overlapping = pairs.iter().filter(|pair| !pair.overlaps()).count();
    if non_overlapping > 0 {
        log::warn!(
            "{} of {} consecutive prediction windows do not overlap",
            non_overlapping,
            pairs.len()
        );
    }
    pairs
}

fn to_coord(value: f64) -> Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
        return Err(format!("Invalid prediction coordinate: {}", value));
    }
    Ok(value as i64)
}

/// Builds the gapless range table covering `[0, seq_length)`.
///
/// Rows are, in order: the unscored prefix, the part of the first window
/// covered by no other window, one row per overlap holding the mean of the
/// two scores, the tail of the last window, and the unscored suffix.
/// Empty rows are dropped.
pub fn build_range_table(pairs: &[PredictionPair], seq_length: u64) -> Result<Vec<ScoreRange>> {
    let (first, last) = match (pairs.first(), pairs.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("At least two overlapping predictions are required".to_string()),
    };

    let mut rows: Vec<(i64, i64, f64)> = Vec::with_capacity(pairs.len() + 4);
    let first_start = to_coord(first.current.start)?;
    let first_shifted_start = to_coord(first.next.start)?;
    rows.push((0, first_start - 1, 0.0));
    rows.push((first_start, first_shifted_start - 1, first.current.score));

    for pair in pairs {
        let start = to_coord(pair.next.start)?;
        let end = to_coord(pair.current.end)? - 1;
        let score = (pair.current.score + pair.next.score) / 2.0;
        rows.push((start, end, score));
    }

    let last_end = to_coord(last.current.end)?;
    let last_shifted_end = to_coord(last.next.end)?;
    rows.push((last_end, last_shifted_end - 1, last.next.score));
    rows.push((last_shifted_end, seq_length as i64 - 1, 0.0));

    Ok(rows
        .into_iter()
        .filter(|(start, end, _)| start <= end)
        .map(|(start, end, score)| ScoreRange {
            start: start as u64,
            end: end as u64,
            score,
        })
        .collect())
}

/// Reads the predictions of one sequence and builds its range table.
pub fn prepare_range_table(path: &Path, seq_id: &str, seq_length: u64) -> Result<Vec<ScoreRange>> {
    let predictions = read_predictions(path)?
        .into_iter()
        .filter(|p| p.seq_id == seq_id)
        .sorted_by(|a, b| a.start.total_cmp(&b.start))
        .collect_vec();
    log::debug!("{}: {} predictions", seq_id, predictions.len());

    if predictions.len() < 2 {
        return Err(format!(
            "Sequence {} needs at least two overlapping predictions, found {}",
            seq_id,
            predictions.len()
        ));
    }

    let pairs = pair_predictions(&predictions);
    build_range_table(&pairs, seq_length)
}
