use super::{flatten_ranges, point_to_segment, prepare_range_table, ScoreRange};
use crate::utils::Result;
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// Score and label of a single base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseAnnotation {
    pub pos: usize,
    pub base: char,
    pub score: f64,
    pub label: String,
}

/// Assigns every base the score of the range that contains it.
pub fn score_bases(seq: &str, ranges: &[ScoreRange]) -> Result<Vec<BaseAnnotation>> {
    let boundaries = flatten_ranges(ranges);
    let positions = (0..seq.len() as u64).collect_vec();
    let indices = point_to_segment(&boundaries, &positions);

    seq.chars()
        .zip(indices)
        .enumerate()
        .map(|(pos, (base, index))| {
            let range = ranges
                .get(index)
                .ok_or_else(|| format!("Position {} is not covered by any scored range", pos))?;
            Ok(BaseAnnotation {
                pos,
                base,
                score: range.score,
                label: String::new(),
            })
        })
        .collect()
}

/// Builds the per-base score table of `seq_id` from a prediction file.
pub fn score_sequence(
    seq_id: &str,
    seq_dict: &HashMap<String, String>,
    prediction_path: &Path,
) -> Result<Vec<BaseAnnotation>> {
    let seq = seq_dict
        .get(seq_id)
        .ok_or_else(|| format!("Sequence {} not found", seq_id))?;
    let ranges = prepare_range_table(prediction_path, seq_id, seq.len() as u64)?;
    log::debug!("{}: {} scored ranges", seq_id, ranges.len());
    score_bases(seq, &ranges)
}

/// Writes annotations as a TSV with a `pos base score label` header.
pub fn write_annotations<W: Write>(writer: W, annotations: &[BaseAnnotation]) -> Result<()> {
    let mut tsv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    for annotation in annotations {
        tsv_writer.serialize(annotation).map_err(|e| e.to_string())?;
    }
    tsv_writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}
