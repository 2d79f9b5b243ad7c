use crate::utils::SeqRecord;
use serde::Serialize;

pub const DEFAULT_BOUNDARY: i64 = 50;

/// One BED row: a window over a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub seq_id: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentParams {
    pub window_size: i64,
    pub shift_size: i64,
    pub boundary: i64,
}

impl SegmentParams {
    pub fn new(window_size: i64, shift_size: i64) -> Self {
        Self {
            window_size,
            shift_size,
            boundary: DEFAULT_BOUNDARY,
        }
    }

    pub fn with_boundary(self, boundary: i64) -> Self {
        Self { boundary, ..self }
    }
}

/// Strides a window across a sequence of length `seq_len`.
///
/// Starts run from `boundary` in steps of `shift_size` while below
/// `seq_len`; a window is kept only if it ends at or before
/// `seq_len - boundary`. A non-positive shift yields no windows.
pub fn segment_sequence(seq_id: &str, seq_len: i64, params: &SegmentParams) -> Vec<Segment> {
    let SegmentParams {
        window_size,
        shift_size,
        boundary,
    } = *params;

    if shift_size <= 0 {
        log::warn!(
            "Shift size {} is not positive; no segments for {}",
            shift_size,
            seq_id
        );
        return Vec::new();
    }

    let last_end = seq_len.saturating_sub(boundary);
    let mut segments = Vec::new();
    let mut start = boundary;
    while start < seq_len {
        if let Some(end) = start.checked_add(window_size) {
            if end <= last_end {
                segments.push(Segment {
                    seq_id: seq_id.to_string(),
                    start,
                    end,
                });
            }
        }
        start = match start.checked_add(shift_size) {
            Some(next) => next,
            None => break,
        };
    }
    segments
}

/// Sequence lengths keyed by id, in order of first appearance.
///
/// A repeated id keeps its first position but takes the length of its last
/// record.
fn sequence_lengths(records: &[SeqRecord]) -> Vec<(&str, i64)> {
    let mut lengths: Vec<(&str, i64)> = Vec::with_capacity(records.len());
    for record in records {
        let seq_len = record.seq.len() as i64;
        match lengths.iter_mut().find(|(id, _)| *id == record.id) {
            Some(entry) => {
                log::warn!("Duplicate sequence id {}; using its last record", record.id);
                entry.1 = seq_len;
            }
            None => lengths.push((record.id.as_str(), seq_len)),
        }
    }
    lengths
}

/// Segments every sequence, concatenated in input order.
pub fn segment_records(records: &[SeqRecord], params: &SegmentParams) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (seq_id, seq_len) in sequence_lengths(records) {
        let record_segments = segment_sequence(seq_id, seq_len, params);
        log::debug!(
            "{}: length={}, segments={}",
            seq_id,
            seq_len,
            record_segments.len()
        );
        segments.extend(record_segments);
    }
    segments
}
