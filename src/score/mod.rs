mod mapper;
mod ranges;
mod track;

pub use mapper::{flatten_ranges, point_to_segment};
pub use ranges::{
    build_range_table, pair_predictions, prepare_range_table, read_predictions, Prediction,
    PredictionPair, ScoreRange,
};
pub use track::{score_bases, score_sequence, write_annotations, BaseAnnotation};
