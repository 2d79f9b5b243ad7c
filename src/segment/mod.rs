mod bed_writer;
mod windows;

pub use bed_writer::write_bed;
pub use windows::{segment_records, segment_sequence, Segment, SegmentParams, DEFAULT_BOUNDARY};
