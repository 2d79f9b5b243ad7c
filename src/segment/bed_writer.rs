use super::Segment;
use crate::utils::Result;
use std::io::Write;

/// Writes segments as a headerless, tab-separated BED file.
pub fn write_bed<W: Write>(writer: W, segments: &[Segment]) -> Result<()> {
    let mut bed_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    for segment in segments {
        bed_writer.serialize(segment).map_err(|e| e.to_string())?;
    }
    bed_writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}
