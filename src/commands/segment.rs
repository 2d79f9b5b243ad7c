use crate::cli::SegmentArgs;
use crate::segment::{segment_records, write_bed, SegmentParams};
use crate::utils::{create_writer, default_bed_path, read_fasta, Result};

pub fn segment(args: SegmentArgs) -> Result<()> {
    let params = SegmentParams::new(args.window_size, args.shift_size).with_boundary(args.boundary);
    let output_path = args
        .output_path
        .unwrap_or_else(|| default_bed_path(&args.fasta_path, args.window_size, args.shift_size));

    log::info!("FASTA file: {}", args.fasta_path.display());
    log::info!(
        "Window size: {}, shift size: {}, boundary: {}",
        params.window_size,
        params.shift_size,
        params.boundary
    );
    log::info!("Output file: {}", output_path.display());

    let records = read_fasta(&args.fasta_path)?;
    let segments = segment_records(&records, &params);
    write_bed(create_writer(Some(output_path.as_path()))?, &segments)?;

    log::info!(
        "Wrote {} segments for {} sequences",
        segments.len(),
        records.len()
    );
    Ok(())
}
