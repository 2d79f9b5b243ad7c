use crate::cli::HeatmapArgs;
use crate::plot::{plot_matrix, read_matrix};
use crate::utils::Result;
use pipeplot::generate_image;

pub fn heatmap(args: HeatmapArgs) -> Result<()> {
    let matrix = read_matrix(&args.matrix_path)?;
    log::info!(
        "Matrix {}: {} rows",
        args.matrix_path.display(),
        matrix.values.len()
    );

    let mut pipe_plot = plot_matrix(&matrix)?;
    if let Some(font_family) = args.font_family {
        pipe_plot.set_font_family(&font_family);
    }

    generate_image(&pipe_plot, &args.output_path)?;
    log::info!("Heatmap written to {}", args.output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn heatmap_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let matrix_path = dir.path().join("matrix.tsv");
        let output_path = dir.path().join("matrix.svg");
        let mut matrix = std::fs::File::create(&matrix_path).unwrap();
        write!(matrix, "TF1_a\t0.1\t0.9\nTF2_a\t1\t0\n").unwrap();

        heatmap(HeatmapArgs {
            matrix_path,
            output_path: output_path.clone(),
            font_family: None,
        })
        .unwrap();

        let svg = std::fs::read_to_string(output_path).unwrap();
        assert!(svg.contains(">TF1</text>"));
        assert!(svg.contains(">TF2</text>"));
    }
}
