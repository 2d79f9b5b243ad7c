use super::color::pick_color;
use crate::utils::{open_reader, Result};
use itertools::Itertools;
use pipeplot::{FontConfig, Legend, Pipe, PipePlot, Seg, Shape};
use std::path::Path;

const ROW_HEIGHT: u32 = 2;
const LEGEND_HEIGHT: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Category of a row label: the text before its first underscore.
pub fn label_prefix(label: &str) -> &str {
    label.split('_').next().unwrap_or(label)
}

/// Reads a headerless TSV whose first column is the row label.
pub fn read_matrix(path: &Path) -> Result<LabeledMatrix> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(open_reader(path)?);

    let mut matrix = LabeledMatrix {
        labels: Vec::new(),
        values: Vec::new(),
    };
    for (line_number, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("{}: {}", path.display(), e))?;
        let mut fields = record.iter();
        let label = fields
            .next()
            .ok_or_else(|| format!("Empty row at line {}", line_number + 1))?;
        let row = fields
            .map(|field| {
                field.trim().parse::<f64>().map_err(|e| {
                    format!("Line {}: invalid value '{}': {}", line_number + 1, field, e)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        matrix.labels.push(label.to_string());
        matrix.values.push(row);
    }
    Ok(matrix)
}

/// Draws one pipe per matrix row, tinted by the row's label prefix, with
/// each cell's opacity set by its value clamped to `[0, 1]`.
pub fn plot_matrix(matrix: &LabeledMatrix) -> Result<PipePlot> {
    if matrix.labels.len() != matrix.values.len() {
        return Err(format!(
            "Matrix has {} labels but {} rows",
            matrix.labels.len(),
            matrix.values.len()
        ));
    }
    if let Some(first_row) = matrix.values.first() {
        if let Some(row) = matrix.values.iter().position(|r| r.len() != first_row.len()) {
            return Err(format!(
                "Row {} has {} values, expected {}",
                matrix.labels[row],
                matrix.values[row].len(),
                first_row.len()
            ));
        }
    }

    let categories = matrix
        .labels
        .iter()
        .map(|label| label_prefix(label))
        .unique()
        .collect_vec();
    let color_of = |label: &str| {
        let index = categories
            .iter()
            .position(|c| *c == label_prefix(label))
            .unwrap_or(0);
        pick_color(index).to_string()
    };

    let mut pipes = Vec::new();
    for (row_index, (label, row)) in matrix.labels.iter().zip(&matrix.values).enumerate() {
        let color = color_of(label);
        let segs = row
            .iter()
            .map(|&value| Seg {
                width: 1,
                color: color.clone(),
                shape: Shape::Rect,
                opacity: if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) },
            })
            .collect_vec();
        pipes.push(Pipe {
            xpos: 0,
            ypos: row_index as u32 * ROW_HEIGHT,
            height: ROW_HEIGHT,
            segs,
            outline: false,
        });
    }

    let labels = categories
        .iter()
        .enumerate()
        .map(|(index, category)| (category.to_string(), pick_color(index).to_string()))
        .collect_vec();

    Ok(PipePlot {
        pipes,
        legend: Legend {
            xpos: 0,
            ypos: matrix.values.len() as u32 * ROW_HEIGHT + 2,
            height: LEGEND_HEIGHT,
            labels,
        },
        font: FontConfig::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn matrix(rows: Vec<(&str, Vec<f64>)>) -> LabeledMatrix {
        LabeledMatrix {
            labels: rows.iter().map(|(l, _)| l.to_string()).collect(),
            values: rows.into_iter().map(|(_, v)| v).collect(),
        }
    }

    #[test]
    fn prefix_is_text_before_first_underscore() {
        assert_eq!(label_prefix("SOX9_rep1_a"), "SOX9");
        assert_eq!(label_prefix("plain"), "plain");
        assert_eq!(label_prefix("_x"), "");
    }

    #[test]
    fn rows_share_color_by_prefix() {
        let m = matrix(vec![
            ("TF1_a", vec![0.0, 0.5]),
            ("TF2_a", vec![1.0, 0.2]),
            ("TF1_b", vec![0.3, 0.4]),
        ]);
        let plot = plot_matrix(&m).unwrap();
        assert_eq!(plot.pipes.len(), 3);
        assert_eq!(plot.pipes[0].segs[0].color, plot.pipes[2].segs[0].color);
        assert_ne!(plot.pipes[0].segs[0].color, plot.pipes[1].segs[0].color);
        let names = plot.legend.labels.iter().map(|(l, _)| l.as_str()).collect_vec();
        assert_eq!(names, vec!["TF1", "TF2"]);
    }

    #[test]
    fn cell_opacity_is_clamped_value() {
        let m = matrix(vec![("a", vec![-0.5, 0.25, 3.0, f64::NAN])]);
        let plot = plot_matrix(&m).unwrap();
        let opacities = plot.pipes[0].segs.iter().map(|s| s.opacity).collect_vec();
        assert_eq!(opacities, vec![0.0, 0.25, 1.0, 0.0]);
    }

    #[test]
    fn ragged_matrix_is_an_error() {
        let m = matrix(vec![("a", vec![0.1, 0.2]), ("b", vec![0.3])]);
        assert_eq!(
            plot_matrix(&m).unwrap_err(),
            "Row b has 1 values, expected 2"
        );
    }

    #[test]
    fn read_matrix_from_tsv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "TF1_a\t0.1\t0.9\nTF2_b\t1\t0\n").unwrap();
        let m = read_matrix(file.path()).unwrap();
        assert_eq!(m.labels, vec!["TF1_a", "TF2_b"]);
        assert_eq!(m.values, vec![vec![0.1, 0.9], vec![1.0, 0.0]]);
    }

    #[test]
    fn read_matrix_rejects_non_numeric_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TF1_a\t0.1\tx").unwrap();
        assert!(read_matrix(file.path()).is_err());
    }
}
