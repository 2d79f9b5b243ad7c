use crate::utils::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Opens a buffered writer at `path`, or stdout when no path is given.
pub fn create_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Derives `<stem>_win_<W>_shift_<S>.bed` next to the FASTA file, where the
/// stem is the file name up to its first dot.
pub fn default_bed_path(fasta_path: &Path, window_size: i64, shift_size: i64) -> PathBuf {
    let file_name = fasta_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let output_name = format!("{}_win_{}_shift_{}.bed", stem, window_size, shift_size);
    match fasta_path.parent() {
        Some(parent) => parent.join(output_name),
        None => PathBuf::from(output_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bed_path_drops_everything_after_first_dot() {
        let path = default_bed_path(Path::new("data/SOX9_en13.seq.fa.gz"), 16, 8);
        assert_eq!(path, PathBuf::from("data/SOX9_en13_win_16_shift_8.bed"));
    }

    #[test]
    fn bed_path_keeps_dotted_directories() {
        let path = default_bed_path(Path::new("run.v2/input.fasta"), 100, 50);
        assert_eq!(path, PathBuf::from("run.v2/input_win_100_shift_50.bed"));
    }

    #[test]
    fn bed_path_without_directory() {
        let path = default_bed_path(Path::new("input.fasta"), 20, 10);
        assert_eq!(path, PathBuf::from("input_win_20_shift_10.bed"));
    }
}
