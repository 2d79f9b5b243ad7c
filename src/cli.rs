use crate::label::{parse_binding_site, BindingSite};
use crate::segment::DEFAULT_BOUNDARY;
use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name = "segtrack",
          version = &**FULL_VERSION,
          about = "Sliding-window segments and per-base prediction score tracks",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(global = true)]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Write a BED file of sliding windows over every FASTA sequence")]
    Segment(SegmentArgs),
    #[clap(about = "Reconstruct a per-base score table from overlapping window predictions")]
    Score(ScoreArgs),
    #[clap(about = "Plot the score track and binding sites of one sequence")]
    Plot(PlotArgs),
    #[clap(about = "Plot a labeled matrix with rows tinted by label prefix")]
    Heatmap(HeatmapArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("segment")))]
#[command(arg_required_else_help(true))]
pub struct SegmentArgs {
    #[clap(help = "Path to the input FASTA file")]
    #[clap(value_name = "FASTA_FILE")]
    #[arg(value_parser = check_file_exists)]
    pub fasta_path: PathBuf,

    #[clap(help = "Length of every window")]
    #[clap(value_name = "WINDOW_SIZE")]
    #[arg(allow_negative_numbers = true)]
    pub window_size: i64,

    #[clap(help = "Distance between consecutive window starts")]
    #[clap(value_name = "SHIFT_SIZE")]
    #[arg(allow_negative_numbers = true)]
    #[arg(value_parser = nonzero_shift)]
    pub shift_size: i64,

    #[clap(help_heading("Advanced"))]
    #[clap(short = 'b')]
    #[clap(long = "boundary")]
    #[clap(value_name = "BOUNDARY")]
    #[clap(help = "Bases excluded at both ends of every sequence")]
    #[clap(default_value_t = DEFAULT_BOUNDARY)]
    pub boundary: i64,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(value_name = "BED")]
    #[clap(help = "Output BED path [default: <FASTA stem>_win_<W>_shift_<S>.bed]")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("score")))]
#[command(arg_required_else_help(true))]
pub struct ScoreArgs {
    #[clap(flatten)]
    pub input: TrackInputArgs,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(value_name = "TSV")]
    #[clap(help = "Output TSV path [default: stdout]")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("plot")))]
#[command(arg_required_else_help(true))]
pub struct PlotArgs {
    #[clap(flatten)]
    pub input: TrackInputArgs,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path (.svg, .png, or .pdf)")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: PathBuf,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "font-family")]
    #[clap(value_name = "FONT_FAMILY")]
    #[clap(help = "Font family used for labels")]
    pub font_family: Option<String>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("heatmap")))]
#[command(arg_required_else_help(true))]
pub struct HeatmapArgs {
    #[clap(required = true)]
    #[clap(short = 'm')]
    #[clap(long = "matrix")]
    #[clap(help = "Headerless TSV: row label followed by values in [0, 1]")]
    #[clap(value_name = "MATRIX")]
    #[arg(value_parser = check_file_exists)]
    pub matrix_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path (.svg, .png, or .pdf)")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: PathBuf,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "font-family")]
    #[clap(value_name = "FONT_FAMILY")]
    #[clap(help = "Font family used for labels")]
    pub font_family: Option<String>,
}

#[derive(Parser, Debug)]
pub struct TrackInputArgs {
    #[clap(required = true)]
    #[clap(short = 'f')]
    #[clap(long = "fasta")]
    #[clap(help = "Path to the FASTA file holding the sequence")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub fasta_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "predictions")]
    #[clap(help = "Headerless TSV of window predictions: seq_id, start, end, score")]
    #[clap(value_name = "PREDICTIONS")]
    #[arg(value_parser = check_file_exists)]
    pub predictions_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 's')]
    #[clap(long = "seq-id")]
    #[clap(help = "ID of the sequence to score")]
    #[clap(value_name = "SEQ_ID")]
    pub seq_id: String,

    #[clap(short = 'B')]
    #[clap(long = "binding-site")]
    #[clap(value_name = "NAME=MOTIF")]
    #[clap(help = "Binding site to label; repeat to add more, later sites take precedence")]
    #[arg(action = ArgAction::Append, value_parser = parse_binding_site)]
    pub binding_sites: Vec<BindingSite>,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}

fn check_image_path(s: &str) -> Result<PathBuf> {
    let path = check_prefix_path(s)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") | Some("png") | Some("pdf") => Ok(path),
        _ => Err("Image must have an extension of .svg, .png, or .pdf".to_string()),
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn nonzero_shift(s: &str) -> Result<i64> {
    let shift: i64 = s
        .parse()
        .map_err(|_| format!("`{}` is not an integer", s))?;
    if shift == 0 {
        Err("SHIFT_SIZE must not be zero".to_string())
    } else {
        Ok(shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_positionals_parse() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["segtrack", "segment", path, "100", "50"]).unwrap();
        match cli.command {
            Command::Segment(args) => {
                assert_eq!(args.window_size, 100);
                assert_eq!(args.shift_size, 50);
                assert_eq!(args.boundary, DEFAULT_BOUNDARY);
                assert!(args.output_path.is_none());
            }
            _ => panic!("expected segment"),
        }
    }

    #[test]
    fn segment_rejects_non_integer_sizes() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(Cli::try_parse_from(["segtrack", "segment", path, "1.5", "50"]).is_err());
        assert!(Cli::try_parse_from(["segtrack", "segment", path, "100", "abc"]).is_err());
        assert!(Cli::try_parse_from(["segtrack", "segment", path, "100", "0"]).is_err());
    }

    #[test]
    fn segment_rejects_wrong_arity() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(Cli::try_parse_from(["segtrack", "segment", path, "100"]).is_err());
        assert!(Cli::try_parse_from(["segtrack", "segment", path, "100", "50", "7"]).is_err());
    }

    #[test]
    fn binding_sites_keep_command_line_order() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "segtrack", "score", "-f", path, "-p", path, "-s", "seq1", "-B", "b=ACGT", "-B",
            "a=TT",
        ])
        .unwrap();
        match cli.command {
            Command::Score(args) => {
                let names: Vec<&str> = args
                    .input
                    .binding_sites
                    .iter()
                    .map(|site| site.name.as_str())
                    .collect();
                assert_eq!(names, vec!["b", "a"]);
            }
            _ => panic!("expected score"),
        }
    }

    #[test]
    fn image_extension_is_checked() {
        assert!(check_image_path("plot.svg").is_ok());
        assert!(check_image_path("plot.png").is_ok());
        assert!(check_image_path("plot.jpg").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
