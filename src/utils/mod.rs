mod io_utils;
mod readers;
mod util;

pub use io_utils::{create_writer, default_bed_path};
pub use readers::{open_reader, read_fasta, read_sequence_dict, SeqRecord};
pub use util::{handle_error_and_exit, Result};
