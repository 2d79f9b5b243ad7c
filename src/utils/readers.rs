use super::Result;
use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read as ioRead};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct SeqRecord {
    pub id: String,
    pub seq: String,
}

/// Opens a plain or gzip-compressed text file.
pub fn open_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Reads every record of a FASTA file, preserving file order.
pub fn read_fasta(path: &Path) -> Result<Vec<SeqRecord>> {
    let reader = fasta::Reader::new(open_reader(path)?);
    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Malformed FASTA {}: {}", path.display(), e))?;
        record
            .check()
            .map_err(|e| format!("Invalid record {}: {}", record.id(), e))?;
        records.push(SeqRecord {
            id: record.id().to_string(),
            seq: String::from_utf8_lossy(record.seq()).into_owned(),
        });
    }
    log::debug!("Read {} sequences from {}", records.len(), path.display());
    Ok(records)
}

/// Maps sequence identifiers to their bases.
pub fn read_sequence_dict(path: &Path) -> Result<HashMap<String, String>> {
    Ok(read_fasta(path)?
        .into_iter()
        .map(|record| (record.id, record.seq))
        .collect())
}
