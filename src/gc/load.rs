use crate::gc::error::{GcError, GcResult};
use bio::io::fasta;
use std::fmt::Display;
use std::io;
use std::path::Path;

/// The first record of a FASTA file
#[derive(Debug, Clone)]
pub struct LoadedSequence {
    pub id: String,
    pub seq: Vec<u8>,
    /// Records seen in the file (only the first is used)
    pub n_records: usize,
}

impl LoadedSequence {
    /// Whether the file held records beyond the one that was used
    pub fn has_extra_records(&self) -> bool {
        self.n_records > 1
    }
}

/// Load the first record's sequence from a FASTA file.
///
/// Any further records are ignored; a warning is logged when present.
/// A missing file and a file with no records are both errors.
pub fn load_first_record(path: &Path) -> GcResult<LoadedSequence> {
    if !path.exists() {
        return Err(GcError::NoSequenceFile(path.to_path_buf()));
    }
    let reader = fasta::Reader::from_file(path).map_err(|e| parse_error(path, e))?;

    let mut records = reader.records();
    let first = match records.next() {
        Some(rec) => rec.map_err(|e| parse_error(path, e))?,
        None => return Err(GcError::EmptySequenceFile(path.to_path_buf())),
    };

    // Count the rest without keeping them around. Ignored records are not
    // validated: the first unreadable one still counts and ends the count.
    let mut n_records = 1;
    for rec in records {
        n_records += 1;
        if let Err(e) = rec {
            log::debug!("Stopped counting records in {}: {}", path.display(), e);
            break;
        }
    }

    let loaded = LoadedSequence {
        id: first.id().to_string(),
        seq: first.seq().to_vec(),
        n_records,
    };
    if loaded.has_extra_records() {
        log::warn!(
            "{} holds more than one record; using only the first ({})",
            path.display(),
            loaded.id
        );
    }
    Ok(loaded)
}

fn parse_error<E: Display>(path: &Path, e: E) -> GcError {
    GcError::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("parsing {}: {}", path.display(), e),
    ))
}
