use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use noodles::fasta;

use crate::{error::Result, extractor::Extraction};

/// Residues per sequence line in written records.
pub const LINE_WIDTH: usize = 60;

/// Where a run started at `now` writes its records.
///
/// `<dir>/extracted_16s_regions_<date>/extracted_<label>_<date>_<HHMM>.fna`, or
/// `extracted_16s_<date>_<HHMM>.fna` when no label is given.
pub fn output_path(dir: &Path, label: Option<&str>, now: NaiveDateTime) -> PathBuf {
    let runtime = now.format("%Y-%m-%d_%H%M");
    let folder = dir.join(format!("extracted_16s_regions_{}", now.format("%Y-%m-%d")));
    let name = match label {
        Some(label) => format!("extracted_{label}_{runtime}.fna"),
        None => format!("extracted_16s_{runtime}.fna"),
    };
    folder.join(name)
}

/// Writes each fragment as a FASTA record wrapped at [`LINE_WIDTH`].
///
/// Empty fragments are written as a header line with no sequence lines.
pub fn write_fasta<W: Write>(writer: W, extraction: &Extraction) -> Result<()> {
    let mut writer = fasta::writer::Builder::default()
        .set_line_base_count(LINE_WIDTH)
        .build_with_writer(writer);

    for fragment in extraction.iter() {
        let definition = fasta::record::Definition::new(fragment.id.clone(), None);
        let record = fasta::Record::new(definition, fragment.sequence.clone().into());
        writer.write_record(&record)?;
    }
    Ok(())
}

/// Creates `path` and writes `extraction` to it.
pub fn write_fasta_path<P: AsRef<Path>>(path: P, extraction: &Extraction) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_fasta(&mut file, extraction)?;
    file.flush()?;
    Ok(())
}
