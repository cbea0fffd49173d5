//! Reader for CLUSTAL-formatted multiple sequence alignments.
//!
//! The layout accepted here is the one written by ClustalW and friends:
//!
//! ```text
//! CLUSTAL W (1.83) multiple sequence alignment
//!
//! seq1      ATC--CGTA 7
//! seq2      ---CG--TA 4
//!              *   **
//!
//! seq1      GG 9
//! seq2      G- 5
//! ```
//!
//! The first block fixes which records exist and their order; every later block
//! must repeat them. Trailing residue counts are optional and only checked for
//! being numbers. Lines starting with whitespace are conservation lines and are
//! skipped.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    alignment::{AlignedRecord, Alignment},
    error::{ExtractError, Result},
};

/// Words accepted at the start of the first line.
const HEADERS: [&str; 5] = ["CLUSTAL", "MUSCLE", "PROBCONS", "MSAPROBS", "Kalign"];

pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Alignment> {
    let file = File::open(path)?;
    read(BufReader::new(file))
}

pub fn parse(text: &str) -> Result<Alignment> {
    read(text.as_bytes())
}

pub fn read<R: BufRead>(reader: R) -> Result<Alignment> {
    let mut parser = Parser::default();
    let mut last = 0;
    for (i, line) in reader.lines().enumerate() {
        last = i + 1;
        parser.push_line(last, &line?)?;
    }
    parser.finish(last + 1)
}

fn malformed(line: usize, message: impl AsRef<str>) -> ExtractError {
    ExtractError::Format(format!("line {line}: {}", message.as_ref()))
}

#[derive(Default)]
struct Parser {
    header_seen: bool,
    ids: Vec<String>,
    rows: Vec<Vec<u8>>,
    // number of completed blocks
    blocks: usize,
    // records seen in the current block
    cursor: usize,
}

impl Parser {
    fn push_line(&mut self, lineno: usize, line: &str) -> Result<()> {
        if !self.header_seen {
            if line.trim().is_empty() {
                return Ok(());
            }
            if !HEADERS.iter().any(|h| line.starts_with(h)) {
                return Err(malformed(
                    lineno,
                    format!("expected a CLUSTAL header, found {:?}", line),
                ));
            }
            self.header_seen = true;
            return Ok(());
        }

        if line.trim().is_empty() {
            return self.close_block(lineno);
        }
        if line.starts_with(char::is_whitespace) {
            return Ok(());
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let (id, symbols) = match fields.as_slice() {
            [id, symbols] => (*id, *symbols),
            [id, symbols, count] => {
                if count.parse::<usize>().is_err() {
                    return Err(malformed(
                        lineno,
                        format!("residue count {:?} for {} is not a number", count, id),
                    ));
                }
                (*id, *symbols)
            }
            [id] => {
                return Err(malformed(lineno, format!("record {} has no symbols", id)));
            }
            _ => {
                return Err(malformed(
                    lineno,
                    format!("expected `id symbols [count]`, found {:?}", line),
                ));
            }
        };

        if self.blocks == 0 {
            if self.ids.iter().any(|known| known == id) {
                return Err(malformed(
                    lineno,
                    format!("record {} appears twice in the same block", id),
                ));
            }
            self.ids.push(id.to_string());
            self.rows.push(symbols.as_bytes().to_vec());
        } else {
            match self.ids.get(self.cursor) {
                Some(expected) if expected == id => {
                    self.rows[self.cursor].extend_from_slice(symbols.as_bytes());
                }
                Some(expected) => {
                    return Err(malformed(
                        lineno,
                        format!("expected record {}, found {}", expected, id),
                    ));
                }
                None => {
                    return Err(malformed(
                        lineno,
                        format!("record {} is not part of the first block", id),
                    ));
                }
            }
        }
        self.cursor += 1;
        Ok(())
    }

    fn close_block(&mut self, lineno: usize) -> Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        if self.cursor != self.ids.len() {
            return Err(malformed(
                lineno,
                format!(
                    "block lists {} of {} records",
                    self.cursor,
                    self.ids.len()
                ),
            ));
        }
        self.blocks += 1;
        self.cursor = 0;
        Ok(())
    }

    fn finish(mut self, lineno: usize) -> Result<Alignment> {
        if !self.header_seen {
            return Err(malformed(lineno, "missing CLUSTAL header"));
        }
        self.close_block(lineno)?;
        if self.ids.is_empty() {
            return Err(malformed(lineno, "no sequence blocks after the header"));
        }

        let records = self
            .ids
            .into_iter()
            .zip(self.rows)
            .map(|(id, sequence)| AlignedRecord::new(id, sequence))
            .collect();
        Alignment::new(records)
    }
}
