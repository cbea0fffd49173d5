use std::{collections::HashSet, ops::Range};

use crate::error::{ExtractError, Result};

/// The gap symbol used by aligners to pad rows.
pub const GAP: u8 = b'-';

/// One row of a multiple sequence alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignedRecord {
    pub id: String,
    pub sequence: Vec<u8>,
}

impl AlignedRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// An ordered set of records that all share the same number of columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    records: Vec<AlignedRecord>,
    width: usize,
}

impl Alignment {
    /// Builds an alignment, rejecting duplicated identifiers and ragged rows.
    pub fn new(records: Vec<AlignedRecord>) -> Result<Self> {
        let width = records.first().map_or(0, |r| r.sequence.len());

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(ExtractError::Format(format!(
                    "duplicate sequence identifier {:?}",
                    record.id
                )));
            }
            if record.sequence.len() != width {
                return Err(ExtractError::Format(format!(
                    "sequence {:?} spans {} columns, expected {}",
                    record.id,
                    record.sequence.len(),
                    width
                )));
            }
        }

        Ok(Self { records, width })
    }

    /// Number of alignment columns.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AlignedRecord] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&AlignedRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Vertical slice over the half-open column range, keeping record order.
    ///
    /// Panics if `columns` is not within `0..=width`.
    pub fn slice(&self, columns: Range<usize>) -> Alignment {
        let records = self
            .records
            .iter()
            .map(|r| AlignedRecord::new(r.id.clone(), &r.sequence[columns.clone()]))
            .collect();
        Alignment {
            records,
            width: columns.len(),
        }
    }
}

/// Copies `sequence` without its gap symbols.
pub fn ungap(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().copied().filter(|&b| b != GAP).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let records = vec![
            AlignedRecord::new("a", "AC-GT"),
            AlignedRecord::new("b", "ACGT"),
        ];
        assert!(matches!(
            Alignment::new(records),
            Err(ExtractError::Format(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let records = vec![AlignedRecord::new("a", "AC"), AlignedRecord::new("a", "GT")];
        assert!(Alignment::new(records).is_err());
    }

    #[test]
    fn slice_keeps_order_and_width() {
        let aln = Alignment::new(vec![
            AlignedRecord::new("x", "AT-CG"),
            AlignedRecord::new("y", "-TCG-"),
        ])
        .unwrap();

        let sliced = aln.slice(1..4);
        assert_eq!(sliced.width(), 3);
        assert_eq!(sliced.ids().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(sliced.records()[0].sequence, b"T-C");
        assert_eq!(sliced.records()[1].sequence, b"TCG");
    }

    #[test]
    fn ungap_strips_only_dashes() {
        assert_eq!(ungap(b"-A-c.G--"), b"Ac.G".to_vec());
        assert!(ungap(b"----").is_empty());
    }
}
