//! Reference numbering over alignment columns.
//!
//! A reference row such as `AT-CG` numbers its residues `1, 2, -, 3, 4`.
//! [`PositionMap`] stores that numbering per column and the inverse lookup
//! from an ungapped position back to its column, so both directions are O(1).

use crate::{
    alignment::{Alignment, GAP},
    error::{ExtractError, Result},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionMap {
    reference_id: String,
    // column -> 1-based ungapped reference position
    positions: Vec<Option<usize>>,
    // (position - 1) -> column
    columns: Vec<usize>,
}

impl PositionMap {
    /// Numbers the non-gap symbols of `reference_id` from 1 upward, column by column.
    pub fn build(alignment: &Alignment, reference_id: &str) -> Result<Self> {
        let reference = alignment
            .get(reference_id)
            .ok_or_else(|| ExtractError::ReferenceNotFound(reference_id.to_string()))?;

        let mut counter = 0;
        let mut positions = Vec::with_capacity(reference.sequence.len());
        let mut columns = Vec::new();
        for (column, &symbol) in reference.sequence.iter().enumerate() {
            if symbol == GAP {
                positions.push(None);
            } else {
                counter += 1;
                positions.push(Some(counter));
                columns.push(column);
            }
        }

        let map = Self {
            reference_id: reference_id.to_string(),
            positions,
            columns,
        };
        debug_assert!(map.is_strictly_increasing());
        log::debug!(
            "reference {} spans {} residues over {} columns",
            map.reference_id,
            map.reference_length(),
            map.width()
        );
        Ok(map)
    }

    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }

    /// Number of alignment columns covered.
    pub fn width(&self) -> usize {
        self.positions.len()
    }

    /// Ungapped length of the reference.
    pub fn reference_length(&self) -> usize {
        self.columns.len()
    }

    /// Reference position at `column`, `None` for gap columns or past the end.
    pub fn position_at(&self, column: usize) -> Option<usize> {
        self.positions.get(column).copied().flatten()
    }

    /// Column holding reference position `position`; `None` for 0 or positions
    /// beyond the reference.
    pub fn column_of(&self, position: usize) -> Option<usize> {
        position
            .checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .copied()
    }

    /// Iterates `(column, position)` over the non-gap columns.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(column, p)| p.map(|p| (column, p)))
    }

    /// Positions run 1..=N without holes as the column index grows, and the
    /// inverse table agrees with the forward one.
    pub fn is_strictly_increasing(&self) -> bool {
        let mut expected = 1;
        for (column, position) in self.iter() {
            if position != expected || self.columns.get(position - 1) != Some(&column) {
                return false;
            }
            expected += 1;
        }
        expected - 1 == self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::alignment::AlignedRecord;

    fn single(reference: &str) -> Alignment {
        Alignment::new(vec![
            AlignedRecord::new("ref", reference),
            AlignedRecord::new("other", "-".repeat(reference.len())),
        ])
        .unwrap()
    }

    #[test]
    fn numbers_residues_skipping_gaps() {
        let map = PositionMap::build(&single("AT-CG"), "ref").unwrap();
        let positions: Vec<_> = (0..map.width()).map(|c| map.position_at(c)).collect();
        assert_eq!(positions, vec![Some(1), Some(2), None, Some(3), Some(4)]);
        assert_eq!(map.reference_length(), 4);
        assert_eq!(map.column_of(3), Some(3));
        assert_eq!(map.column_of(0), None);
        assert_eq!(map.column_of(5), None);
        assert_eq!(map.position_at(99), None);
    }

    #[test]
    fn leading_gaps_do_not_count() {
        let map = PositionMap::build(&single("---CG--TA"), "ref").unwrap();
        assert_eq!(map.column_of(1), Some(3));
        assert_eq!(map.column_of(4), Some(8));
    }

    #[test]
    fn all_gap_reference_has_no_positions() {
        let map = PositionMap::build(&single("-----"), "ref").unwrap();
        assert_eq!(map.reference_length(), 0);
        assert_eq!(map.width(), 5);
        assert_eq!(map.column_of(1), None);
        assert!(map.is_strictly_increasing());
    }

    #[test]
    fn missing_reference_is_an_error() {
        let err = PositionMap::build(&single("ACGT"), "nope").unwrap_err();
        assert!(matches!(err, ExtractError::ReferenceNotFound(id) if id == "nope"));
    }

    proptest! {
        #[test]
        fn positions_are_one_to_n(reference in "[ACGT-]{0,200}") {
            let map = PositionMap::build(&single(&reference), "ref").unwrap();
            let residues = reference.bytes().filter(|&b| b != GAP).count();

            prop_assert!(map.is_strictly_increasing());
            prop_assert_eq!(map.reference_length(), residues);
            prop_assert_eq!(map.width(), reference.len());
            let numbered: Vec<usize> = map.iter().map(|(_, p)| p).collect();
            prop_assert_eq!(numbered, (1..=residues).collect::<Vec<_>>());
            for (column, position) in map.iter() {
                prop_assert_eq!(map.column_of(position), Some(column));
            }
        }
    }
}
