//! Excise a reference-coordinate region from every record of an alignment.
//!
//! Coordinates follow the UGENE convention: the first residue of the reference
//! is 1, gaps are not counted in the reference but are counted as alignment
//! columns, and both ends are inclusive.
//!
//! ```text
//! seq3  A T C - - C G T A
//!       1 2 3 . . 4 5 6 7
//! seq4  - - - C G - - T A
//! ```
//!
//! With `seq3` as reference, the range `2,5` covers columns 2 through 7 and
//! yields `TCCG` for `seq3` and `CG` for `seq4` once gaps are removed.

use std::{fmt, num::ParseIntError, ops::Range, str::FromStr};

use crate::{
    alignment::{ungap, Alignment},
    error::{ExtractError, Result},
    mapper::PositionMap,
};

/// An inclusive range of ungapped reference positions, always `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateRange {
    start: usize,
    end: usize,
}

impl CoordinateRange {
    /// Out-of-order bounds are swapped rather than rejected.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

impl fmt::Display for CoordinateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start, self.end)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseRangeError {
    #[error("expected two coordinates separated by a comma, e.g. 5,13")]
    Shape,
    #[error("invalid coordinate {value:?}: {source}")]
    Coordinate {
        value: String,
        source: ParseIntError,
    },
}

impl FromStr for CoordinateRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (a, b) = s.split_once(',').ok_or(ParseRangeError::Shape)?;
        let parse = |v: &str| {
            let v = v.trim();
            v.parse::<usize>().map_err(|source| ParseRangeError::Coordinate {
                value: v.to_string(),
                source,
            })
        };
        Ok(Self::new(parse(a)?, parse(b)?))
    }
}

/// One excised, gap-free record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub id: String,
    pub sequence: Vec<u8>,
}

/// The excised records, in alignment order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    fragments: Vec<Fragment>,
}

impl Extraction {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.fragments
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.sequence.as_slice())
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }
}

impl IntoIterator for Extraction {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

/// Half-open column range covering `range` on the reference.
///
/// The range starts at the column of `range.start()` and ends just past the
/// column of `range.end()`.
pub fn column_range(map: &PositionMap, range: CoordinateRange) -> Result<Range<usize>> {
    let resolve = |coordinate: usize| {
        map.column_of(coordinate)
            .ok_or(ExtractError::CoordinateOutOfRange {
                coordinate,
                length: map.reference_length(),
            })
    };
    let first = resolve(range.start())?;
    let last = resolve(range.end())?;
    Ok(first..last + 1)
}

/// Slices every record to the columns spanned by `range` and strips gaps.
///
/// Records that are all gaps inside the slice yield an empty fragment.
pub fn extract(
    alignment: &Alignment,
    map: &PositionMap,
    range: CoordinateRange,
) -> Result<Extraction> {
    let columns = column_range(map, range)?;
    log::debug!(
        "reference {} positions {} map to columns {}..{}",
        map.reference_id(),
        range,
        columns.start + 1,
        columns.end
    );

    let fragments = alignment
        .slice(columns)
        .records()
        .iter()
        .map(|r| Fragment {
            id: r.id.clone(),
            sequence: ungap(&r.sequence),
        })
        .collect();
    Ok(Extraction { fragments })
}
