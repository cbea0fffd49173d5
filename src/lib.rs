//! Excise E. coli 16S rRNA regions from a CLUSTAL multiple sequence alignment.
//!
//! Coordinates are given on a standard E. coli reference record of the
//! alignment, translated to alignment columns, and the resulting column slice
//! is written for every record with gaps removed.

pub mod alignment;
pub mod clustal;
pub mod error;
pub mod extractor;
pub mod mapper;
pub mod output;
pub mod reference;

pub use alignment::{AlignedRecord, Alignment};
pub use error::{ExtractError, Result};
pub use extractor::{extract, CoordinateRange, Extraction, Fragment};
pub use mapper::PositionMap;
