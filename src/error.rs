use std::io;

/// Errors raised while loading an alignment or excising a region from it.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The input does not follow the CLUSTAL alignment layout.
    #[error("malformed CLUSTAL alignment: {0}")]
    Format(String),

    /// The requested reference identifier is not a record of the alignment.
    #[error("reference sequence {0:?} is not present in the alignment")]
    ReferenceNotFound(String),

    /// None of the accepted E. coli reference identifiers is in the alignment.
    #[error("the alignment contains none of the reference sequences needed for coordinates ({})", .candidates.join(", "))]
    NoStandardReference { candidates: Vec<String> },

    /// A reference coordinate has no alignment column.
    #[error("coordinate {coordinate} is outside the reference sequence (ungapped length {length})")]
    CoordinateOutOfRange { coordinate: usize, length: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
