use crate::{
    alignment::Alignment,
    error::{ExtractError, Result},
};

/// SILVA (v132) identifiers of the E. coli rrn copies used as the coordinate
/// system, in order of preference.
pub const STANDARD_REFERENCES: [&str; 2] =
    ["CP016007.2543965.2545520", "CP016007.3589827.3591382"];

/// Picks the preferred standard reference present in `alignment`.
pub fn select_reference(alignment: &Alignment) -> Result<&'static str> {
    STANDARD_REFERENCES
        .iter()
        .copied()
        .find(|id| alignment.contains(id))
        .ok_or_else(|| ExtractError::NoStandardReference {
            candidates: STANDARD_REFERENCES.iter().map(|s| s.to_string()).collect(),
        })
}

/// All standard references present in `alignment`.
pub fn present_references(alignment: &Alignment) -> Vec<&'static str> {
    STANDARD_REFERENCES
        .iter()
        .copied()
        .filter(|id| alignment.contains(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AlignedRecord;

    fn aln(ids: &[&str]) -> Alignment {
        Alignment::new(ids.iter().map(|id| AlignedRecord::new(*id, "AC-T")).collect()).unwrap()
    }

    #[test]
    fn favors_first_standard() {
        let a = aln(&[STANDARD_REFERENCES[1], "other", STANDARD_REFERENCES[0]]);
        assert_eq!(select_reference(&a).unwrap(), STANDARD_REFERENCES[0]);
        assert_eq!(present_references(&a).len(), 2);
    }

    #[test]
    fn falls_back_to_second_standard() {
        let a = aln(&["other", STANDARD_REFERENCES[1]]);
        assert_eq!(select_reference(&a).unwrap(), STANDARD_REFERENCES[1]);
    }

    #[test]
    fn fails_without_standard() {
        let a = aln(&["seq1", "seq2"]);
        assert!(matches!(
            select_reference(&a),
            Err(ExtractError::NoStandardReference { .. })
        ));
    }
}
