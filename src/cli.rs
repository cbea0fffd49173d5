use std::path::PathBuf;

use clap::Parser;
use rrn_extract::CoordinateRange;

const LONG_ABOUT: &str = "\
Extract primer amplicons or variable regions from a single CLUSTAL alignment of
16S rRNA (rrn) gene sequences. Coordinates refer to the E. coli reference record
of the alignment: CP016007.2543965.2545520 is used when present, otherwise
CP016007.3589827.3591382 (SILVA v132).

Coordinates are as used by UGENE. The first residue of the reference is 1, gaps
are not counted in the reference but are counted as alignment columns, and both
ends are inclusive.

    seq3 A T C - - C G T A
         1 2 3 . . 4 5 6 7
    seq4 - - - C G - - T A
    MSA  1 2 3 4 5 6 7 8 9

With seq3 as reference, `--excise 2,5` takes MSA columns 2 to 7 and writes

    >seq3
    TCCG
    >seq4
    CG";

#[derive(Parser)]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// a CLUSTAL-formatted multiple sequence alignment
    #[arg(short, long, value_name = "FILE", required = true)]
    infile: PathBuf,

    /// label used in the output file name (default is "16s")
    #[arg(short, long, value_name = "NAME")]
    outfile: Option<String>,

    /// start and end coordinates on the E. coli reference, separated by a comma;
    /// the order of the two values does not matter
    #[arg(short, long, value_name = "START,END", required = true)]
    excise: CoordinateRange,

    /// directory receiving the dated output folder
    #[arg(short = 'd', long, value_name = "DIR", default_value = "processed_data")]
    outdir: PathBuf,

    /// spell out what is happening
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn get_input(&self) -> (PathBuf, CoordinateRange) {
        (self.infile.clone(), self.excise)
    }

    pub fn get_output(&self) -> (PathBuf, Option<String>) {
        (self.outdir.clone(), self.outfile.clone())
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["rrn-extract", "-i", "in.aln", "-e", "13,5", "-v"]).unwrap();
        let (infile, range) = cli.get_input();
        assert_eq!(infile, PathBuf::from("in.aln"));
        assert_eq!(range, CoordinateRange::new(5, 13));
        assert_eq!(cli.get_output(), (PathBuf::from("processed_data"), None));
        assert!(cli.verbose());
    }

    #[test]
    fn requires_excise() {
        assert!(Cli::try_parse_from(["rrn-extract", "-i", "in.aln"]).is_err());
        assert!(Cli::try_parse_from(["rrn-extract", "-i", "in.aln", "-e", "5"]).is_err());
    }
}
