use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::{info, LevelFilter};

mod cli;

use cli::Cli;
use rrn_extract::{clustal, extract, output, reference, PositionMap};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();
    let level = if args.verbose() {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let (infile, range) = args.get_input();
    let (outdir, label) = args.get_output();
    let now = Local::now().naive_local();

    // Load the alignment and settle on a reference before touching the output directory.
    let msa = clustal::read_path(&infile)
        .with_context(|| format!("could not read {} as a CLUSTAL alignment", infile.display()))?;
    info!(
        "format of {} is fine ({} records, {} columns)",
        infile.display(),
        msa.len(),
        msa.width()
    );

    let map_reference = reference::select_reference(&msa)?;
    info!(
        "found standards {:?}, using {}",
        reference::present_references(&msa),
        map_reference
    );

    let map = PositionMap::build(&msa, map_reference)?;
    let extraction = extract(&msa, &map, range)
        .with_context(|| format!("could not excise {range} from {map_reference}"))?;

    let outfile = output::output_path(&outdir, label.as_deref(), now);
    if let Some(dir) = outfile.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create {}", dir.display()))?;
            info!("creating {}", dir.display());
        }
    }

    println!("writing to {}", outfile.display());
    output::write_fasta_path(&outfile, &extraction)?;
    Ok(())
}
