use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use lectern_core::consts::DOI_NOT_FOUND;
use lectern_core::digest::try_digest_file;
use lectern_core::extract::{extract_text, find_identifier};

#[derive(Args)]
pub struct DoiArgs {
    /// Input PDF file
    pub file: PathBuf,

    /// Exit with an error when no DOI is found
    #[arg(long)]
    pub strict: bool,

    /// Also print the SHA-256 digest of the file
    #[arg(long)]
    pub digest: bool,
}

pub fn run(args: &DoiArgs) -> Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let text = extract_text(&bytes);

    match find_identifier(&text) {
        Some(doi) => println!("{doi}"),
        None if args.strict => bail!("{DOI_NOT_FOUND} in {}", args.file.display()),
        None => println!("{DOI_NOT_FOUND}"),
    }
    if args.digest {
        match try_digest_file(&args.file) {
            Some(hex) => println!("{hex}"),
            None => eprintln!("SHA-256 unavailable for {}", args.file.display()),
        }
    }
    Ok(())
}
