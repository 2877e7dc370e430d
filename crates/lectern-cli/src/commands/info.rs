use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lectern_core::session::DocumentSession;

use crate::summary::print_document_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input PDF file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let session = DocumentSession::open_path(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    print_document_summary(&session);
    Ok(())
}
