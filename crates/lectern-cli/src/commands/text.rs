use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use lectern_core::session::DocumentSession;

#[derive(Args)]
pub struct TextArgs {
    /// Input PDF file
    pub file: PathBuf,

    /// Only print this page (1-based)
    #[arg(short, long)]
    pub page: Option<u32>,
}

pub fn run(args: &TextArgs) -> Result<()> {
    let session = DocumentSession::open_path(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let text = match args.page {
        Some(page) => match session.page_text(page) {
            Some(text) => format!("{text}\n"),
            None => bail!(
                "Page {page} out of range, {} has {} pages",
                session.filename(),
                session.page_count()
            ),
        },
        None => session.extracted_text().to_string(),
    };

    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
