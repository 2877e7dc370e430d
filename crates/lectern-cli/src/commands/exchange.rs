use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lectern_core::config::LecternConfig;
use lectern_core::consts::REQUEST_FAILED_NOTICE;
use lectern_core::exchange::{
    run_exchange, ExchangeKind, ExchangeState, ExchangeUpdate, HttpTransport,
};
use lectern_core::session::DocumentSession;
use tracing::debug;

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Text to send
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read the text to send from a plain-text file ("-" for stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Take the text from a PDF
    #[arg(long)]
    pub pdf: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExchangeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// With --pdf, only send this page (1-based)
    #[arg(short, long, requires = "pdf")]
    pub page: Option<u32>,

    /// Endpoint URL, overriding the config
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Connect and per-read idle timeout in seconds, overriding the config
    #[arg(long)]
    pub idle_timeout: Option<u64>,
}

pub fn run(args: &ExchangeArgs, kind: ExchangeKind, config_path: Option<&Path>) -> Result<()> {
    let mut config = LecternConfig::load_or_default(config_path).context("Failed to load config")?;
    if let Some(ref url) = args.endpoint {
        config.endpoint.url = url.clone();
    }
    if let Some(secs) = args.idle_timeout {
        config.endpoint.idle_timeout_secs = secs;
    }

    let text = read_source(args)?;
    let mut state = ExchangeState::new(kind);
    let Some(ticket) = state.trigger(&text) else {
        bail!("{}", state.result());
    };

    debug!(kind = %kind, url = %config.endpoint.url, chars = text.chars().count(), "Sending text");
    let transport = HttpTransport::new(&config.endpoint);
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(match kind {
        ExchangeKind::Translate => "Translating...",
        ExchangeKind::Analyze => "Analyzing...",
    });
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut out = std::io::stdout().lock();
    let mut write_error = None;
    let outcome = run_exchange(&transport, &ticket, |event| {
        state.apply(&event);
        if let ExchangeUpdate::Chunk(chunk) = &event.update {
            if !pb.is_finished() {
                pb.finish_and_clear();
            }
            if write_error.is_none() {
                if let Err(e) = out.write_all(chunk.as_bytes()).and_then(|()| out.flush()) {
                    write_error = Some(e);
                }
            }
        }
    });
    pb.finish_and_clear();

    if let Err(e) = outcome {
        eprintln!();
        eprintln!("{REQUEST_FAILED_NOTICE}");
        return Err(e).with_context(|| format!("{kind} request to {} failed", transport.url()));
    }
    if let Some(e) = write_error {
        return Err(e).context("Failed to write response");
    }
    if !state.result().ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

fn read_source(args: &ExchangeArgs) -> Result<String> {
    let source = &args.source;
    if let Some(ref text) = source.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = source.file {
        if path.as_os_str() == "-" {
            return std::io::read_to_string(std::io::stdin()).context("Failed to read stdin");
        }
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    if let Some(ref path) = source.pdf {
        let session = DocumentSession::open_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        return match args.page {
            Some(page) => session
                .page_text(page)
                .map(str::to_string)
                .with_context(|| format!("Page {page} out of range")),
            None => Ok(session.extracted_text().to_string()),
        };
    }
    bail!("No input given, use --text, --file or --pdf")
}
