use std::io;

use anyhow::bail;

use tracekit_cli::{Config, normalize};

fn main() -> anyhow::Result<()> {
    tracekit_observability::init();

    let config = Config::from_env();
    tracing::debug!(strict = config.strict, "starting product normalization");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = normalize(stdin.lock(), stdout.lock())?;

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "product normalization finished"
    );

    if config.strict && summary.rejected > 0 {
        bail!("{} product payload(s) rejected", summary.rejected);
    }
    Ok(())
}
