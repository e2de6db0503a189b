use anyhow::Result;
use mintroutes::{app, config::INPUT_PATH};
use std::{io, path::Path};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout is reserved for the preview) ──
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!("startup");

    // ─── 2) load, group, print the sample ────────────────────────────
    let stdout = io::stdout();
    app::run(Path::new(INPUT_PATH), stdout.lock())?;

    info!("all done");
    Ok(())
}
