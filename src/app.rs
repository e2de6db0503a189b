// src/app.rs

use anyhow::{Context, Result};
use std::{io::Write, path::Path};
use tracing::info;

use crate::{config::PREVIEW_LEN, error::RouteError, routes, RouteTable};

/// Load `input`, regroup it by source token and write the first [`PREVIEW_LEN`]
/// entries to `out` as pretty JSON. Returns the preview that was written.
///
/// Nothing is written unless loading and building both succeed.
pub fn run<W: Write>(input: &Path, mut out: W) -> Result<RouteTable> {
    let records = routes::load_records(input)
        .with_context(|| format!("loading token pairs from {}", input.display()))?;
    let total = records.len();

    let table = RouteTable::build(records);
    info!(records = total, sources = table.len(), "grouped direct routes");

    let preview = table.preview(PREVIEW_LEN);
    serde_json::to_writer_pretty(&mut out, &preview).map_err(|e| {
        if e.is_io() {
            RouteError::Write(e.into())
        } else {
            RouteError::Output(e)
        }
    })?;
    out.write_all(b"\n")
        .and_then(|_| out.flush())
        .map_err(RouteError::from)?;

    info!(shown = preview.len(), "printed preview");
    Ok(preview)
}
