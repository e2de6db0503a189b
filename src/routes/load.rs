use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::{debug, info};

use super::Record;
use crate::error::RouteError;

/// Read the token-pair dump at `path`.
///
/// Open/read failures are [`RouteError::InputNotFound`]; anything that is not a JSON
/// array of `{"minta": string, "mintb": string}` objects is [`RouteError::MalformedInput`].
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, RouteError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RouteError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened input");

    let records = parse_records(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            RouteError::InputNotFound {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            RouteError::MalformedInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    info!(path = %path.display(), records = records.len(), "loaded token pairs");
    Ok(records)
}

/// Parse a JSON array of token pairs from any reader.
pub fn parse_records<R: Read>(reader: R) -> serde_json::Result<Vec<Record>> {
    serde_json::from_reader(reader)
}
