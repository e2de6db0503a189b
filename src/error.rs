//! Error types for loading token pairs and emitting the route preview.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    /// The input file could not be opened or read.
    #[error("cannot read input {path:?}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not a JSON array of `{minta, mintb}` string objects.
    #[error("malformed input {path:?}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the preview failed.
    #[error("serializing preview")]
    Output(#[from] serde_json::Error),

    /// Writing or flushing the serialized preview failed.
    #[error("writing preview")]
    Write(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_name_the_path() {
        let err = RouteError::InputNotFound {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot read input \"missing.json\"");
        assert_eq!(err.source().unwrap().to_string(), "no such file");

        let parse_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = RouteError::MalformedInput {
            path: PathBuf::from("pairs.json"),
            source: parse_err,
        };
        assert_eq!(err.to_string(), "malformed input \"pairs.json\"");
        assert!(err.source().unwrap().to_string().contains("line 1"));
    }

    #[test]
    fn test_cause_printed_once() {
        let err = anyhow::Error::new(RouteError::InputNotFound {
            path: PathBuf::from("data/token_pairs.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        });
        let rendered = format!("{:#}", err);
        assert_eq!(rendered.matches("no such file").count(), 1);
    }
}
