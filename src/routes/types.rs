// src/routes/types.rs

use serde::{Deserialize, Serialize};

/// One token pair from the input dump.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct Record {
    #[serde(rename = "minta")]
    pub source_id: String,
    #[serde(rename = "mintb")]
    pub dest_id: String,
}

impl Record {
    pub fn new(source_id: impl Into<String>, dest_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            dest_id: dest_id.into(),
        }
    }
}

/// Destinations reachable in one hop, in input order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Default)]
pub struct DirectRoutes {
    #[serde(rename = "directRoutes")]
    pub direct_routes: Vec<String>,
}
