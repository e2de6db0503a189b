// src/routes/table.rs

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use tracing::debug;

use super::{DirectRoutes, Record};

/// Source token → direct destinations, keyed in first-seen order.
///
/// Entries live in a `Vec` so iteration, serialization and [`preview`](Self::preview)
/// follow insertion order; `index` maps a source id to its slot in `entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(String, DirectRoutes)>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `records` in order into a fresh table.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut table = Self::new();
        let mut count = 0usize;
        for record in records {
            table.push(record);
            count += 1;
        }
        debug!(records = count, sources = table.len(), "built route table");
        table
    }

    /// Append `record.dest_id` under `record.source_id`, creating the key on first sight.
    /// Duplicate pairs are kept.
    pub fn push(&mut self, record: Record) {
        let Record { source_id, dest_id } = record;
        let slot = match self.index.get(&source_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(source_id.clone(), slot);
                self.entries.push((source_id, DirectRoutes::default()));
                slot
            }
        };
        self.entries[slot].1.direct_routes.push(dest_id);
    }

    /// First `n` entries (or all of them, if fewer) as a new table.
    pub fn preview(&self, n: usize) -> RouteTable {
        self.entries.iter().take(n).cloned().fold(
            RouteTable::new(),
            |mut acc, (source_id, routes)| {
                acc.index.insert(source_id.clone(), acc.entries.len());
                acc.entries.push((source_id, routes));
                acc
            },
        )
    }

    pub fn get(&self, source_id: &str) -> Option<&DirectRoutes> {
        self.index.get(source_id).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectRoutes)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<Record> for RouteTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl Serialize for RouteTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (source_id, routes) in &self.entries {
            map.serialize_entry(source_id, routes)?;
        }
        map.end()
    }
}
