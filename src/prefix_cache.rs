use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use log::trace;

use crate::{
    generated::prefix_data::{self, PrefixFile},
    prefix_table::PrefixTable,
};

/// Which compiled resource a table comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Geocoding,
    Carrier,
    Timezones,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableKey {
    pub kind: TableKind,
    pub language: String,
    pub country_code: u16,
}

impl TableKey {
    pub fn new(kind: TableKind, language: &str, country_code: u16) -> Self {
        Self { kind, language: language.to_owned(), country_code }
    }

    /// Timezones are one table for every calling code and language.
    pub fn timezones() -> Self {
        Self { kind: TableKind::Timezones, language: String::new(), country_code: 0 }
    }
}

pub static PREFIX_TABLES: LazyLock<PrefixTableCache> =
    LazyLock::new(|| PrefixTableCache::with_capacity(32));

pub struct PrefixTableCache {
    cache: DashMap<TableKey, Arc<PrefixTable>>,
}

impl PrefixTableCache {
    #[cfg(test)]
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the table for `key`, building it on first use.
    /// `None` means no resource file exists for the key.
    pub fn get_table(&self, key: &TableKey) -> Option<Arc<PrefixTable>> {
        if let Some(table) = self.cache.get(key) {
            return Some(table.value().clone());
        }
        let entries = compiled_entries(key)?;
        let entry = self.cache.entry(key.clone()).or_insert_with(|| {
            trace!("Building prefix table for {:?}", key);
            Arc::new(PrefixTable::new(entries))
        });
        Some(entry.value().clone())
    }
}

fn find_file(
    files: &'static [PrefixFile],
    language: &str,
    country_code: u16,
) -> Option<&'static [(u64, &'static str)]> {
    files
        .iter()
        .find(|file| file.language == language && file.country_code == country_code)
        .map(|file| file.entries)
}

fn compiled_entries(key: &TableKey) -> Option<&'static [(u64, &'static str)]> {
    match key.kind {
        TableKind::Geocoding => find_file(prefix_data::GEOCODING, &key.language, key.country_code),
        TableKind::Carrier => find_file(prefix_data::CARRIER, &key.language, key.country_code),
        TableKind::Timezones => Some(prefix_data::TIMEZONES),
    }
}
