//! Catalog module - the full, id-indexed set of records under a root

use crate::record::PatternRecord;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The in-memory collection of every record under a catalog root.
///
/// Built once per command invocation and read-only for the duration of the
/// run. Records are kept in path order so that every report is
/// deterministic for an unchanged corpus. The first record to claim an id
/// owns it in the index; later claimants are recorded as duplicates for the
/// schema phase to report.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<PatternRecord>,
    by_id: BTreeMap<String, usize>,
    duplicates: Vec<(String, PathBuf)>,
}

impl Catalog {
    /// Build a catalog from loaded records, sorting by path
    pub fn from_records(mut records: Vec<PatternRecord>) -> Self {
        records.sort_by(|a, b| a.path.cmp(&b.path));

        let mut by_id = BTreeMap::new();
        let mut duplicates = Vec::new();
        for (index, record) in records.iter().enumerate() {
            if let Some(id) = &record.id {
                if by_id.contains_key(id) {
                    duplicates.push((id.clone(), record.path.clone()));
                } else {
                    by_id.insert(id.clone(), index);
                }
            }
        }

        Self {
            records,
            by_id,
            duplicates,
        }
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&PatternRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// All records, in path order
    pub fn records(&self) -> &[PatternRecord] {
        &self.records
    }

    /// Ids claimed by more than one record, with the later path for each
    /// extra claimant
    pub fn duplicate_ids(&self) -> &[(String, PathBuf)] {
        &self.duplicates
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in path order
    pub fn iter(&self) -> impl Iterator<Item = &PatternRecord> {
        self.records.iter()
    }
}
