//! Raw tabular records as delivered by a data source.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// One row: field name to raw JSON value.
pub type Record = Map<String, Value>;

/// A table of records. Serializes as a plain JSON array of objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Union of the field names present across all records.
    pub fn columns(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|r| r.keys().map(String::as_str))
            .collect()
    }

    /// Field names present in every record. Empty for an empty set.
    pub fn common_columns(&self) -> BTreeSet<&str> {
        let mut records = self.records.iter();
        let Some(first) = records.next() else {
            return BTreeSet::new();
        };
        let mut common: BTreeSet<&str> = first.keys().map(String::as_str).collect();
        for record in records {
            common.retain(|name| record.contains_key(*name));
        }
        common
    }

    /// Distinct text values of `column`, in first-seen order. Non-text values are skipped.
    pub fn distinct_text(&self, column: &str) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for value in self.records.iter().filter_map(|r| r.get(column)) {
            if let Some(s) = value.as_str() {
                if seen.insert(s) {
                    out.push(s);
                }
            }
        }
        out
    }

    /// Drop rows where `column` is missing, null or blank. Returns how many were dropped.
    pub fn drop_unset(&mut self, column: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| match r.get(column) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        });
        before - self.records.len()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

/// Everything fetched for one work unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitData {
    /// Present only for the regular season.
    pub standings: Option<RecordSet>,
    pub teams: RecordSet,
    pub players: RecordSet,
}
