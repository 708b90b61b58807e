//! Knowledge Base module - the catalog of named fact sources.
//!
//! Records are the properties agents carry. Input axes bind to records by ID.

mod record;

pub use record::*;

use curve_rules::{RecordCatalog, RecordId};
use serde::{Deserialize, Serialize};

/// Ordered collection of records.
///
/// Insertion order is kept for display; lookups are by ID or name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KnowledgeBase {
    records: Vec<Record>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Returns its ID.
    pub fn add_record(&mut self, record: Record) -> RecordId {
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Remove a record, preserving the order of the rest.
    pub fn remove_record(&mut self, id: RecordId) -> Option<Record> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Find a record by its readable name.
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record names in insertion order.
    pub fn record_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordCatalog for KnowledgeBase {
    fn record_default(&self, record: RecordId) -> Option<f64> {
        self.get(record).map(|r| r.default_value)
    }

    fn record_defaults(&self) -> Vec<(RecordId, f64)> {
        self.records.iter().map(|r| (r.id, r.default_value)).collect()
    }
}
