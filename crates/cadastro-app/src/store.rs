use tracing::warn;

use cadastro_core::models::customer::{CustomerId, CustomerRecord};

/// Client-side copy of the remote collection, in service order with
/// confirmed creates appended. Ids are unique within the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<CustomerRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence with a fresh listing. No merge: the
    /// listing is authoritative. Repeated ids keep their first occurrence.
    pub fn replace(&mut self, records: Vec<CustomerRecord>) {
        let mut unique: Vec<CustomerRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.id == record.id) {
                warn!(id = %record.id, "listing repeats an id; keeping the first");
                continue;
            }
            unique.push(record);
        }
        self.records = unique;
    }

    /// Add a confirmed record at the end. A record whose id is already held
    /// replaces the old one in place.
    pub fn append(&mut self, record: CustomerRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
            warn!(id = %record.id, "created record already present; replacing");
            *existing = record;
            return;
        }
        self.records.push(record);
    }

    /// Drop the record with `id`. Returns whether one was removed; an unknown
    /// id is not an error.
    pub fn remove(&mut self, id: &CustomerId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        self.records.len() != before
    }

    pub fn get(&self, id: &CustomerId) -> Option<&CustomerRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &CustomerId) -> bool {
        self.get(id).is_some()
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
