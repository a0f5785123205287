//! In-memory evidence store.
//!
//! Evidence is transient by design: dropping the store drops every record.
//! There is no persistence layer behind this map and there must not be one —
//! the product demos against fabricated data only.

use std::sync::RwLock;

use rustc_hash::FxHashMap;
use uuid::Uuid;

use attest_core::StoreError;

use crate::record::{EvidenceRecord, RecordKind};

/// Thread-safe in-memory map of evidence records keyed by UUID.
#[derive(Default)]
pub struct RecordStore {
    records: RwLock<FxHashMap<Uuid, EvidenceRecord>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning its id.
    pub fn insert(&self, record: EvidenceRecord) -> Result<Uuid, StoreError> {
        let id = record.id;
        let mut map = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        map.insert(id, record);
        Ok(id)
    }

    /// Fetch a record by id.
    pub fn get(&self, id: Uuid) -> Result<EvidenceRecord, StoreError> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        map.get(&id).cloned().ok_or(StoreError::RecordNotFound {
            id: id.to_string(),
        })
    }

    /// Replace the payload of an existing record, bumping its update time.
    pub fn update_payload(
        &self,
        id: Uuid,
        payload: serde_json::Value,
    ) -> Result<(), StoreError> {
        let mut map = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        match map.get_mut(&id) {
            Some(record) => {
                record.touch(payload);
                Ok(())
            }
            None => Err(StoreError::RecordNotFound {
                id: id.to_string(),
            }),
        }
    }

    /// Remove a record, returning it.
    pub fn remove(&self, id: Uuid) -> Result<EvidenceRecord, StoreError> {
        let mut map = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        map.remove(&id).ok_or(StoreError::RecordNotFound {
            id: id.to_string(),
        })
    }

    /// List records, optionally filtered by kind and/or platform id.
    /// Results are sorted by creation time, oldest first.
    pub fn list(
        &self,
        kind: Option<RecordKind>,
        platform: Option<&str>,
    ) -> Result<Vec<EvidenceRecord>, StoreError> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut out: Vec<EvidenceRecord> = map
            .values()
            .filter(|r| kind.map_or(true, |k| r.kind == k))
            .filter(|r| platform.map_or(true, |p| r.platform == p))
            .cloned()
            .collect();
        out.sort_by_key(|r| (r.created_at, r.id));
        Ok(out)
    }

    /// Total number of records.
    pub fn count(&self) -> Result<usize, StoreError> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.len())
    }

    /// Drop all records.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut map = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        map.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use attest_core::Severity;

    use super::*;

    fn record(platform: &str, kind: RecordKind) -> EvidenceRecord {
        EvidenceRecord::new(kind, platform, Severity::Low, serde_json::json!({}))
    }

    #[test]
    fn test_insert_get_remove() {
        let store = RecordStore::new();
        let id = store.insert(record("scap", RecordKind::ScanResult)).unwrap();
        assert_eq!(store.get(id).unwrap().platform, "scap");
        assert_eq!(store.count().unwrap(), 1);

        store.remove(id).unwrap();
        assert!(matches!(
            store.get(id),
            Err(StoreError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_list_filters() {
        let store = RecordStore::new();
        store.insert(record("scap", RecordKind::ScanResult)).unwrap();
        store.insert(record("stig", RecordKind::Assessment)).unwrap();
        store.insert(record("stig", RecordKind::ScanResult)).unwrap();

        assert_eq!(store.list(None, None).unwrap().len(), 3);
        assert_eq!(store.list(None, Some("stig")).unwrap().len(), 2);
        assert_eq!(
            store
                .list(Some(RecordKind::Assessment), Some("stig"))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_update_payload_unknown_id() {
        let store = RecordStore::new();
        let result = store.update_payload(Uuid::new_v4(), serde_json::json!({}));
        assert!(matches!(result, Err(StoreError::RecordNotFound { .. })));
    }

    #[test]
    fn test_clear() {
        let store = RecordStore::new();
        store.insert(record("hyland", RecordKind::Document)).unwrap();
        store.clear().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }
}
