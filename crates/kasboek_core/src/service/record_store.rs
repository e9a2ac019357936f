//! Ordered, persisted record list for one entity.
//!
//! # Responsibility
//! - Provide list/append/replace/remove over one entity's records.
//! - Persist the whole list through a key-value repository after each write.
//!
//! # Invariants
//! - Ids are unique within the store and never change once assigned.
//! - Insertion order is display order.
//! - Removing or replacing a missing id is a silent no-op (returns `false`).
//! - A failed persist leaves the in-memory list unchanged.

use crate::model::record::{Record, RecordId};
use crate::repo::kv_repo::{KeyValueRepository, RepoError, RepoResult};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// Store wrapper over one entity's persisted record list.
pub struct RecordStore<T, R> {
    store_name: String,
    repo: R,
    records: Vec<T>,
}

impl<T, R> RecordStore<T, R>
where
    T: Record + Serialize + DeserializeOwned,
    R: KeyValueRepository,
{
    /// Loads the store named `store_name`; a missing payload is an empty store.
    ///
    /// Records persisted without an id are assigned one on load.
    pub fn open(repo: R, store_name: impl Into<String>) -> RepoResult<Self> {
        let store_name = store_name.into();
        let mut records = match repo.load(&store_name)? {
            Some(payload) => {
                serde_json::from_str::<Vec<T>>(&payload).map_err(|err| RepoError::InvalidData {
                    store_name: store_name.clone(),
                    message: err.to_string(),
                })?
            }
            None => Vec::new(),
        };

        let mut missing_ids = 0usize;
        for record in records.iter_mut().filter(|record| record.id().is_none()) {
            record.assign_id(Uuid::new_v4());
            missing_ids += 1;
        }

        let store = Self {
            store_name,
            repo,
            records,
        };
        if missing_ids > 0 {
            warn!(
                "event=store_open module=store status=repaired store={} missing_ids={}",
                store.store_name, missing_ids
            );
            store.persist(&store.records)?;
        }
        debug!(
            "event=store_open module=store status=ok store={} count={}",
            store.store_name,
            store.records.len()
        );
        Ok(store)
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == Some(id))
    }

    /// Appends a record, assigning a fresh id when it has none.
    ///
    /// A provided id that already exists in the store is replaced by a fresh
    /// one so ids stay unique. Returns the id the record was stored under.
    pub fn append(&mut self, mut record: T) -> RepoResult<RecordId> {
        let id = match record.id() {
            Some(id) if self.get(id).is_none() => id,
            Some(_) => {
                warn!(
                    "event=store_append module=store status=reassigned store={} reason=duplicate_id",
                    self.store_name
                );
                Uuid::new_v4()
            }
            None => Uuid::new_v4(),
        };
        record.assign_id(id);

        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)?;

        info!(
            "event=store_append module=store status=ok store={} id={}",
            self.store_name, id
        );
        Ok(id)
    }

    /// Replaces the record with `id` wholesale. The stored id is kept.
    ///
    /// Returns `false` and changes nothing when no record matches.
    pub fn replace_by_id(&mut self, id: RecordId, mut record: T) -> RepoResult<bool> {
        let Some(index) = self.position(id) else {
            debug!(
                "event=store_replace module=store status=noop store={} id={}",
                self.store_name, id
            );
            return Ok(false);
        };
        record.assign_id(id);

        let mut next = self.records.clone();
        next[index] = record;
        self.commit(next)?;

        info!(
            "event=store_replace module=store status=ok store={} id={}",
            self.store_name, id
        );
        Ok(true)
    }

    /// Removes the record with `id`.
    ///
    /// Returns `false` and changes nothing when no record matches.
    pub fn remove_by_id(&mut self, id: RecordId) -> RepoResult<bool> {
        let Some(index) = self.position(id) else {
            debug!(
                "event=store_remove module=store status=noop store={} id={}",
                self.store_name, id
            );
            return Ok(false);
        };

        let mut next = self.records.clone();
        next.remove(index);
        self.commit(next)?;

        info!(
            "event=store_remove module=store status=ok store={} id={}",
            self.store_name, id
        );
        Ok(true)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.id() == Some(id))
    }

    fn commit(&mut self, next: Vec<T>) -> RepoResult<()> {
        self.persist(&next)?;
        self.records = next;
        Ok(())
    }

    fn persist(&self, records: &[T]) -> RepoResult<()> {
        let payload = serde_json::to_string(records).map_err(|err| RepoError::Encode {
            store_name: self.store_name.clone(),
            message: err.to_string(),
        })?;
        self.repo.save(&self.store_name, &payload)
    }
}
