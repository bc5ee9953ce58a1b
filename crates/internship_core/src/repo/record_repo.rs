//! Singleton record repository (session marker, company profile).

use crate::store::{
    read_record, remove_record, write_record, KeyValueStore, StorageKey, StoreResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

pub struct RecordRepository<'a, T> {
    store: &'a dyn KeyValueStore,
    key: StorageKey,
    _record: PhantomData<T>,
}

impl<'a, T: Serialize + DeserializeOwned> RecordRepository<'a, T> {
    pub fn new(store: &'a dyn KeyValueStore, key: StorageKey) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    pub fn load(&self) -> StoreResult<Option<T>> {
        read_record(self.store, self.key)
    }

    /// Overwrites the stored record wholesale.
    pub fn save(&self, record: &T) -> StoreResult<()> {
        write_record(self.store, self.key, record)
    }

    pub fn remove(&self) -> StoreResult<()> {
        remove_record(self.store, self.key)
    }
}
