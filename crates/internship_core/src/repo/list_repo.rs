//! Newest-first list repository.

use crate::model::ListRecord;
use crate::store::{read_list, write_list, KeyValueStore, StoreResult};
use std::marker::PhantomData;

/// Whole-list access for one `ListRecord` type.
pub struct EntryListRepository<'a, T> {
    store: &'a dyn KeyValueStore,
    _record: PhantomData<T>,
}

impl<'a, T: ListRecord> EntryListRepository<'a, T> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Current snapshot; position in the vector is the record identity.
    pub fn load(&self) -> StoreResult<Vec<T>> {
        read_list(self.store, T::KEY)
    }

    pub fn save(&self, list: &[T]) -> StoreResult<()> {
        write_list(self.store, T::KEY, list)
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.save(&[])
    }
}
