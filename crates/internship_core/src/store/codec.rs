//! Lenient JSON codecs over a `KeyValueStore`.
//!
//! # Responsibility
//! - Read list keys as ordered sequences and record keys as optional values.
//! - Write whole lists/records back as JSON text.
//!
//! # Invariants
//! - Missing, corrupt or wrongly shaped values decode to empty/absent and are
//!   logged as `store_decode status=degraded`; they never surface as errors.
//! - Array elements that are not JSON objects, or that fail to decode, are
//!   skipped; the remaining elements keep their relative order.

use super::{KeyValueStore, StorageKey, StoreResult};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Reads the list stored at `key`, degrading to an empty list.
pub fn read_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StorageKey,
) -> StoreResult<Vec<T>> {
    let Some(value) = read_json(store, key)? else {
        return Ok(Vec::new());
    };

    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        _ => {
            warn!("event=store_decode module=store status=degraded key={key} reason=not_array");
            return Ok(Vec::new());
        }
    };

    let total = items.len();
    let decoded = items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value::<T>(item).ok())
        .collect::<Vec<_>>();
    if decoded.len() != total {
        warn!(
            "event=store_decode module=store status=degraded key={} reason={} skipped={}",
            key,
            "skipped_items",
            total - decoded.len()
        );
    }
    Ok(decoded)
}

/// Persists the whole list at `key`.
pub fn write_list<T: Serialize>(
    store: &dyn KeyValueStore,
    key: StorageKey,
    list: &[T],
) -> StoreResult<()> {
    let encoded = serde_json::to_string(list)?;
    store.set(key.as_str(), &encoded)
}

/// Reads the singleton record stored at `key`, degrading to `None`.
pub fn read_record<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StorageKey,
) -> StoreResult<Option<T>> {
    let Some(value) = read_json(store, key)? else {
        return Ok(None);
    };

    match value {
        Value::Object(_) => match serde_json::from_value::<T>(value) {
            Ok(record) => Ok(Some(record)),
            Err(_) => {
                warn!("event=store_decode module=store status=degraded key={key} reason=bad_shape");
                Ok(None)
            }
        },
        Value::Null => Ok(None),
        _ => {
            warn!("event=store_decode module=store status=degraded key={key} reason=not_object");
            Ok(None)
        }
    }
}

/// Overwrites the singleton record at `key`.
pub fn write_record<T: Serialize>(
    store: &dyn KeyValueStore,
    key: StorageKey,
    record: &T,
) -> StoreResult<()> {
    let encoded = serde_json::to_string(record)?;
    store.set(key.as_str(), &encoded)
}

/// Deletes the value at `key` outright.
pub fn remove_record(store: &dyn KeyValueStore, key: StorageKey) -> StoreResult<()> {
    store.remove(key.as_str())
}

fn read_json(store: &dyn KeyValueStore, key: StorageKey) -> StoreResult<Option<Value>> {
    let Some(raw) = store.get(key.as_str())? else {
        return Ok(None);
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            warn!("event=store_decode module=store status=degraded key={key} reason=invalid_json");
            Ok(None)
        }
    }
}
