//! JSON encode/decode helpers shared by the key/value repositories.

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::foundation::DomainError;
use crate::ports::{KeyValueStore, StateKey, StorageError};

/// Reads `key` and decodes it. A value that fails to decode is logged and
/// reported as absent so the caller falls back to its default.
pub(super) async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StateKey,
) -> Result<Option<T>, DomainError> {
    let Some(raw) = store.get(key.as_str()).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(
                key = %key,
                error = %e,
                "Discarding unreadable stored value"
            );
            Ok(None)
        }
    }
}

pub(super) async fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: StateKey,
    value: &T,
) -> Result<(), DomainError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::SerializationFailed {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key.as_str(), &json).await?;
    tracing::debug!(key = %key, bytes = json.len(), "Stored value");
    Ok(())
}
