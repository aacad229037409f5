//! The generic entity seam for list controllers.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A backend entity that can be listed, created, patched, and removed
/// through the standard collection endpoints.
///
/// `PATH` is the resource's path segment under the API base URL; `id`
/// is the unique key the backend assigns to each record.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const PATH: &'static str;

    fn id(&self) -> &str;
}

/// A client-side draft of a new record.
///
/// `missing_fields` names every required field that is empty or zero;
/// a non-empty result rejects the draft before any network call.
pub trait Draft: Serialize + Send + Sync {
    fn missing_fields(&self) -> Vec<&'static str>;
}
