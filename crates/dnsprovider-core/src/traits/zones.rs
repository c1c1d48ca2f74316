// # Zones
//
// Defines the zone directory of a provider account and the per-zone handle.
//
// A zone owns exactly one record set store. Whether that store can be
// reached through a given backend is a capability, exposed as an optional
// handle rather than a flag the caller has to remember to check.

use async_trait::async_trait;
use std::sync::Arc;

use crate::traits::record_sets::ResourceRecordSets;

/// Parameters for creating a zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSpec {
    /// DNS name of the zone (e.g. "example.com.")
    pub name: String,
    /// Backend identifier, unique within the directory
    pub id: String,
}

impl ZoneSpec {
    /// Create zone parameters whose backend identifier is derived from the DNS name
    ///
    /// The identifier is the name without its trailing root dot, so
    /// `example.com.` and `example.com` share the identifier `example.com`
    /// while any two other names get distinct identifiers.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = name.strip_suffix('.').unwrap_or(&name).to_string();
        Self { name, id }
    }

    /// Create zone parameters with an explicit backend identifier
    pub fn with_id(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Handle to a single DNS zone
pub trait Zone: Send + Sync {
    /// DNS name of the zone
    fn name(&self) -> &str;

    /// Backend identifier of the zone
    fn id(&self) -> &str;

    /// Access the zone's record set store
    ///
    /// # Returns
    ///
    /// - `Some(store)`: The backend supports record set management
    /// - `None`: It does not
    fn resource_record_sets(&self) -> Option<Arc<dyn ResourceRecordSets>>;

    /// Access the record set store, failing if the capability is absent
    fn require_resource_record_sets(&self) -> Result<Arc<dyn ResourceRecordSets>, crate::Error> {
        self.resource_record_sets().ok_or_else(|| {
            crate::Error::unsupported(format!(
                "record set management is not supported by zone {}",
                self.name()
            ))
        })
    }
}

/// Trait for the zone directory of one provider account
///
/// # Thread Safety
///
/// Implementations must be safe to call concurrently from multiple tasks.
#[async_trait]
pub trait Zones: Send + Sync {
    /// List every zone that currently exists
    ///
    /// Order is unspecified. Zero zones is not an error.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec)`: All zones
    /// - `Err(Error::BackendUnavailable)`: The backend could not be reached
    async fn list(&self) -> Result<Vec<Arc<dyn Zone>>, crate::Error>;

    /// Create a zone with an empty record set store
    ///
    /// # Returns
    ///
    /// - `Ok(zone)`: The zone is visible to subsequent `list` calls
    /// - `Err(Error::AlreadyExists)`: The backend identifier is taken
    async fn create(&self, spec: ZoneSpec) -> Result<Arc<dyn Zone>, crate::Error>;
}
