// # DNS Provider Trait
//
// Defines the top-level handle to a DNS backend.
//
// ## Implementations
//
// - In-memory reference backend: `dnsprovider-stub` crate
// - Future: Cloud DNS, Route53, authoritative servers, etc.
//
// ## Usage
//
// ```rust,ignore
// use dnsprovider_core::DnsProvider;
//
// let zones = provider.require_zones()?;
// for zone in zones.list().await? {
//     println!("{} ({})", zone.name(), zone.id());
// }
// ```

use std::sync::Arc;

use crate::traits::zones::Zones;

/// Trait for DNS provider implementations
///
/// A provider exposes capability discovery and access to the zone directory
/// of one account. Both capability queries are pure: no I/O, no side effects.
///
/// # Capabilities
///
/// Support for zone management is expressed by returning `Some` from
/// [`DnsProvider::zones`]. Callers that cannot continue without it use
/// [`DnsProvider::require_zones`], which turns `None` into
/// [`Error::Unsupported`](crate::Error::Unsupported).
///
/// # Substitutability
///
/// Given the same sequence of calls, every implementation must produce the
/// same errors and the same list contents as the in-memory reference
/// backend, modulo ordering and latency. The [`conformance`](crate::conformance)
/// module checks this.
///
/// # Retries
///
/// The core never retries. Transport failures surface as
/// [`Error::BackendUnavailable`](crate::Error::BackendUnavailable).
pub trait DnsProvider: Send + Sync {
    /// Get the provider name (for logging/debugging)
    ///
    /// # Returns
    ///
    /// A static string identifying the provider (e.g., "stub", "clouddns")
    fn provider_name(&self) -> &'static str;

    /// Access the zone directory
    ///
    /// # Returns
    ///
    /// - `Some(zones)`: The backend supports zone management
    /// - `None`: It does not
    fn zones(&self) -> Option<Arc<dyn Zones>>;

    /// Access the zone directory, failing if the capability is absent
    fn require_zones(&self) -> Result<Arc<dyn Zones>, crate::Error> {
        self.zones().ok_or_else(|| {
            crate::Error::unsupported(format!(
                "zone management is not supported by provider {}",
                self.provider_name()
            ))
        })
    }
}

/// Helper trait for constructing DNS providers from configuration
pub trait DnsProviderFactory: Send + Sync {
    /// Create a DnsProvider instance from configuration
    ///
    /// # Parameters
    ///
    /// - `config`: Configuration specific to this provider
    ///
    /// # Returns
    ///
    /// A boxed DnsProvider trait object
    fn create(
        &self,
        config: &crate::config::ProviderConfig,
    ) -> Result<Box<dyn DnsProvider>, crate::Error>;
}
