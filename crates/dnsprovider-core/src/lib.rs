// # dnsprovider-core
//
// Provider-agnostic management of DNS zones and resource record sets.
//
// ## Architecture Overview
//
// This library defines the contract every DNS backend must honor:
// - **DnsProvider**: Capability discovery and access to the zone directory
// - **Zones** / **Zone**: Zone listing, creation, and per-zone handles
// - **ResourceRecordSets**: Record set listing, addition, and removal
// - **ProviderRegistry**: Plugin-based registry for backend factories
// - **conformance**: Checks that a backend behaves like the reference backend
//
// ## Design Principles
//
// 1. **Substitutability**: Any backend produces the same errors and list
//    contents as the in-memory reference for the same call sequence
// 2. **Explicit Capabilities**: Unsupported features are `None` handles, not flags
// 3. **Uniqueness at the Boundary**: A zone never holds two record sets with
//    the same (name, type)
// 4. **No Validation of Record Data**: Backends that care reject it themselves
// 5. **No Retries**: Errors go straight back to the caller

pub mod config;
pub mod conformance;
pub mod error;
pub mod registry;
pub mod rrstype;
pub mod traits;

// Re-export core types for convenience
pub use config::{ProviderConfig, RecordSetConfig, ZoneConfig};
pub use error::{Error, Result};
pub use registry::ProviderRegistry;
pub use rrstype::RrsType;
pub use traits::{
    DnsProvider, DnsProviderFactory, RecordSetKey, ResourceRecordSet, ResourceRecordSets, Zone,
    ZoneSpec, Zones,
};
