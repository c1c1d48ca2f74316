//! Configuration types for DNS providers
//!
//! Providers are built from a serde-tagged [`ProviderConfig`], usually read
//! from a JSON document.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::rrstype::RrsType;
use crate::traits::{ResourceRecordSet, ZoneSpec};

/// DNS provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// In-memory reference backend
    Stub {
        /// Zones to seed the backend with
        #[serde(default)]
        zones: Vec<ZoneConfig>,
    },

    /// Custom provider
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

impl ProviderConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, crate::Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a configuration from a JSON file
    ///
    /// A file that cannot be opened is reported as [`crate::Error::Io`],
    /// malformed content as [`crate::Error::Json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate the provider configuration
    ///
    /// Record data is never inspected.
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ProviderConfig::Stub { zones } => {
                let mut ids = HashSet::new();
                for zone in zones {
                    zone.validate()?;
                    let id = zone.spec().id;
                    if !ids.insert(id.clone()) {
                        return Err(crate::Error::config(format!(
                            "Duplicate zone id in stub configuration: {}",
                            id
                        )));
                    }
                }
                Ok(())
            }
            ProviderConfig::Custom { factory, config } => {
                if factory.is_empty() {
                    return Err(crate::Error::config(
                        "Custom provider factory cannot be empty",
                    ));
                }
                if config.is_null() {
                    return Err(crate::Error::config(
                        "Custom provider config cannot be null",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Get the provider type name
    pub fn type_name(&self) -> &str {
        match self {
            ProviderConfig::Stub { .. } => "stub",
            ProviderConfig::Custom { factory, .. } => factory,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Stub { zones: Vec::new() }
    }
}

/// Zone seed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// DNS name of the zone
    pub name: String,

    /// Backend identifier (derived from the name when absent)
    #[serde(default)]
    pub id: Option<String>,

    /// Record sets present when the backend starts
    #[serde(default)]
    pub records: Vec<RecordSetConfig>,
}

impl ZoneConfig {
    /// Create a zone configuration without records
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            records: Vec::new(),
        }
    }

    /// Add a seeded record set
    pub fn with_record(mut self, record: RecordSetConfig) -> Self {
        self.records.push(record);
        self
    }

    /// The creation parameters for this zone
    pub fn spec(&self) -> ZoneSpec {
        match &self.id {
            Some(id) => ZoneSpec::with_id(self.name.clone(), id.clone()),
            None => ZoneSpec::new(self.name.clone()),
        }
    }

    /// Validate the zone configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.name.is_empty() {
            return Err(crate::Error::config("Zone name cannot be empty"));
        }
        if self.id.as_deref().is_some_and(str::is_empty) {
            return Err(crate::Error::config(format!(
                "Zone id cannot be empty for zone {}",
                self.name
            )));
        }
        for record in &self.records {
            if record.name.is_empty() {
                return Err(crate::Error::config(format!(
                    "Record set name cannot be empty in zone {}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// Record set seed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSetConfig {
    /// Owner name
    pub name: String,

    /// Record set type
    #[serde(rename = "type")]
    pub rrs_type: RrsType,

    /// Time-to-live in seconds
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Record data
    #[serde(default)]
    pub rrdatas: Vec<String>,
}

impl RecordSetConfig {
    /// Build the record set value
    pub fn to_record_set(&self) -> ResourceRecordSet {
        ResourceRecordSet::new(
            self.name.clone(),
            self.rrdatas.iter().cloned(),
            self.ttl,
            self.rrs_type,
        )
    }
}

fn default_ttl() -> u32 {
    300
}
