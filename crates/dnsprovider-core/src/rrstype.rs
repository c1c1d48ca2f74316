//! Resource record set types
//!
//! Only the mnemonic is modelled here. Record data is carried as opaque
//! strings and never checked against the type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// DNS resource record set type
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RrsType {
    /// IPv4 address
    A,
    /// IPv6 address
    AAAA,
    /// Certification authority authorization
    CAA,
    /// Canonical name
    CNAME,
    /// Mail exchange
    MX,
    /// Name server
    NS,
    /// Pointer
    PTR,
    /// Start of authority
    SOA,
    /// Service locator
    SRV,
    /// Text
    TXT,
}

impl RrsType {
    /// The uppercase mnemonic used on the wire and in zone files
    pub fn as_str(&self) -> &'static str {
        match self {
            RrsType::A => "A",
            RrsType::AAAA => "AAAA",
            RrsType::CAA => "CAA",
            RrsType::CNAME => "CNAME",
            RrsType::MX => "MX",
            RrsType::NS => "NS",
            RrsType::PTR => "PTR",
            RrsType::SOA => "SOA",
            RrsType::SRV => "SRV",
            RrsType::TXT => "TXT",
        }
    }
}

impl fmt::Display for RrsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RrsType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RrsType::A),
            "AAAA" => Ok(RrsType::AAAA),
            "CAA" => Ok(RrsType::CAA),
            "CNAME" => Ok(RrsType::CNAME),
            "MX" => Ok(RrsType::MX),
            "NS" => Ok(RrsType::NS),
            "PTR" => Ok(RrsType::PTR),
            "SOA" => Ok(RrsType::SOA),
            "SRV" => Ok(RrsType::SRV),
            "TXT" => Ok(RrsType::TXT),
            _ => Err(Error::invalid_input(format!(
                "Unknown record set type: {}",
                s
            ))),
        }
    }
}
