//! First-octet registry table.
//!
//! Maps the leading octet of an IPv4 address to the WHOIS server of the
//! regional registry that holds the block. The data file follows the IANA
//! address-space layout: `{"record": [{"prefix": "001/8", "whois": "..."}]}`.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::config::BUNDLED_REGISTRY;
use crate::core::error::{DetailError, DetailResult};

#[derive(Debug, Deserialize)]
struct RegistryFile {
    record: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    prefix: String,
    #[serde(default)]
    whois: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Zero-padded first octet, e.g. "001"
    pub prefix: String,
    pub whois_host: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegistryTable {
    entries: Vec<RegistryEntry>,
}

impl RegistryTable {
    /// Table built from the data file compiled into the binary
    pub fn bundled() -> DetailResult<Self> {
        Self::from_json(BUNDLED_REGISTRY)
    }

    pub fn from_path(path: &Path) -> DetailResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| DetailError::RegistryRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> DetailResult<Self> {
        let file: RegistryFile = serde_json::from_str(data)?;
        let entries = file
            .record
            .into_iter()
            .filter(|raw| !raw.whois.trim().is_empty())
            .map(|raw| RegistryEntry {
                prefix: stored_prefix(&raw.prefix),
                whois_host: raw.whois.trim().to_string(),
            })
            .collect::<Vec<_>>();

        debug!("Loaded {} registry entries", entries.len());
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// WHOIS host responsible for `ip`, first matching entry wins
    pub fn lookup_server(&self, ip: &str) -> Option<&str> {
        let octet = ip.split('.').next().unwrap_or_default();
        let key = format!("{:0>3}", octet);

        self.entries
            .iter()
            .find(|entry| entry.prefix == key)
            .map(|entry| entry.whois_host.as_str())
    }
}

/// Drop the trailing two characters ("/8") and keep the first three.
fn stored_prefix(prefix: &str) -> String {
    let chars: Vec<char> = prefix.chars().collect();
    let kept = chars.len().saturating_sub(2);
    chars[..kept].iter().take(3).collect()
}
