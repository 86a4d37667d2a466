use tracing::{debug, info};

use super::parser::{self, WhoisRecord};
use super::referral;
use super::registry::RegistryTable;
use super::session::WhoisTransport;
use crate::config::DEFAULT_WHOIS_PORT;

/// Registry lookup, primary query, then at most one referral hop.
///
/// A response to the referral is parsed as final even if it carries another
/// `ReferralServer` line.
pub struct WhoisResolver<T: WhoisTransport> {
    registry: RegistryTable,
    transport: T,
}

impl<T: WhoisTransport> WhoisResolver<T> {
    pub fn new(registry: RegistryTable, transport: T) -> Self {
        Self { registry, transport }
    }

    pub fn registry(&self) -> &RegistryTable {
        &self.registry
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn resolve(&self, ip: &str) -> WhoisRecord {
        let message = format!("{}\r\n", ip);

        // No registry match still goes through the cycle and ends as "not found"
        let primary = self.registry.lookup_server(ip).unwrap_or_default();
        let raw = if primary.is_empty() {
            debug!("No registry entry for {}", ip);
            String::new()
        } else {
            self.transport.query(primary, DEFAULT_WHOIS_PORT, &message)
        };

        let Some(referral) = referral::detect(&raw) else {
            return parser::parse(&raw, primary);
        };

        info!("{} refers {} to {}:{}", primary, ip, referral.host, referral.port);
        let referred = self.transport.query(&referral.host, referral.port, &message);
        parser::parse(&referred, &referral.host)
    }
}
