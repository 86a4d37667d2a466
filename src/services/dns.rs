//! Reverse DNS through the system resolver.

use std::net::IpAddr;

use tracing::{debug, warn};

/// Hostname for `ip`, or `None` when there is no PTR record or the address
/// cannot be parsed.
pub fn reverse_lookup(ip: &str) -> Option<String> {
    let addr: IpAddr = match ip.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Cannot reverse-resolve '{}': {}", ip, e);
            return None;
        }
    };

    debug!("Querying reverse DNS for IP: {}", addr);
    match dns_lookup::lookup_addr(&addr) {
        // Some resolvers hand the address back when no PTR record exists
        Ok(name) if name != ip => Some(name),
        Ok(_) => None,
        Err(e) => {
            debug!("No reverse DNS record for {}: {}", addr, e);
            None
        }
    }
}
