//! Registry WHOIS resolution for IPv4 addresses.
//!
//! The registry table picks the first server from the address's leading
//! octet, a raw session fetches the answer, and a `ReferralServer` line in
//! that answer sends the same query once more to the referred authority.

pub mod parser;
pub mod referral;
pub mod registry;
pub mod resolver;
pub mod session;

pub use parser::{FieldValue, WhoisRecord, parse};
pub use referral::Referral;
pub use registry::{RegistryEntry, RegistryTable};
pub use resolver::WhoisResolver;
pub use session::{TcpSession, WhoisTransport, decode_response};
