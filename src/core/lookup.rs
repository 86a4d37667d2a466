//! The fixed set of lookups a report can contain.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::Cli;
use crate::services::geo::GeoClient;
use crate::services::whois::{TcpSession, WhoisRecord, WhoisResolver, WhoisTransport};
use crate::services::{dns, timestamp};

pub const DNS_NOT_FOUND: &str = "Not Found";
pub const GEO_NOT_FOUND: &str = "Not Found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    ReverseDns,
    Timestamp,
    Whois,
    Geolocation,
}

impl LookupKind {
    /// Report order
    pub const ALL: [LookupKind; 4] = [
        LookupKind::ReverseDns,
        LookupKind::Timestamp,
        LookupKind::Whois,
        LookupKind::Geolocation,
    ];

    /// Short CLI flag that suppresses this lookup
    pub fn option(self) -> &'static str {
        match self {
            LookupKind::ReverseDns => "-r",
            LookupKind::Timestamp => "-t",
            LookupKind::Whois => "-w",
            LookupKind::Geolocation => "-g",
        }
    }

    pub fn argument(self) -> &'static str {
        match self {
            LookupKind::ReverseDns => "reverse",
            LookupKind::Timestamp => "timestamp",
            LookupKind::Whois => "whois",
            LookupKind::Geolocation => "geolocation",
        }
    }

    /// Key naming this lookup's entry in the report
    pub fn result_key(self) -> &'static str {
        match self {
            LookupKind::ReverseDns => "DNS reverse Info",
            LookupKind::Timestamp => "Timestamp Info",
            LookupKind::Whois => "Whois Info",
            LookupKind::Geolocation => "GeoLocation Info",
        }
    }

    fn excluded_by(self, cli: &Cli) -> bool {
        match self {
            LookupKind::ReverseDns => cli.reverse,
            LookupKind::Timestamp => cli.timestamp,
            LookupKind::Whois => cli.whois,
            LookupKind::Geolocation => cli.geolocation,
        }
    }

    /// Lookups left after removing the ones whose flag was passed
    pub fn selected(cli: &Cli) -> Vec<LookupKind> {
        LookupKind::ALL
            .into_iter()
            .filter(|kind| {
                let excluded = kind.excluded_by(cli);
                if excluded {
                    debug!("Skipping {} lookup ({})", kind.argument(), kind.option());
                }
                !excluded
            })
            .collect()
    }

    pub fn resolve<T: WhoisTransport>(self, ctx: &LookupContext<T>, ip: &str) -> LookupResult {
        let outcome = match self {
            LookupKind::ReverseDns => match dns::reverse_lookup(ip) {
                Some(name) => LookupOutcome::Text(name),
                None => LookupOutcome::Text(DNS_NOT_FOUND.to_string()),
            },
            LookupKind::Timestamp => LookupOutcome::Text(timestamp::now()),
            LookupKind::Whois => LookupOutcome::Whois(ctx.whois.resolve(ip)),
            LookupKind::Geolocation => match ctx.geo.locate(ip) {
                Ok(fields) => LookupOutcome::Location(fields),
                Err(e) => {
                    warn!("Geolocation lookup for {} failed: {:#}", ip, e);
                    LookupOutcome::Text(GEO_NOT_FOUND.to_string())
                }
            },
        };
        LookupResult { kind: self, outcome }
    }
}

/// Services the lookups run against
pub struct LookupContext<T: WhoisTransport = TcpSession> {
    pub whois: WhoisResolver<T>,
    pub geo: GeoClient,
}

impl<T: WhoisTransport> LookupContext<T> {
    pub fn new(whois: WhoisResolver<T>, geo: GeoClient) -> Self {
        Self { whois, geo }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Text(String),
    Location(Map<String, Value>),
    Whois(WhoisRecord),
}

/// One entry of the report's "Information" list
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub kind: LookupKind,
    pub outcome: LookupOutcome,
}

impl Serialize for LookupResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.outcome {
            // The record already carries its "Whois Info" key
            LookupOutcome::Whois(record) => record.serialize(serializer),
            LookupOutcome::Text(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.kind.result_key(), text)?;
                map.end()
            }
            LookupOutcome::Location(fields) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.kind.result_key(), fields)?;
                map.end()
            }
        }
    }
}
