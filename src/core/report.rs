use serde::Serialize;
use tracing::info;

use crate::core::lookup::{LookupContext, LookupKind, LookupResult};
use crate::services::whois::WhoisTransport;

/// Final JSON document printed on stdout
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    #[serde(rename = "Information")]
    pub information: Vec<LookupResult>,
}

impl Report {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Run every selected lookup for every target, one address at a time.
///
/// Each address's results are appended as a contiguous group in target order.
pub fn build_report<T: WhoisTransport>(
    targets: &[String],
    lookups: &[LookupKind],
    ctx: &LookupContext<T>,
) -> Report {
    let mut information = Vec::with_capacity(targets.len() * lookups.len());

    for ip in targets {
        info!("Resolving {}", ip);
        information.extend(lookups.iter().map(|kind| kind.resolve(ctx, ip)));
    }

    Report { information }
}
