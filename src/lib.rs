//! # IP Detail
//!
//! Supplementary information about IPv4 addresses:
//! - Reverse DNS name
//! - Registry WHOIS record, following one `ReferralServer` hop
//! - Geolocation from a public JSON API
//! - Local timestamp of the lookup
//!
//! ## Library usage
//!
//! ```no_run
//! use clap::Parser;
//! use ip_detail::{config::Cli, run};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse_from(["ip-detail", "--ip", "193.0.6.139", "-g"]);
//!     let report = run(&cli)?;
//!     println!("{}", report.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod services;

use anyhow::Result;

use crate::config::Cli;
use crate::core::{LookupContext, LookupKind, Report, build_report, resolve_targets};
use crate::services::geo::GeoClient;
use crate::services::whois::{RegistryTable, TcpSession, WhoisResolver};

/// Build the lookup services described by the CLI options
pub fn build_context(cli: &Cli) -> Result<LookupContext<TcpSession>> {
    let registry = match &cli.registry {
        Some(path) => RegistryTable::from_path(path)?,
        None => RegistryTable::bundled()?,
    };
    let whois = WhoisResolver::new(registry, TcpSession::new(cli.timeout()));
    let geo = GeoClient::new(&cli.geo_endpoint, cli.timeout())?;
    Ok(LookupContext::new(whois, geo))
}

/// Resolve the targets named by `--ip` and collect every selected lookup
pub fn run(cli: &Cli) -> Result<Report> {
    let targets = resolve_targets(&cli.ip)?;
    let lookups = LookupKind::selected(cli);
    let ctx = build_context(cli)?;

    Ok(build_report(&targets, &lookups, &ctx))
}
