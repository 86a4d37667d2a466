use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

// WHOIS constants
pub const DEFAULT_WHOIS_PORT: u16 = 43;
pub const TIMEOUT_SECONDS: u64 = 10;
pub const WHOIS_MAX_RESPONSE_BYTES: u64 = 1_000_000; // 1MB

// Registry data bundled with the binary, used unless --registry is given
pub const BUNDLED_REGISTRY: &str = include_str!("../data/ipv4-address-space.json");

// Geolocation API, `{ip}` is replaced with the target address
pub const DEFAULT_GEO_ENDPOINT: &str = "http://ip-api.com/json/{ip}";

pub const USER_AGENT: &str = concat!("ip-detail/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve supplementary information about an IP address")]
pub struct Cli {
    /// IPv4 address to resolve, or path to a JSON batch file
    #[arg(long = "ip", value_name = "IP_OR_FILE")]
    pub ip: String,

    /// When specified, reverse DNS is not resolved and not printed in output
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// When specified, no timestamp is written to output
    #[arg(short = 't', long)]
    pub timestamp: bool,

    /// When specified, whois information is not printed
    #[arg(short = 'w', long)]
    pub whois: bool,

    /// When specified, geolocation is not translated
    #[arg(short = 'g', long)]
    pub geolocation: bool,

    /// Network timeout in seconds for each lookup
    #[arg(
        long,
        env = "IP_DETAIL_TIMEOUT",
        default_value_t = TIMEOUT_SECONDS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Registry data file mapping first octets to WHOIS servers (default: bundled table)
    #[arg(long, env = "IP_DETAIL_REGISTRY", value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Geolocation URL template, `{ip}` is replaced with the address
    #[arg(long, env = "IP_DETAIL_GEO_ENDPOINT", default_value = DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Enable trace output (extremely verbose)
    #[arg(long)]
    pub trace: bool,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
