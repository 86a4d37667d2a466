//! Detection of `ReferralServer` directives in WHOIS responses.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DEFAULT_WHOIS_PORT;

const REFERRAL_MARKER: &str = "ReferralServer";

// Dot-separated word runs, optionally behind a scheme such as "rwhois://"
static AUTHORITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[A-Za-z][\w+.-]*://)?((?:[\w-]+\.)+[\w-]*)").expect("valid regex"));

static PORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r":(\d+)").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referral {
    pub host: String,
    pub port: u16,
}

/// Extract the referral authority from raw response text, if any.
///
/// The host is normalized heuristically: a host that does not end in `.net`
/// or `.com` gets `.net` appended. The port defaults to 43.
pub fn detect(raw: &str) -> Option<Referral> {
    let start = raw.find(REFERRAL_MARKER)?;
    let region = &raw[start + REFERRAL_MARKER.len()..];
    let region = region.lines().next().unwrap_or_default();

    let found = AUTHORITY_RE.captures(region)?;
    let authority = found.get(1)?;

    let host = authority.as_str().trim_end_matches(['.', ':']);
    if host.is_empty() {
        return None;
    }
    let lowered = host.to_ascii_lowercase();
    let host = if lowered.ends_with(".net") || lowered.ends_with(".com") {
        host.to_string()
    } else {
        format!("{}.net", host)
    };

    let port = PORT_RE
        .captures(&region[authority.end()..])
        .and_then(|caps| caps[1].parse::<u16>().ok())
        .unwrap_or(DEFAULT_WHOIS_PORT);

    Some(Referral { host, port })
}
