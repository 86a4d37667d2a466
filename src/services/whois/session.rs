//! Raw WHOIS session: one TCP connection per query, read to EOF.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, trace, warn};

use crate::config::WHOIS_MAX_RESPONSE_BYTES;

/// Something that can answer a WHOIS query with raw text.
///
/// Implementations never fail: any transport problem yields an empty string.
pub trait WhoisTransport {
    fn query(&self, host: &str, port: u16, message: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct TcpSession {
    timeout: Duration,
}

impl TcpSession {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn try_query(&self, host: &str, port: u16, message: &str) -> Result<Vec<u8>> {
        let address = format!("{}:{}", host, port);
        let start = Instant::now();

        let addrs = (host, port)
            .to_socket_addrs()
            .with_context(|| format!("Cannot resolve WHOIS server {}", address))?;

        let mut last_error = None;
        let mut connected = None;
        for addr in addrs {
            let remaining = self.timeout.saturating_sub(start.elapsed());
            if remaining.is_zero() {
                break;
            }
            match TcpStream::connect_timeout(&addr, remaining) {
                Ok(stream) => {
                    connected = Some(stream);
                    break;
                }
                Err(e) => last_error = Some(e),
            }
        }
        let mut stream = match (connected, last_error) {
            (Some(stream), _) => stream,
            (None, Some(e)) => return Err(anyhow!("Cannot connect to WHOIS server {}: {}", address, e)),
            (None, None) => return Err(anyhow!("No reachable address for WHOIS server {}", address)),
        };

        stream.set_read_timeout(Some(self.timeout))?;
        stream.set_write_timeout(Some(self.timeout))?;
        if let Err(e) = stream.set_nodelay(true) {
            warn!("Failed to set TCP_NODELAY: {}", e);
        }

        stream.write_all(message.as_bytes())?;
        stream.flush()?;

        let mut buffer = Vec::with_capacity(8192);
        (&mut stream)
            .take(WHOIS_MAX_RESPONSE_BYTES)
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read WHOIS response from {}", address))?;

        debug!("Received {} bytes from {}", buffer.len(), address);
        Ok(buffer)
    }
}

impl WhoisTransport for TcpSession {
    fn query(&self, host: &str, port: u16, message: &str) -> String {
        debug!("Querying WHOIS server: {}:{}", host, port);

        match self.try_query(host, port, message) {
            Ok(bytes) => {
                let text = decode_response(&bytes);
                trace!("Response from {}:\n{}", host, text);
                text
            }
            Err(e) => {
                warn!("WHOIS session with {}:{} failed, treating as no data: {:#}", host, port, e);
                String::new()
            }
        }
    }
}

/// UTF-8 when valid, Latin-1 otherwise.
pub fn decode_response(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_response("netname: ÜBER".as_bytes()), "netname: ÜBER");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // "descr: M\xfcnchen" is invalid UTF-8
        let bytes = b"descr: M\xfcnchen";
        assert_eq!(decode_response(bytes), "descr: München");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_response(b""), "");
    }
}
