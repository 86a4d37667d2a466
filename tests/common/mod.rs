#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ip_detail::services::whois::{TcpSession, WhoisTransport};

/// One-shot TCP fixture on 127.0.0.1; `handler` gets the accepted stream.
pub fn serve_once<F>(handler: F) -> (u16, JoinHandle<()>)
where
    F: FnOnce(TcpStream) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            handler(stream);
        }
    });
    (port, handle)
}

/// WHOIS fixture: reads the query line, answers with `response`, closes.
pub fn whois_server(response: &'static [u8]) -> (u16, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let query = read_line(&mut stream);
        stream.write_all(response).unwrap();
        query
    });
    (port, handle)
}

/// HTTP fixture answering one request with `status` and `body`.
pub fn http_server(status: &'static str, body: &'static str) -> (u16, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut byte = [0u8; 1];
        while !request.ends_with(b"\r\n\r\n") {
            match stream.read(&mut byte) {
                Ok(0) | Err(_) => break,
                Ok(_) => request.push(byte[0]),
            }
        }
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(reply.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).to_string()
    });
    (port, handle)
}

/// A port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

pub fn read_line(stream: &mut TcpStream) -> String {
    let mut query = Vec::new();
    let mut byte = [0u8; 1];
    while !query.ends_with(b"\r\n") {
        match stream.read(&mut byte) {
            Ok(0) | Err(_) => break,
            Ok(_) => query.push(byte[0]),
        }
    }
    String::from_utf8_lossy(&query).to_string()
}

/// Sends every query to a local fixture port, whatever host the resolver picked
pub struct LocalRedirect {
    pub session: TcpSession,
    pub port: u16,
}

impl LocalRedirect {
    pub fn new(port: u16) -> Self {
        Self {
            session: TcpSession::new(Duration::from_secs(2)),
            port,
        }
    }
}

impl WhoisTransport for LocalRedirect {
    fn query(&self, _host: &str, _port: u16, message: &str) -> String {
        self.session.query("127.0.0.1", self.port, message)
    }
}
