pub mod dns;
pub mod geo;
pub mod timestamp;
pub mod whois;
