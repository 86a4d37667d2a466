use chrono::{DateTime, Local, TimeZone};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S%p (%Z)";

pub fn now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}
