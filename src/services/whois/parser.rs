//! Free-text WHOIS response to structured record.

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const WHOIS_INFO_KEY: &str = "Whois Info";
pub const NOT_FOUND: &str = "not found";

const RECORD_MARKER: &str = "inetnum";

/// Value of one WHOIS field; promoted to `Multiple` when a key repeats on
/// consecutive lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(first) => {
                let first = std::mem::take(first);
                *self = FieldValue::Multiple(vec![first, value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Single(value) => serializer.serialize_str(value),
            FieldValue::Multiple(values) => values.serialize(serializer),
        }
    }
}

/// Parsed WHOIS answer.
///
/// `server` is the host that answered, or `None` when the response carried no
/// record. Fields keep the order in which their key first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    pub server: Option<String>,
    fields: Vec<(String, FieldValue)>,
}

impl WhoisRecord {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.server.is_some()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn set(&mut self, key: &str, value: String) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = FieldValue::Single(value),
            None => self.fields.push((key.to_string(), FieldValue::Single(value))),
        }
    }

    fn append(&mut self, key: &str, value: String) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => existing.push(value),
            None => self.fields.push((key.to_string(), FieldValue::Single(value))),
        }
    }
}

impl Serialize for WhoisRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(WHOIS_INFO_KEY, self.server.as_deref().unwrap_or(NOT_FOUND))?;
        for (key, value) in &self.fields {
            // A response field literally named "Whois Info" would clash with the server key
            if key != WHOIS_INFO_KEY {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Parse `raw` as answered by `server`.
///
/// Returns a not-found record when the text has no `inetnum` block.
pub fn parse(raw: &str, server: &str) -> WhoisRecord {
    let Some(start) = raw.find(RECORD_MARKER) else {
        return WhoisRecord::not_found();
    };

    let mut record = WhoisRecord {
        server: Some(server.to_string()),
        fields: Vec::new(),
    };
    let mut last_key: Option<&str> = None;

    for line in raw[start..].lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();

        if last_key == Some(key) {
            record.append(key, value);
        } else {
            record.set(key, value);
        }
        last_key = Some(key);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_key_becomes_list() {
        let raw = "% header\ninetnum: 10.0.0.0 - 10.0.0.255\nkey1: a\nkey1: b\nkey2: c\n";
        let record = parse(raw, "whois.example.net");

        assert_eq!(record.server.as_deref(), Some("whois.example.net"));
        assert_eq!(
            record.get("key1"),
            Some(&FieldValue::Multiple(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(record.get("key2"), Some(&FieldValue::Single("c".to_string())));

        let keys: Vec<&str> = record.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["inetnum", "key1", "key2"]);
    }

    #[test]
    fn test_no_inetnum_is_not_found() {
        let record = parse("NetRange: 8.0.0.0 - 8.255.255.255\nOrgName: Level 3\n", "whois.arin.net");
        assert!(!record.is_found());
        assert!(record.is_empty());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"Whois Info": "not found"}));
    }

    #[test]
    fn test_empty_text_is_not_found() {
        assert_eq!(parse("", "whois.ripe.net"), WhoisRecord::not_found());
    }

    #[test]
    fn test_non_adjacent_repeat_overwrites() {
        let raw = "inetnum: x\ndescr: first\nnetname: NET\ndescr: second\n";
        let record = parse(raw, "whois.ripe.net");

        assert_eq!(record.get("descr"), Some(&FieldValue::Single("second".to_string())));
        let keys: Vec<&str> = record.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["inetnum", "descr", "netname"]);
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let raw = "inetnum: x\nremarks: one\n\nno colon here\nremarks: two\n";
        let record = parse(raw, "whois.ripe.net");
        assert_eq!(
            record.get("remarks"),
            Some(&FieldValue::Multiple(vec!["one".to_string(), "two".to_string()]))
        );
    }

    #[test]
    fn test_value_split_on_first_colon_only() {
        let raw = "inetnum: x\r\nlast-modified:   2024-01-02T03:04:05Z  \r\n";
        let record = parse(raw, "whois.ripe.net");
        assert_eq!(
            record.get("last-modified"),
            Some(&FieldValue::Single("2024-01-02T03:04:05Z".to_string()))
        );
    }

    #[test]
    fn test_serialized_order() {
        let raw = "inetnum: 193.0.0.0 - 193.0.7.255\nnetname: RIPE-NCC\nmnt-by: A\nmnt-by: B\n";
        let json = serde_json::to_string(&parse(raw, "whois.ripe.net")).unwrap();
        assert_eq!(
            json,
            r#"{"Whois Info":"whois.ripe.net","inetnum":"193.0.0.0 - 193.0.7.255","netname":"RIPE-NCC","mnt-by":["A","B"]}"#
        );
    }
}
