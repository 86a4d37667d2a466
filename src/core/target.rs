//! Turning the `--ip` argument into the list of addresses to resolve.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::core::error::{DetailError, DetailResult};

/// Addresses named by `--ip`: an IPv4 literal, or the contents of a batch file.
pub fn resolve_targets(arg: &str) -> DetailResult<Vec<String>> {
    let trimmed = arg.trim();
    if trimmed.parse::<Ipv4Addr>().is_ok() {
        return Ok(vec![trimmed.to_string()]);
    }

    let path = Path::new(arg);
    if !path.is_file() {
        return Err(DetailError::InvalidTarget(arg.to_string()));
    }
    read_batch(path)
}

/// Read a batch file: a JSON object whose every value is an array of arrays,
/// e.g. a torrent peer dump `{"peer": [["10.0.0.5", 6881]]}`.
pub fn read_batch(path: &Path) -> DetailResult<Vec<String>> {
    let data = std::fs::read_to_string(path).map_err(|source| DetailError::BatchRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&data).map_err(|source| DetailError::BatchParse {
        path: path.to_path_buf(),
        source,
    })?;

    let targets = batch_targets(&document).map_err(|key| DetailError::BatchShape {
        path: path.to_path_buf(),
        key,
    })?;
    debug!("Batch file {} names {} distinct addresses", path.display(), targets.len());
    Ok(targets)
}

/// `value[0][0]` of every top-level entry, duplicates dropped, first-seen order kept.
///
/// On a malformed entry returns its key.
pub fn batch_targets(document: &Value) -> Result<Vec<String>, String> {
    let Value::Object(entries) = document else {
        return Err("<root>".to_string());
    };

    let mut seen = HashSet::new();
    let mut targets = Vec::new();
    for (key, value) in entries {
        let address = value
            .get(0)
            .and_then(|first| first.get(0))
            .and_then(Value::as_str)
            .ok_or_else(|| key.clone())?;

        if seen.insert(address.to_string()) {
            targets.push(address.to_string());
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_address() {
        assert_eq!(resolve_targets("8.8.8.8").unwrap(), vec!["8.8.8.8"]);
        assert_eq!(resolve_targets(" 1.1.1.1 ").unwrap(), vec!["1.1.1.1"]);
    }

    #[test]
    fn test_ipv6_literal_is_invalid_target() {
        assert!(matches!(resolve_targets("2001:db8::1"), Err(DetailError::InvalidTarget(_))));
        assert!(matches!(resolve_targets("::1"), Err(DetailError::InvalidTarget(_))));
    }

    #[test]
    fn test_missing_file_is_invalid_target() {
        assert!(matches!(
            resolve_targets("/nonexistent/peers.json"),
            Err(DetailError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_duplicates_removed() {
        let document = json!({
            "a": [["10.0.0.5", 6881]],
            "b": [["10.0.0.5", 6881]],
            "c": [["192.0.2.1", 51413], ["192.0.2.2", 1]]
        });
        assert_eq!(batch_targets(&document).unwrap(), vec!["10.0.0.5", "192.0.2.1"]);
    }

    #[test]
    fn test_bad_shape_reports_key() {
        assert_eq!(batch_targets(&json!({"a": [["1.2.3.4"]], "b": []})), Err("b".to_string()));
        assert_eq!(batch_targets(&json!({"a": [[6881]]})), Err("a".to_string()));
        assert_eq!(batch_targets(&json!([["1.2.3.4"]])), Err("<root>".to_string()));
    }

    #[test]
    fn test_empty_object() {
        assert!(batch_targets(&json!({})).unwrap().is_empty());
    }
}
