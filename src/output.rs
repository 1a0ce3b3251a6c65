use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::Result;

/// Write a payload to `<name>.json` in the current working directory,
/// replacing any previous file.
pub fn write_fixture_file(name: &str, payload: &impl Serialize) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{}.json", name));
    write_to(&path, payload)?;
    Ok(path)
}

fn write_to(path: &Path, payload: &impl Serialize) -> Result<()> {
    std::fs::write(path, render(payload)?)?;
    Ok(())
}

// 2-space indentation, sorted keys, trailing newline. Sorted key order relies
// on serde_json's default BTree-backed Map; the preserve_order feature must
// stay off.
fn render(payload: &impl Serialize) -> Result<String> {
    let mut json = serde_json::to_string_pretty(payload)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_is_pretty_with_trailing_newline() {
        let rendered = render(&json!({"id": 1, "name": "a"})).unwrap();
        assert_eq!(rendered, "{\n  \"id\": 1,\n  \"name\": \"a\"\n}\n");
    }

    #[test]
    fn test_render_sorts_keys_at_every_level() {
        let payload: serde_json::Value =
            serde_json::from_str(r#"{"z": 1, "a": {"y": true, "b": [2, 1]}}"#).unwrap();
        let rendered = render(&payload).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"a\": {\n    \"b\": [\n      2,\n      1\n    ],\n    \"y\": true\n  },\n  \"z\": 1\n}\n"
        );
    }

    #[test]
    fn test_render_round_trips() {
        let payload = json!({
            "user": {"id": 11, "identities": []},
            "tags": ["a", "b"],
            "count": 3
        });
        let rendered = render(&payload).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed, payload);
    }

    #[test]
    fn test_write_creates_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");

        write_to(&path, &json!({"id": 1})).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  \"id\": 1\n}\n"
        );

        write_to(&path, &json!({"id": 2})).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  \"id\": 2\n}\n"
        );
    }

    #[test]
    fn test_write_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("project.json");

        let err = write_to(&path, &json!({"id": 1})).unwrap_err();
        assert!(matches!(err, crate::errors::FetchError::Io(_)));
    }
}
