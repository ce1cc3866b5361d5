//! JSON document helpers for client config files.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Load a JSON object from `path`. A missing file yields an empty map.
pub fn load_json_map(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // An empty file is treated like a missing one
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    let value: Value = serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::Shape {
            path: path.to_path_buf(),
            key: "<root>".to_string(),
        }),
    }
}

/// Write `map` as pretty JSON, replacing `path` atomically.
///
/// The document is written to a temp file next to the target and renamed
/// over it, so readers never observe a partial file. An existing symlink is
/// followed so its target is updated in place, and the permissions of an
/// existing file are carried over to the replacement.
pub fn write_json_map(path: &Path, map: &Map<String, Value>) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = if path.exists() {
        std::fs::canonicalize(path).map_err(write_err)?
    } else {
        path.to_path_buf()
    };
    let permissions = std::fs::metadata(&target).ok().map(|m| m.permissions());

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut bytes = serde_json::to_vec_pretty(map).map_err(|source| ConfigError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    bytes.push(b'\n');

    let file_name = target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "config.json".to_string());
    let tmp_path = target.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    let result = std::fs::write(&tmp_path, bytes)
        .and_then(|()| match permissions {
            Some(permissions) => std::fs::set_permissions(&tmp_path, permissions),
            None => Ok(()),
        })
        .and_then(|()| std::fs::rename(&tmp_path, &target));
    if let Err(source) = result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(source));
    }
    Ok(())
}

/// Extract a nested map from a root map at the given key path.
///
/// Missing keys yield an empty map; a non-object value on the path is an error.
pub fn extract_map_at_path(
    root: &Map<String, Value>,
    path: &[&str],
    file: &Path,
) -> Result<Map<String, Value>, ConfigError> {
    let mut current = root;
    for segment in path {
        match current.get(*segment) {
            None | Some(Value::Null) => return Ok(Map::new()),
            Some(Value::Object(map)) => current = map,
            Some(_) => {
                return Err(ConfigError::Shape {
                    path: file.to_path_buf(),
                    key: segment.to_string(),
                });
            }
        }
    }
    Ok(current.clone())
}

/// Set a map at a nested key path, creating intermediate objects as needed.
pub fn set_map_at_path(
    root: &mut Map<String, Value>,
    path: &[&str],
    map: Map<String, Value>,
    file: &Path,
) -> Result<(), ConfigError> {
    let Some((last, parents)) = path.split_last() else {
        *root = map;
        return Ok(());
    };

    let mut current = root;
    for segment in parents {
        let next = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if next.is_null() {
            *next = Value::Object(Map::new());
        }
        current = match next {
            Value::Object(m) => m,
            _ => {
                return Err(ConfigError::Shape {
                    path: file.to_path_buf(),
                    key: segment.to_string(),
                });
            }
        };
    }
    current.insert(last.to_string(), Value::Object(map));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn load_nonexistent_file_returns_empty_map() {
        let result = load_json_map(Path::new("/nonexistent/path/config.json")).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn load_blank_file_returns_empty_map() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "  \n").unwrap();

        assert!(load_json_map(&path).unwrap().is_empty());
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_json_map(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_array_root_is_shape_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = load_json_map(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Shape { .. }));
    }

    #[test]
    fn write_creates_parent_directories_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/deep/config.json");
        let map = as_map(json!({"key": "value"}));

        write_json_map(&path, &map).unwrap();

        assert_eq!(load_json_map(&path).unwrap(), map);
        let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn extract_missing_path_returns_empty_map() {
        let root = as_map(json!({"other": true}));

        let map = extract_map_at_path(&root, &["mcp", "servers"], Path::new("f.json")).unwrap();

        assert!(map.is_empty());
    }

    #[test]
    fn extract_non_object_segment_is_error() {
        let root = as_map(json!({"mcp": "enabled"}));

        let err = extract_map_at_path(&root, &["mcp", "servers"], Path::new("f.json")).unwrap_err();

        assert!(matches!(err, ConfigError::Shape { ref key, .. } if key == "mcp"));
    }

    #[test]
    fn set_creates_intermediate_objects_and_keeps_siblings() {
        let mut root = as_map(json!({"editor.fontSize": 14, "mcp": {"discovery": true}}));
        let servers = as_map(json!({"demo": {"command": "node", "args": []}}));

        set_map_at_path(&mut root, &["mcp", "servers"], servers, Path::new("f.json")).unwrap();

        assert_eq!(
            Value::Object(root),
            json!({
                "editor.fontSize": 14,
                "mcp": {
                    "discovery": true,
                    "servers": {"demo": {"command": "node", "args": []}}
                }
            })
        );
    }
}
