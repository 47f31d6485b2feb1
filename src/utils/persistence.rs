//! JSON persistence helpers for ~/.skyward/ save files.
//!
//! Reads degrade to the type's default on any failure; callers that care
//! about write failures get an `io::Result` back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.skyward/ directory, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".skyward");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a save file in ~/.skyward/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if it is missing or malformed.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Write a value as pretty-printed JSON, replacing the whole file.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("skyward_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default(&temp_file("missing.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_malformed_returns_default() {
        let path = temp_file("malformed.json");
        fs::write(&path, "{not valid json").unwrap();
        let val: Vec<String> = load_json_or_default(&path);
        assert!(val.is_empty());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("roundtrip.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default(&path);
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }
}
