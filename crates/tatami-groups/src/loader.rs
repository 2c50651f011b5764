//! Configuration file discovery and loading

use crate::options::ConfigOptions;
use schemars::schema_for;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tatami_core::{Result, TatamiError};

/// Config file names in priority order
pub const CONFIG_FILES: &[&str] = &[
    ".tatamirc.json",
    ".tatamirc.toml",
    "tatami.config.json",
    "tatami.config.jsonc",
];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from `start_path`
    ///
    /// Tries the names in [`CONFIG_FILES`] order in each directory, starting
    /// from the given one and moving up until a config is found or the
    /// filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let current = start_path
            .canonicalize()
            .map_err(|e| TatamiError::config_error(format!("invalid path: {e}")))?;

        for dir in current.ancestors() {
            for filename in CONFIG_FILES {
                let config_path = dir.join(filename);
                if config_path.is_file() {
                    tracing::debug!("found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    ///
    /// The format follows the extension: `.json` is strict JSON, `.jsonc`
    /// allows comments and trailing commas, `.toml` is TOML.
    pub fn load_from_file(path: &Path) -> Result<ConfigOptions> {
        let content = fs::read_to_string(path).map_err(|e| TatamiError::io_error(path, e))?;
        let ext = path.extension().and_then(|e| e.to_str());

        let parsed = match ext {
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            Some("jsonc") => json5::from_str(&content).map_err(|e| e.to_string()),
            Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
            _ => Err("unsupported file extension (expected .json, .jsonc, or .toml)".to_string()),
        };

        parsed.map_err(|e| {
            TatamiError::config_error(format!(
                "failed to load config from '{}': {e}",
                path.display()
            ))
        })
    }

    /// Load config from an explicit path or auto-discover one
    ///
    /// A missing explicit path is an error; a missing discovered config
    /// falls back to the defaults.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<ConfigOptions> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(TatamiError::config_error(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(ConfigOptions::default()),
        }
    }
}

/// JSON Schema for the config file, for editor completion
pub fn config_schema() -> serde_json::Value {
    let schema = schema_for!(ConfigOptions);
    let mut value = json!(schema);
    value["$schema"] = json!("http://json-schema.org/draft-07/schema#");
    value["title"] = json!("Tatami Configuration");
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::StandardPreset;
    use std::fs;
    use tatami_core::Toggle;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_json_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "tatami.config.json",
            r#"{
                "enableAllGroups": true,
                "js": { "preset": "recommended" }
            }"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(config.enable_all_groups);
        match config.js {
            Some(Toggle::Options(js)) => assert_eq!(js.preset, StandardPreset::Recommended),
            other => panic!("expected object options, got {other:?}"),
        }
    }

    #[test]
    fn load_jsonc_config_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "tatami.config.jsonc",
            r#"{
                // groups toggled by hand
                "ts": true,
                "svelte": false,
            }"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(matches!(config.ts, Some(Toggle::Enabled(true))));
        assert!(matches!(config.svelte, Some(Toggle::Enabled(false))));
    }

    #[test]
    fn load_toml_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".tatamirc.toml",
            r#"
enableAllGroups = false

[stylistic]
indent = 4
semi = true
"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        match config.stylistic {
            Some(Toggle::Options(stylistic)) => {
                assert_eq!(stylistic.indent, crate::options::Indent::Spaces(4));
                assert!(stylistic.semi);
            }
            other => panic!("expected object options, got {other:?}"),
        }
    }

    #[test]
    fn auto_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();
        create_temp_config(temp_dir.path(), "tatami.config.json", "{}");

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert!(found.is_some());
        assert_eq!(
            found.unwrap().file_name().unwrap(),
            "tatami.config.json"
        );
    }

    #[test]
    fn auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "tatami.config.json", "{}");
        create_temp_config(temp_dir.path(), ".tatamirc.json", "{}");

        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".tatamirc.json");
    }

    #[test]
    fn missing_discovered_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load(None, Some(temp_dir.path())).unwrap();
        assert!(!config.enable_all_groups);
        assert!(config.js.is_none());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = ConfigLoader::load(Some(Path::new("nonexistent.json")), None);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), "tatami.config.json", "{ invalid json }");
        assert!(ConfigLoader::load_from_file(&config_path).is_err());
    }

    #[test]
    fn schema_lists_the_groups() {
        let schema = config_schema();
        assert_eq!(schema["title"], "Tatami Configuration");
        assert!(schema["properties"]["enableAllGroups"].is_object());
        assert!(schema["properties"]["ts"].is_object());
    }
}
