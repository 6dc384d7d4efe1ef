//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "ouijan", "greet-gui").ok_or_else(|| {
        Error::Invalid {
            message: "Could not find local data directory".to_string(),
        }
    })?;
    let dir = dirs.data_local_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON config file, falling back to defaults when absent
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config: AppConfig =
            load_config("does-not-exist.json").expect("defaults for missing file");
        assert_eq!(config.greet.default_name, "anonymous");
    }
}
