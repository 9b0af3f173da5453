use crate::constants::{IMAGE_EXTENSIONS, INPUT_DIR, OUTPUT_FILE, SETTINGS_FILE};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Everything a geotag run needs: where images are read from, where the
/// geotag file is written, and which extensions count as images.
#[derive(Debug, Clone, PartialEq)]
pub struct GeotagConfig {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    /// Lowercase, without the leading dot
    pub extensions: Vec<String>,
}

impl Default for GeotagConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            output_file: PathBuf::from(OUTPUT_FILE),
            extensions: IMAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GeotagConfig {
    /// Loads overrides from the settings file next to the executable.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Loads overrides from `config_path`. A missing file means defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = GeotagConfig::default();
        if !config_path.exists() {
            return Ok(config);
        }

        let file = File::open(config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim().trim_matches('"');
                config_map.insert(key.trim().to_string(), value.to_string());
            }
        }

        if let Some(input_dir) = config_map.get("input_dir") {
            config.input_dir = PathBuf::from(input_dir);
        }
        if let Some(output_file) = config_map.get("output_file") {
            config.output_file = PathBuf::from(output_file);
        }
        if let Some(extensions) = config_map.get("extensions") {
            let parsed: Vec<String> = extensions
                .split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect();
            if !parsed.is_empty() {
                config.extensions = parsed;
            }
        }

        Ok(config)
    }

    pub fn is_image(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
            .unwrap_or(false)
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push(SETTINGS_FILE);
        path
    }
}
