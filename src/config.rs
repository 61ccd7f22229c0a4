//! cpuscope configuration persistence (htoprc-style key=value format)
//!
//! Saves/loads settings to `~/.config/cpuscope/cpuscoperc` (or the
//! platform's config directory via `dirs`).

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::color_scheme::ColorSchemeId;

/// Get the config file path: <config_dir>/cpuscope/cpuscoperc
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cpuscope").join("cpuscoperc"))
}

/// Persistable settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Blocking window for one utilization measurement
    pub sample_interval_ms: u64,
    /// Full auto-refresh cycle length
    pub auto_interval_ms: u64,
    /// Begin with auto-refresh already running
    pub auto_refresh_on_start: bool,
    /// Where "Save report" writes
    pub report_path: PathBuf,
    pub color_scheme_id: ColorSchemeId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_interval_ms: 500,
            auto_interval_ms: 5000,
            auto_refresh_on_start: false,
            report_path: PathBuf::from("cpu_report.txt"),
            color_scheme_id: ColorSchemeId::Default,
        }
    }
}

impl Config {
    /// Load config from file, returning defaults if file doesn't exist
    pub fn load() -> Self {
        let path = match config_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse the key=value body. Unknown keys are ignored; out-of-range
    /// intervals clamp to sane bounds.
    pub fn parse(content: &str) -> Self {
        let mut cfg = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();
                match key {
                    "sample_interval_ms" => {
                        if let Ok(v) = value.parse::<u64>() {
                            cfg.sample_interval_ms = v.clamp(100, 5000);
                        }
                    }
                    "auto_interval_ms" => {
                        if let Ok(v) = value.parse::<u64>() {
                            cfg.auto_interval_ms = v.clamp(1000, 60000);
                        }
                    }
                    "auto_refresh_on_start" => cfg.auto_refresh_on_start = value == "1",
                    "report_path" => {
                        if !value.is_empty() {
                            cfg.report_path = PathBuf::from(value);
                        }
                    }
                    "color_scheme" => {
                        if let Ok(idx) = value.parse::<usize>() {
                            cfg.color_scheme_id = ColorSchemeId::from_index(idx);
                        }
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }

        cfg
    }

    /// Render the key=value body written to disk
    pub fn render(&self) -> String {
        let b = |v: bool| if v { "1" } else { "0" };

        let lines = vec![
            "# cpuscope configuration file".to_string(),
            String::new(),
            format!("sample_interval_ms={}", self.sample_interval_ms),
            format!("auto_interval_ms={}", self.auto_interval_ms),
            format!("auto_refresh_on_start={}", b(self.auto_refresh_on_start)),
            format!("report_path={}", self.report_path.display()),
            format!("color_scheme={}", self.color_scheme_id as usize),
        ];

        lines.join("\n") + "\n"
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), String> {
        let path = match config_path() {
            Some(p) => p,
            None => return Err("Could not determine config path".into()),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config dir: {}", e))?;
        }

        let mut file = fs::File::create(&path)
            .map_err(|e| format!("Failed to create config file: {}", e))?;
        file.write_all(self.render().as_bytes())
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }
}
