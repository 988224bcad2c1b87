//! qrprint runtime configuration handling

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Directory receiving the rendered PNG files
    pub output_dir: PathBuf,
    /// Pixel width of each QR module in the rendered image
    pub module_size: u32,
    /// Whether to render the 4-module quiet zone border
    pub quiet_zone: bool,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./qr-prints"),
            module_size: 10,
            quiet_zone: true,
            logging: LoggingOptions::default(),
        }
    }
}

impl GeneratorOptions {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    ///
    /// Also returns the path of the configuration file used, if any, so the
    /// caller can report it once the tracing subscriber is installed.
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let source = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover_file()?,
        };

        let mut config = match &source {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        Ok((config, source))
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        let path = cwd.join("qrprint.toml");
        if path.exists() {
            return Ok(Some(path));
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config).join("qrprint").join("config.toml");
            if path.exists() {
                return Ok(Some(path));
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse TOML {}: {e}", path.display())))
    }

    /// Apply environment variable overrides after file/default loading.
    ///
    /// Unparsable values are configuration errors, not silently retained
    /// defaults.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dir) = env::var("QRPRINT_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                self.output_dir = PathBuf::from(dir);
            }
        }
        if let Ok(size) = env::var("QRPRINT_MODULE_SIZE") {
            let parsed = size.parse::<u32>().map_err(|e| {
                Error::Config(format!("Invalid QRPRINT_MODULE_SIZE '{size}': {e}"))
            })?;
            self.module_size = parsed.max(1);
        }
        if let Ok(quiet) = env::var("QRPRINT_QUIET_ZONE") {
            self.quiet_zone = parse_bool(&quiet).ok_or_else(|| {
                Error::Config(format!(
                    "Invalid QRPRINT_QUIET_ZONE '{quiet}', expected on/off"
                ))
            })?;
        }
        self.logging.apply_env_overrides()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRPRINT_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stderr logging
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: true,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level) = env::var("QRPRINT_LOG_LEVEL") {
            // Validated by EnvFilter when the subscriber is installed.
            self.level = level;
        }
        if let Ok(file) = env::var("QRPRINT_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QRPRINT_LOG_COLOR") {
            self.color = parse_bool(&color).ok_or_else(|| {
                Error::Config(format!(
                    "Invalid QRPRINT_LOG_COLOR '{color}', expected on/off"
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_print_settings() {
        let config = GeneratorOptions::default();
        assert_eq!(config.output_dir, PathBuf::from("./qr-prints"));
        assert_eq!(config.module_size, 10);
        assert!(config.quiet_zone);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_toml() {
        let config: GeneratorOptions = toml::from_str(
            r#"
            output_dir = "/tmp/tags"
            module_size = 6

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/tags"));
        assert_eq!(config.module_size, 6);
        assert!(config.quiet_zone);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config: GeneratorOptions = toml::from_str("").unwrap();
        assert_eq!(config.module_size, 10);
    }

    // Tests below touch process environment; serialize them.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn test_env_overrides_reject_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap();

        unsafe { env::set_var("QRPRINT_MODULE_SIZE", "6") };
        let mut config = GeneratorOptions::default();
        config.apply_env_overrides().unwrap();
        assert_eq!(config.module_size, 6);

        unsafe { env::set_var("QRPRINT_MODULE_SIZE", "not-a-number") };
        let mut config = GeneratorOptions::default();
        assert!(matches!(
            config.apply_env_overrides(),
            Err(Error::Config(_))
        ));

        unsafe { env::set_var("QRPRINT_MODULE_SIZE", "10") };
        unsafe { env::set_var("QRPRINT_QUIET_ZONE", "sideways") };
        let mut config = GeneratorOptions::default();
        assert!(matches!(
            config.apply_env_overrides(),
            Err(Error::Config(_))
        ));

        unsafe {
            env::remove_var("QRPRINT_MODULE_SIZE");
            env::remove_var("QRPRINT_QUIET_ZONE");
        }
    }

    #[test]
    fn test_load_reports_config_source() {
        let _guard = ENV_LOCK.lock().unwrap();

        let dir = std::env::temp_dir().join(format!("qrprint-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("qrprint.toml");
        fs::write(&path, "module_size = 4\n").unwrap();

        let (config, source) = GeneratorOptions::load(Some(&path)).unwrap();
        assert_eq!(config.module_size, 4);
        assert_eq!(source, Some(path));

        fs::remove_dir_all(&dir).unwrap();
    }
}
