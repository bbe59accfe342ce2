//! Broadcaster option files
//!
//! Options are stored as JSON or TOML, chosen by file extension. The default
//! location is `<config_dir>/broadcast/options.toml`.

use broadcast_core::BroadcastOptions;
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "broadcast";

/// Default options file name
pub const OPTIONS_FILE_NAME: &str = "options.toml";

/// Supported option file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl OptionsFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(SettingsError::UnsupportedFormat(other.to_string())),
            None => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl std::fmt::Display for OptionsFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// Parse options from a string. Unknown keys are ignored.
pub fn parse_options(content: &str, format: OptionsFormat) -> SettingsResult<BroadcastOptions> {
    let options = match format {
        OptionsFormat::Json => serde_json::from_str(content)?,
        OptionsFormat::Toml => toml::from_str(content)?,
    };
    Ok(options)
}

/// Serialize options to a string
pub fn render_options(options: &BroadcastOptions, format: OptionsFormat) -> SettingsResult<String> {
    let content = match format {
        OptionsFormat::Json => serde_json::to_string_pretty(options)?,
        OptionsFormat::Toml => toml::to_string_pretty(options)?,
    };
    Ok(content)
}

/// Load options from a `.json` or `.toml` file
pub fn load_options(path: &Path) -> SettingsResult<BroadcastOptions> {
    let format = OptionsFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let options = parse_options(&content, format)?;
    tracing::debug!("Loaded {} options from {}", format, path.display());
    Ok(options)
}

/// Save options to a `.json` or `.toml` file, creating parent directories
pub fn save_options(options: &BroadcastOptions, path: &Path) -> SettingsResult<()> {
    let format = OptionsFormat::from_path(path)?;
    let content = render_options(options, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::debug!("Saved {} options to {}", format, path.display());
    Ok(())
}

/// Default per-user options path
pub fn default_options_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(OPTIONS_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".to_string())
        })
}

/// Load options from `path`, falling back to defaults when the file is absent.
///
/// Without a path the default per-user location is used.
pub fn load_or_default(path: Option<&Path>) -> SettingsResult<BroadcastOptions> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_options_path() {
            Ok(path) => path,
            Err(_) => return Ok(BroadcastOptions::default()),
        },
    };

    if !path.exists() {
        tracing::debug!("No options file at {}, using defaults", path.display());
        return Ok(BroadcastOptions::default());
    }
    load_options(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            OptionsFormat::from_path(Path::new("a/options.json")).unwrap(),
            OptionsFormat::Json
        );
        assert_eq!(
            OptionsFormat::from_path(Path::new("options.toml")).unwrap(),
            OptionsFormat::Toml
        );
        assert!(matches!(
            OptionsFormat::from_path(Path::new("options.yaml")),
            Err(SettingsError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
        assert!(OptionsFormat::from_path(Path::new("options")).is_err());
    }

    #[test]
    fn test_parse_toml() {
        let options = parse_options("alias_on = false\n", OptionsFormat::Toml).unwrap();
        assert!(!options.alias_on);

        let options = parse_options("", OptionsFormat::Toml).unwrap();
        assert!(options.alias_on);
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let options =
            parse_options(r#"{"aliasOn": false, "color": "red"}"#, OptionsFormat::Json).unwrap();
        assert!(!options.alias_on);

        let options = parse_options("unknown = 3\n", OptionsFormat::Toml).unwrap();
        assert!(options.alias_on);
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        assert!(matches!(
            parse_options(r#"{"alias_on": "yes"}"#, OptionsFormat::Json),
            Err(SettingsError::JsonError(_))
        ));
        assert!(matches!(
            parse_options("alias_on = 1\n", OptionsFormat::Toml),
            Err(SettingsError::TomlError(_))
        ));
    }

    #[test]
    fn test_render_toml() {
        let content =
            render_options(&BroadcastOptions::without_aliases(), OptionsFormat::Toml).unwrap();
        assert!(content.contains("alias_on = false"));
    }
}
