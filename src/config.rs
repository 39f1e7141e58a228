use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigMondayPolicy {
    Past,
    Next,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigMalformedPolicy {
    Fail,
    Skip,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigFormat {
    Table,
    Json,
    Csv,
    Html,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) monday: Option<ConfigMondayPolicy>,
    #[serde(default)]
    pub(crate) on_malformed: Option<ConfigMalformedPolicy>,
    #[serde(default)]
    pub(crate) format: Option<ConfigFormat>,
    #[serde(default)]
    pub(crate) url_template: Option<String>,
    #[serde(default)]
    pub(crate) source_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/relcal/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("relcal").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/relcal/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("relcal").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.relcal.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".relcal.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        for p in &paths {
            println!("Path: {:?}, exists: {}", p, p.exists());
        }
        assert!(!paths.is_empty());
    }

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.debug);
        assert!(config.monday.is_none());
        assert!(config.source_dir.is_none());
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
            no_color = true
            debug = true
            order = "desc"
            color = "never"
            monday = "next"
            on_malformed = "skip"
            format = "csv"
            url_template = "https://example.com/{month}-{year}"
            source_dir = "/tmp/pages"
            timezone = "Europe/Berlin"
            "#,
        )
        .unwrap();
        assert!(config.no_color);
        assert!(config.debug);
        assert!(matches!(config.order, Some(ConfigSortOrder::Desc)));
        assert!(matches!(config.color, Some(ConfigColorMode::Never)));
        assert!(matches!(config.monday, Some(ConfigMondayPolicy::Next)));
        assert!(matches!(config.on_malformed, Some(ConfigMalformedPolicy::Skip)));
        assert!(matches!(config.format, Some(ConfigFormat::Csv)));
        assert_eq!(config.source_dir, Some(PathBuf::from("/tmp/pages")));
        assert_eq!(config.timezone.as_deref(), Some("Europe/Berlin"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(toml::from_str::<Config>(r#"monday = "someday""#).is_err());
    }
}
