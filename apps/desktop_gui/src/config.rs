use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use client_core::{
    gemini::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL},
    GeminiConfig,
};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "timetravel.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub assets_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.into(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    gemini_api_key: Option<String>,
    gemini_model: Option<String>,
    gemini_endpoint: Option<String>,
    assets_dir: Option<PathBuf>,
}

/// Values passed on the command line; they win over file and environment.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub assets_dir: Option<PathBuf>,
}

impl Settings {
    /// Chat collaborator configuration, or `None` when no key is set.
    pub fn gemini_config(&self) -> Option<GeminiConfig> {
        self.gemini_api_key.as_ref().map(|api_key| GeminiConfig {
            endpoint: self.gemini_endpoint.clone(),
            model: self.gemini_model.clone(),
            api_key: api_key.clone(),
        })
    }

    fn apply_file(&mut self, file_cfg: FileSettings) {
        if let Some(v) = non_blank(file_cfg.gemini_api_key) {
            self.gemini_api_key = Some(v);
        }
        if let Some(v) = non_blank(file_cfg.gemini_model) {
            self.gemini_model = v;
        }
        if let Some(v) = non_blank(file_cfg.gemini_endpoint) {
            self.gemini_endpoint = v;
        }
        if let Some(v) = file_cfg.assets_dir {
            self.assets_dir = v;
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| non_blank(lookup(name));

        if let Some(v) = var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(v);
        }
        if let Some(v) = var("APP__GEMINI_API_KEY") {
            self.gemini_api_key = Some(v);
        }
        if let Some(v) = var("APP__GEMINI_MODEL") {
            self.gemini_model = v;
        }
        if let Some(v) = var("APP__GEMINI_ENDPOINT") {
            self.gemini_endpoint = v;
        }
        if let Some(v) = var("APP__ASSETS_DIR") {
            self.assets_dir = PathBuf::from(v);
        }
    }

    pub fn apply_cli(&mut self, overrides: CliOverrides) {
        if let Some(v) = non_blank(overrides.model) {
            self.gemini_model = v;
        }
        if let Some(v) = non_blank(overrides.endpoint) {
            self.gemini_endpoint = v;
        }
        if let Some(v) = overrides.assets_dir {
            self.assets_dir = v;
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

/// Defaults, then the settings file, then environment variables. An explicit
/// `config_path` must exist; the default file is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(config_path, |name| std::env::var(name).ok())
}

fn load_settings_with(
    config_path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match config_path {
        Some(path) => settings.apply_file(read_file_settings(path)?),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                settings.apply_file(read_file_settings(default_path)?);
            }
        }
    }

    settings.apply_env(lookup);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_settings_file(contents: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let temp_root = env::temp_dir().join(format!("timetravel_settings_test_{suffix}"));
        fs::create_dir_all(&temp_root).expect("temp root");
        let path = temp_root.join("timetravel.toml");
        fs::write(&path, contents).expect("write settings");
        path
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_public_gemini_without_a_key() {
        let settings = Settings::default();
        assert_eq!(settings.gemini_api_key, None);
        assert_eq!(settings.gemini_model, "gemini-2.5-flash-preview-09-2025");
        assert_eq!(
            settings.gemini_endpoint,
            "https://generativelanguage.googleapis.com"
        );
        assert!(settings.gemini_config().is_none());
    }

    #[test]
    fn file_values_override_defaults_and_env_overrides_file() {
        let path = temp_settings_file(
            r#"
gemini_api_key = "from-file"
gemini_model = "file-model"
assets_dir = "/srv/timetravel/assets"
"#,
        );

        let settings =
            load_settings_with(Some(&path), env_of(&[("APP__GEMINI_MODEL", "env-model")]))
                .expect("load settings");
        assert_eq!(settings.gemini_api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.gemini_model, "env-model");
        assert_eq!(settings.assets_dir, PathBuf::from("/srv/timetravel/assets"));

        let config = settings.gemini_config().expect("gemini config");
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.model, "env-model");

        if let Some(parent) = path.parent() {
            fs::remove_dir_all(parent).expect("cleanup");
        }
    }

    #[test]
    fn prefixed_env_key_wins_and_blank_keys_count_as_missing() {
        let settings = load_settings_with(
            None,
            env_of(&[("GEMINI_API_KEY", "plain"), ("APP__GEMINI_API_KEY", "prefixed")]),
        )
        .expect("load settings");
        assert_eq!(settings.gemini_api_key.as_deref(), Some("prefixed"));

        let settings = load_settings_with(None, env_of(&[("GEMINI_API_KEY", "   ")]))
            .expect("load settings");
        assert_eq!(settings.gemini_api_key, None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = env::temp_dir().join("timetravel_missing_dir/none.toml");
        let err = load_settings_with(Some(&missing), env_of(&[])).expect_err("missing file");
        assert!(err.to_string().contains("failed to read settings file"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let path = temp_settings_file("bind_addr = \"0.0.0.0:1\"\n");
        assert!(load_settings_with(Some(&path), env_of(&[])).is_err());
        if let Some(parent) = path.parent() {
            fs::remove_dir_all(parent).expect("cleanup");
        }
    }

    #[test]
    fn cli_overrides_win() {
        let mut settings = Settings::default();
        settings.apply_cli(CliOverrides {
            model: Some("cli-model".into()),
            endpoint: Some("http://127.0.0.1:9000".into()),
            assets_dir: None,
        });
        assert_eq!(settings.gemini_model, "cli-model");
        assert_eq!(settings.gemini_endpoint, "http://127.0.0.1:9000");
        assert_eq!(settings.assets_dir, PathBuf::from("assets"));
    }
}
