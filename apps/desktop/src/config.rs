use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{anyhow, Context};
use client_core::DEFAULT_API_BASE;
use url::Url;

const SETTINGS_FILE: &str = "pharmacis.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub session_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.into(),
            session_file: None,
            log_filter: "warn".into(),
        }
    }
}

/// Defaults, then `pharmacis.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

pub(crate) fn settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = v.clone();
            }
            if let Some(v) = file_cfg.get("session_file") {
                settings.session_file = Some(PathBuf::from(v));
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
    }

    if let Some(v) = env("PHARMACIS_API_BASE") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = env("PHARMACIS_SESSION_FILE") {
        settings.session_file = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__SESSION_FILE") {
        settings.session_file = Some(PathBuf::from(v));
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}

pub fn validate_api_base(raw: &str) -> anyhow::Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid API base url '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url.as_str().trim_end_matches('/').to_string()),
        other => Err(anyhow!("API base url must be http(s), got scheme '{other}'")),
    }
}

pub fn session_path(settings: &Settings) -> anyhow::Result<PathBuf> {
    if let Some(path) = &settings.session_file {
        return Ok(path.clone());
    }
    let base = dirs::data_local_dir()
        .ok_or_else(|| anyhow!("unable to resolve local app data dir"))?;
    Ok(base.join("pharmacis").join("session.json"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
