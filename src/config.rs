// src/config.rs

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str =
    "https://botfilter-h5ddh6dye8exb7ha.centralus-01.azurewebsites.net";

const BASE_URL_ENV: &str = "APPLYTUI_BASE_URL";

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    base_url: Option<String>,
}

fn config_path() -> PathBuf {
    let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push("applytui");
    dir.push("config.toml");
    dir
}

fn load_file_config() -> Option<FileConfig> {
    fs::read_to_string(config_path())
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
}

/// Resolve the service base URL: CLI flag, then environment, then config
/// file, then the built-in default.
pub fn resolve_base_url(flag: Option<String>) -> Result<String, String> {
    let raw = flag
        .or_else(|| std::env::var(BASE_URL_ENV).ok())
        .or_else(|| load_file_config().and_then(|c| c.base_url))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    normalize_base_url(&raw)
}

/// Accepts absolute http(s) URLs only; stores them without a trailing
/// slash so endpoint paths can be appended verbatim.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| format!("Invalid base URL `{}`: {}", raw, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("Base URL must be http(s), got `{}`", raw));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
