// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Tunables for the QC rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QcConfig {
    /// Releases scheduled closer than this many days get a warning.
    pub min_release_notice_days: i64,
    /// More distinct audio languages than this across a release get a warning.
    pub max_distinct_languages: usize,
    pub max_artist_name_length: usize,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            min_release_notice_days: 14,
            max_distinct_languages: 2,
            max_artist_name_length: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseTimeConfig {
    pub default_timezone: String,
    /// Zones the UTC release instant is projected into for confirmation.
    pub display_zones: Vec<String>,
}

impl Default for ReleaseTimeConfig {
    fn default() -> Self {
        Self {
            default_timezone: "Asia/Seoul".to_string(),
            display_zones: vec![
                "Asia/Seoul".to_string(),
                "Asia/Tokyo".to_string(),
                "Europe/London".to_string(),
                "America/New_York".to_string(),
                "America/Los_Angeles".to_string(),
                "UTC".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_file_size_bytes: u64,
    pub allowed_formats: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 500 * 1024 * 1024,
            allowed_formats: ["wav", "flac", "mp3", "aiff", "m4a"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    pub endpoint: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_token: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub qc: QcConfig,
    pub release_time: ReleaseTimeConfig,
    pub upload: UploadConfig,
    pub submission: SubmissionConfig,
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: RELEASEKIT_).
pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("RELEASEKIT_").split("__"));

    let config: AppConfig = figment.extract()?;
    info!(target: "config", "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = load(None).expect("defaults load");
            assert_eq!(config.qc.min_release_notice_days, 14);
            assert_eq!(config.release_time.default_timezone, "Asia/Seoul");
            assert!(config.upload.allowed_formats.iter().any(|f| f == "flac"));
            assert!(config.submission.endpoint.is_none());
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[qc]\nmin_release_notice_days = 21\nmax_distinct_languages = 3\nmax_artist_name_length = 80"
        )
        .expect("write config");

        Jail::expect_with(|_jail| {
            let config = load(Some(file.path())).expect("file loads");
            assert_eq!(config.qc.min_release_notice_days, 21);
            assert_eq!(config.qc.max_distinct_languages, 3);
            assert_eq!(config.telemetry.log_level, "info");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_nested_keys() {
        Jail::expect_with(|jail| {
            jail.set_env("RELEASEKIT_TELEMETRY__LOG_LEVEL", "debug");
            jail.set_env("RELEASEKIT_SUBMISSION__ENDPOINT", "https://qc.example.test/submit");
            let config = load(None).expect("env loads");
            assert_eq!(config.telemetry.log_level, "debug");
            assert_eq!(
                config.submission.endpoint.as_deref(),
                Some("https://qc.example.test/submit")
            );
            Ok(())
        });
    }
}
