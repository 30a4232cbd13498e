use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

use super::viewport::NARROW_BREAKPOINT_PX;

/// Default settings embedded in the binary
pub const DEFAULT_SETTINGS: &str = r#"
[submission]
mode = "simulated"
webhook_url = ""
simulated_delay_ms = 2000

[form]
collect_email = false

[ui]
toast_duration_ms = 5000
narrow_breakpoint_px = 768
"#;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("webhook mode requires submission.webhook_url")]
    MissingWebhookUrl,

    #[error("webhook url must start with http:// or https://: {0}")]
    InvalidWebhookUrl(String),

    #[error("invalid value for {key}: {value:?}")]
    InvalidOverride { key: &'static str, value: String },
}

/// How a valid submission is processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    /// Fixed delay followed by a success toast, no network
    #[default]
    Simulated,
    /// Multipart POST to the configured webhook
    Webhook,
}

impl FromStr for SubmissionMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(SubmissionMode::Simulated),
            "webhook" => Ok(SubmissionMode::Webhook),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmissionSettings {
    pub mode: SubmissionMode,
    pub webhook_url: String,
    pub simulated_delay_ms: u32,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            mode: SubmissionMode::Simulated,
            webhook_url: String::new(),
            simulated_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    pub collect_email: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub toast_duration_ms: u32,
    pub narrow_breakpoint_px: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5000,
            narrow_breakpoint_px: NARROW_BREAKPOINT_PX as u32,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalystSettings {
    pub submission: SubmissionSettings,
    pub form: FormSettings,
    pub ui: UiSettings,
}

/// Values supplied at build time that take precedence over the TOML file
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsOverrides<'a> {
    pub mode: Option<&'a str>,
    pub webhook_url: Option<&'a str>,
    pub collect_email: Option<&'a str>,
}

impl AnalystSettings {
    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies every valid override. Invalid ones are skipped and returned,
    /// so one bad value does not discard the others.
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides<'_>) -> Vec<SettingsError> {
        let mut rejected = Vec::new();
        if let Some(mode) = overrides.mode.filter(|v| !v.trim().is_empty()) {
            match mode.parse() {
                Ok(mode) => self.submission.mode = mode,
                Err(()) => rejected.push(SettingsError::InvalidOverride {
                    key: "ANALYST_SUBMISSION_MODE",
                    value: mode.to_string(),
                }),
            }
        }
        if let Some(url) = overrides.webhook_url.filter(|v| !v.trim().is_empty()) {
            self.submission.webhook_url = url.trim().to_string();
        }
        if let Some(flag) = overrides.collect_email.filter(|v| !v.trim().is_empty()) {
            match parse_flag(flag) {
                Some(collect_email) => self.form.collect_email = collect_email,
                None => rejected.push(SettingsError::InvalidOverride {
                    key: "ANALYST_COLLECT_EMAIL",
                    value: flag.to_string(),
                }),
            }
        }
        rejected
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.submission.mode != SubmissionMode::Webhook {
            return Ok(());
        }
        let url = self.submission.webhook_url.trim();
        if url.is_empty() {
            return Err(SettingsError::MissingWebhookUrl);
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(SettingsError::InvalidWebhookUrl(url.to_string()));
        }
        Ok(())
    }

    /// Same settings with submission forced to the simulated mode
    pub fn into_simulated(mut self) -> Self {
        self.submission.mode = SubmissionMode::Simulated;
        self
    }

    pub fn narrow_breakpoint(&self) -> f64 {
        f64::from(self.ui.narrow_breakpoint_px)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = AnalystSettings::from_toml(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings, AnalystSettings::default());
        assert_eq!(settings.submission.mode, SubmissionMode::Simulated);
        assert_eq!(settings.submission.simulated_delay_ms, 2000);
        assert_eq!(settings.ui.narrow_breakpoint_px, 768);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = AnalystSettings::from_toml("[form]\ncollect_email = true\n").unwrap();
        assert!(settings.form.collect_email);
        assert_eq!(settings.ui.toast_duration_ms, 5000);
    }

    #[test]
    fn test_unknown_mode_is_parse_error() {
        let result = AnalystSettings::from_toml("[submission]\nmode = \"batch\"\n");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_overrides() {
        let mut settings = AnalystSettings::default();
        let rejected = settings.apply_overrides(&SettingsOverrides {
            mode: Some("Webhook"),
            webhook_url: Some(" https://hooks.example.com/webhook/abc "),
            collect_email: Some("1"),
        });
        assert!(rejected.is_empty());
        assert_eq!(settings.submission.mode, SubmissionMode::Webhook);
        assert_eq!(settings.submission.webhook_url, "https://hooks.example.com/webhook/abc");
        assert!(settings.form.collect_email);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let mut settings = AnalystSettings::default();
        let rejected = settings.apply_overrides(&SettingsOverrides {
            mode: Some(""),
            webhook_url: Some("  "),
            collect_email: None,
        });
        assert!(rejected.is_empty());
        assert_eq!(settings, AnalystSettings::default());
    }

    #[test]
    fn test_bad_override_values() {
        let mut settings = AnalystSettings::default();
        let rejected = settings.apply_overrides(&SettingsOverrides {
            mode: Some("batch"),
            collect_email: Some("maybe"),
            ..Default::default()
        });
        assert_eq!(rejected.len(), 2);
        assert!(matches!(
            rejected[0],
            SettingsError::InvalidOverride { key: "ANALYST_SUBMISSION_MODE", .. }
        ));
        assert!(matches!(
            rejected[1],
            SettingsError::InvalidOverride { key: "ANALYST_COLLECT_EMAIL", .. }
        ));
        assert_eq!(settings, AnalystSettings::default());
    }

    #[test]
    fn test_bad_flag_keeps_valid_webhook_overrides() {
        let mut settings = AnalystSettings::from_toml(DEFAULT_SETTINGS).unwrap();
        let rejected = settings.apply_overrides(&SettingsOverrides {
            mode: Some("webhook"),
            webhook_url: Some("https://hooks.example.com/webhook/x"),
            collect_email: Some("y"),
        });

        assert_eq!(rejected.len(), 1);
        assert!(matches!(
            rejected[0],
            SettingsError::InvalidOverride { key: "ANALYST_COLLECT_EMAIL", .. }
        ));
        assert_eq!(settings.submission.mode, SubmissionMode::Webhook);
        assert_eq!(settings.submission.webhook_url, "https://hooks.example.com/webhook/x");
        assert!(!settings.form.collect_email);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_webhook_mode_requires_url() {
        let mut settings = AnalystSettings::default();
        settings.submission.mode = SubmissionMode::Webhook;
        assert!(matches!(settings.validate(), Err(SettingsError::MissingWebhookUrl)));

        settings.submission.webhook_url = "ftp://example.com".to_string();
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidWebhookUrl(_))));

        let fallback = settings.into_simulated();
        assert_eq!(fallback.submission.mode, SubmissionMode::Simulated);
        assert!(fallback.validate().is_ok());
    }
}
