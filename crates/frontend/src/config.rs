//! Settings of the analyst page.
//!
//! Source order:
//! 1. `config.toml` bundled into the binary at build time
//! 2. `ANALYST_*` environment variables present at build time
//!
//! An invalid override is logged and skipped; the remaining values still
//! apply. Invalid webhook settings do not break the page: they are logged and
//! the page falls back to the simulated submission.

use anyhow::Context;
use contracts::shared::settings::{AnalystSettings, SettingsOverrides};
use once_cell::sync::Lazy;

const BUNDLED_SETTINGS: &str = include_str!("../config.toml");

static SETTINGS: Lazy<AnalystSettings> = Lazy::new(load_settings);

pub fn settings() -> &'static AnalystSettings {
    &SETTINGS
}

fn build_time_overrides() -> SettingsOverrides<'static> {
    SettingsOverrides {
        mode: option_env!("ANALYST_SUBMISSION_MODE"),
        webhook_url: option_env!("ANALYST_WEBHOOK_URL"),
        collect_email: option_env!("ANALYST_COLLECT_EMAIL"),
    }
}

fn bundled_settings() -> anyhow::Result<AnalystSettings> {
    AnalystSettings::from_toml(BUNDLED_SETTINGS).context("bundled config.toml is invalid")
}

fn load_settings() -> AnalystSettings {
    let mut settings = bundled_settings().unwrap_or_else(|e| {
        log::error!("{:#}; using defaults", e);
        AnalystSettings::default()
    });
    for rejected in settings.apply_overrides(&build_time_overrides()) {
        log::error!("Ignoring build-time override: {}", rejected);
    }

    if let Err(e) = settings.validate() {
        log::error!("{}; falling back to simulated submission", e);
        return settings.into_simulated();
    }

    log::info!(
        "Submission mode: {:?}, email field: {}",
        settings.submission.mode,
        settings.form.collect_email
    );
    settings
}
