//! Run configuration, resolved before any network activity.

use dialoguer::{theme::ColorfulTheme, Input};

use snapaudit_core::error::{AuditError, Result};

/// Prompt defaults for interactive mode.
pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Built-in settings for the fixed-config `attached` mode.
pub const FIXED_PROFILE: &str = "glassfish";
pub const FIXED_REGION: &str = "ap-south-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub profile: String,
    pub region: String,
}

impl RunConfig {
    /// The built-in fixed-config settings.
    pub fn fixed() -> Self {
        Self {
            profile: FIXED_PROFILE.to_string(),
            region: FIXED_REGION.to_string(),
        }
    }

    /// Interactive resolution: flag values are taken as given; anything
    /// missing is prompted for with its default.
    pub fn resolve(profile: Option<String>, region: Option<String>) -> Result<Self> {
        let profile = match profile {
            Some(value) => value,
            None => prompt_with_default("AWS profile", DEFAULT_PROFILE)?,
        };
        let region = match region {
            Some(value) => value,
            None => prompt_with_default("AWS region", DEFAULT_REGION)?,
        };
        Self::validated(profile, region)
    }

    fn validated(profile: String, region: String) -> Result<Self> {
        if profile.trim().is_empty() {
            return Err(AuditError::Init("profile must not be empty".to_string()));
        }
        if region.trim().is_empty() {
            return Err(AuditError::Init("region must not be empty".to_string()));
        }
        Ok(Self { profile, region })
    }
}

fn prompt_with_default(prompt: &str, default: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(|e| AuditError::Init(format!("failed to read {prompt}: {e}")))
}
