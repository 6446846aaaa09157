use serde::{Deserialize, Serialize};

use crate::theme::Theme;

pub const DEFAULT_API_BASE_URL: &str = "https://django.aakscience.com";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Whether `confirm_password` is posted along with the sign-up payload.
    pub send_confirm_password: bool,
    pub toast_duration_ms: u32,
    pub default_theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            send_confirm_password: false,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            default_theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// Applies optional overrides, typically baked in at build time.
    /// Unparseable values keep the default.
    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        send_confirm_password: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> Self {
        if let Some(url) = api_base_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(flag) = send_confirm_password {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.send_confirm_password = true,
                "0" | "false" | "no" => self.send_confirm_password = false,
                other => log::warn!("ignoring send_confirm_password override {:?}", other),
            }
        }
        if let Some(ms) = toast_duration_ms {
            match ms.trim().parse::<u32>() {
                Ok(ms) => self.toast_duration_ms = ms,
                Err(e) => log::warn!("ignoring toast duration override {:?}: {}", ms, e),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_and_bad_values_are_ignored() {
        let config = AppConfig::default().with_overrides(
            Some("http://localhost:8000/"),
            Some("TRUE"),
            Some("soon"),
        );
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(config.send_confirm_password);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);

        assert_eq!(AppConfig::default().with_overrides(None, None, None), AppConfig::default());
    }
}
