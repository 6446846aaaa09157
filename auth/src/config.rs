use aak_auth_core::AppConfig;
use once_cell::sync::Lazy;

/// Settings baked in at build time, see `build.rs`.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::default().with_overrides(
        option_env!("AAK_API_BASE_URL"),
        option_env!("AAK_SEND_CONFIRM_PASSWORD"),
        option_env!("AAK_TOAST_DURATION_MS"),
    )
});
