use aak_auth_core::login::{CredentialStore, PASSWORD_KEY, USERNAME_KEY};
use aak_auth_core::theme::{Theme, THEME_KEY};
use gloo_storage::{LocalStorage, Storage};

/// Values are read raw: they are seeded with `localStorage.setItem`, not as
/// JSON documents.
fn read_raw(key: &str) -> Option<String> {
    match LocalStorage::raw().get_item(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read {} from local storage: {:?}", key, e);
            None
        }
    }
}

fn write_raw(key: &str, value: &str) {
    if let Err(e) = LocalStorage::raw().set_item(key, value) {
        log::warn!("Could not write {} to local storage: {:?}", key, e);
    }
}

/// Demo credentials seeded in the browser's local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialStore for LocalStorageCredentials {
    fn username(&self) -> Option<String> {
        read_raw(USERNAME_KEY)
    }

    fn password(&self) -> Option<String> {
        read_raw(PASSWORD_KEY)
    }
}

pub fn load_theme() -> Option<Theme> {
    read_raw(THEME_KEY).and_then(|value| value.parse().ok())
}

pub fn save_theme(theme: Theme) {
    write_raw(THEME_KEY, theme.as_class());
}
