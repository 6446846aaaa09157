use std::sync::Arc;

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal};

use crate::notify::Toaster;
use crate::route::{Navigator, Route};

pub const LOGIN_SUCCESS_MESSAGE: &str = "¡Login exitoso!";
pub const LOGIN_FAILURE_MESSAGE: &str = "Usuario o contraseña incorrectos";

/// Local storage keys of the demo credentials.
pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";

/// Reference credentials for the mock login. Not a security boundary.
pub trait CredentialStore {
    fn username(&self) -> Option<String>;
    fn password(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn username(&self) -> Option<String> {
        self.username.clone()
    }

    fn password(&self) -> Option<String> {
        self.password.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginValues {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

pub fn validate_login(values: &LoginValues) -> LoginErrors {
    LoginErrors {
        username: values
            .username
            .is_empty()
            .then_some("El nombre de usuario es obligatorio"),
        password: values
            .password
            .is_empty()
            .then_some("La contraseña es obligatoria"),
    }
}

/// Exact, case-sensitive match of both values. A missing stored value never
/// matches.
pub fn check_credentials(submitted: &LoginValues, store: &dyn CredentialStore) -> bool {
    let username_ok = store.username().is_some_and(|stored| stored == submitted.username);
    let password_ok = store.password().is_some_and(|stored| stored == submitted.password);
    username_ok && password_ok
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Invalid,
    LoggedIn,
    Rejected,
}

#[derive(Clone)]
pub struct LoginState {
    pub username: Mutable<String>,
    pub password: Mutable<String>,
    pub attempted: Mutable<bool>,
}

impl LoginState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            username: Mutable::new(String::new()),
            password: Mutable::new(String::new()),
            attempted: Mutable::new(false),
        })
    }

    pub fn values(&self) -> LoginValues {
        LoginValues {
            username: self.username.get_cloned(),
            password: self.password.get_cloned(),
        }
    }

    pub fn username_error_signal(&self) -> impl Signal<Item = Option<&'static str>> {
        map_ref! {
            let username = self.username.signal_cloned(),
            let attempted = self.attempted.signal() =>
            if *attempted {
                validate_login(&LoginValues { username: username.clone(), password: String::new() }).username
            } else {
                None
            }
        }
    }

    pub fn password_error_signal(&self) -> impl Signal<Item = Option<&'static str>> {
        map_ref! {
            let password = self.password.signal_cloned(),
            let attempted = self.attempted.signal() =>
            if *attempted {
                validate_login(&LoginValues { username: String::new(), password: password.clone() }).password
            } else {
                None
            }
        }
    }

    pub fn submit(
        &self,
        store: &dyn CredentialStore,
        navigator: &dyn Navigator,
        toaster: &Toaster,
    ) -> LoginOutcome {
        self.attempted.set_neq(true);
        let values = self.values();
        if !validate_login(&values).is_empty() {
            return LoginOutcome::Invalid;
        }

        if check_credentials(&values, store) {
            log::info!("Login accepted for {}", values.username);
            toaster.success(LOGIN_SUCCESS_MESSAGE);
            navigator.navigate(Route::Success);
            LoginOutcome::LoggedIn
        } else {
            log::debug!("Login rejected for {}", values.username);
            toaster.error(LOGIN_FAILURE_MESSAGE);
            LoginOutcome::Rejected
        }
    }
}
