//! Framework-independent state behind the AAK sign-up portal: form values and
//! validation, the sign-up submission flow, the country list, the mock login
//! check and the toast stack. The wasm UI in `aak-auth-ui` renders these.

pub mod api;
pub mod config;
pub mod countries;
pub mod error;
pub mod login;
pub mod model;
pub mod notify;
pub mod route;
pub mod signup;
pub mod theme;
pub mod validation;

pub use api::ApiClient;
pub use config::AppConfig;
pub use countries::{CountryLoader, LoadState};
pub use error::{ApiError, Result};
pub use login::{CredentialStore, LoginOutcome, LoginState, StaticCredentials};
pub use model::{CountriesPage, Country, Field, SignupPayload, SignupValues, UserType};
pub use notify::{Toast, ToastKind, Toaster};
pub use route::{Navigator, Route};
pub use signup::{FormStatus, SignupState, SubmitOutcome};
pub use theme::Theme;
