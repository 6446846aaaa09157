use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::model::{CountriesPage, SignupPayload};

pub const COUNTRIES_PATH: &str = "/countries/";
pub const SIGNUP_PATH: &str = "/signup/";

/// Remote API used by the sign-up form. Futures are not `Send`: in the
/// browser they run on the single wasm event loop.
#[async_trait(?Send)]
pub trait ApiClient {
    /// First page of the country collection.
    async fn fetch_countries(&self) -> Result<CountriesPage>;

    /// Registers a user. The response body is not interpreted.
    async fn signup(&self, payload: &SignupPayload) -> Result<Value>;
}

/// Joins the configured base URL and an endpoint path without doubling `/`.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
