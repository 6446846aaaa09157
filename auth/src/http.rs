use aak_auth_core::api::{endpoint, ApiClient, COUNTRIES_PATH, SIGNUP_PATH};
use aak_auth_core::error::{ApiError, Result};
use aak_auth_core::model::{CountriesPage, SignupPayload};
use aak_auth_core::AppConfig;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;

/// The one HTTP client of the app; every call goes through `base_url`.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Non-2xx: keep the body when it is JSON so its `message` can be shown.
async fn rejected(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<Value>().await.ok();
    log::debug!("{} answered {} with body {:?}", response.url(), status, body);
    ApiError::status(status, body)
}

#[async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn fetch_countries(&self) -> Result<CountriesPage> {
        let url = self.url(COUNTRIES_PATH);
        log::debug!("GET {}", url);

        let response = Request::get(&url).send().await.map_err(network)?;
        if !response.ok() {
            return Err(rejected(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<Value> {
        let url = self.url(SIGNUP_PATH);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        if !response.ok() {
            return Err(rejected(response).await);
        }

        // any 2xx counts, including an empty body
        let text = response.text().await.map_err(network)?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
