#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use aak_auth_core::api::ApiClient;
use aak_auth_core::error::{ApiError, Result};
use aak_auth_core::model::{CountriesPage, Country, SignupPayload, SignupValues};
use aak_auth_core::route::{Navigator, Route};
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

/// Scripted API. When `gate` is set every call waits for a notification
/// before answering.
pub struct FakeApi {
    pub countries: Result<CountriesPage>,
    pub signup: Result<Value>,
    pub gate: Option<Notify>,
    pub country_calls: Cell<usize>,
    pub signups: RefCell<Vec<SignupPayload>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            countries: Ok(CountriesPage::default()),
            signup: Ok(json!({ "id": 42 })),
            gate: None,
            country_calls: Cell::new(0),
            signups: RefCell::new(Vec::new()),
        }
    }

    pub fn with_countries(mut self, countries: Result<CountriesPage>) -> Self {
        self.countries = countries;
        self
    }

    pub fn with_signup(mut self, signup: Result<Value>) -> Self {
        self.signup = signup;
        self
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn open_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    async fn wait(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait(?Send)]
impl ApiClient for FakeApi {
    async fn fetch_countries(&self) -> Result<CountriesPage> {
        self.country_calls.set(self.country_calls.get() + 1);
        self.wait().await;
        self.countries.clone()
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<Value> {
        self.signups.borrow_mut().push(payload.clone());
        self.wait().await;
        self.signup.clone()
    }
}

#[derive(Default)]
pub struct FakeNavigator {
    pub visited: RefCell<Vec<Route>>,
}

impl Navigator for FakeNavigator {
    fn navigate(&self, route: Route) {
        self.visited.borrow_mut().push(route);
    }
}

pub fn france() -> Country {
    serde_json::from_value(json!({ "id": 1, "full_name": "France", "flag_shape": "🇫🇷" }))
        .expect("valid country")
}

pub fn page(results: Vec<Country>) -> CountriesPage {
    CountriesPage { next: None, previous: None, results }
}

pub fn network_error() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

pub fn valid_values() -> SignupValues {
    SignupValues {
        user_type: "researcher".into(),
        first_name: "John".into(),
        last_name: "Doe".into(),
        username: "johndoe".into(),
        email: "john@example.com".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        country: "France".into(),
    }
}
