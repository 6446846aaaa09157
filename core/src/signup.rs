use std::collections::BTreeSet;
use std::sync::Arc;

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal, SignalExt};

use crate::api::ApiClient;
use crate::countries::CountryLoader;
use crate::model::{Field, SignupPayload, SignupValues};
use crate::notify::Toaster;
use crate::validation::{validate, FieldErrors};

pub const SIGNUP_SUCCESS_MESSAGE: &str =
    "User created successfully! Please check your email to verify your account.";

/// Result of the last submission attempt. Never reset, only overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Unset,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid,
    Created,
    Rejected(String),
}

pub struct SignupState {
    pub values: Mutable<SignupValues>,
    pub errors: Mutable<FieldErrors>,
    pub touched: Mutable<BTreeSet<Field>>,
    pub submitting: Mutable<bool>,
    pub status: Mutable<FormStatus>,
    pub countries: Arc<CountryLoader>,
    send_confirm_password: bool,
}

impl SignupState {
    pub fn new(send_confirm_password: bool) -> Arc<Self> {
        let values = SignupValues::default();
        let errors = validate(&values);
        Arc::new(Self {
            values: Mutable::new(values),
            errors: Mutable::new(errors),
            touched: Mutable::new(BTreeSet::new()),
            submitting: Mutable::new(false),
            status: Mutable::new(FormStatus::Unset),
            countries: CountryLoader::new(),
            send_confirm_password,
        })
    }

    /// Updates one field and revalidates the whole record, so editing
    /// `password` also refreshes the `confirm_password` error.
    pub fn set_field(&self, field: Field, value: String) {
        let errors = {
            let mut values = self.values.lock_mut();
            if values.get(field) == value {
                return;
            }
            values.set(field, value);
            validate(&values)
        };
        self.errors.set_neq(errors);
    }

    pub fn touch(&self, field: Field) {
        let mut touched = self.touched.lock_mut();
        if !touched.contains(&field) {
            touched.insert(field);
        }
    }

    pub fn touch_all(&self) {
        let mut touched = self.touched.lock_mut();
        if touched.len() != Field::ALL.len() {
            touched.extend(Field::ALL);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.lock_ref().is_empty()
    }

    /// Error shown next to `field`: only once the field was touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.touched.lock_ref().contains(&field) {
            self.errors.lock_ref().get(field)
        } else {
            None
        }
    }

    pub fn error_signal(&self, field: Field) -> impl Signal<Item = Option<&'static str>> {
        map_ref! {
            let error = self.errors.signal_ref(move |errors| errors.get(field)),
            let touched = self.touched.signal_ref(move |touched| touched.contains(&field)) =>
            if *touched { *error } else { None }
        }
    }

    pub fn value_signal(&self, field: Field) -> impl Signal<Item = String> {
        self.values.signal_ref(move |values| values.get(field).to_string())
    }

    pub fn created_signal(&self) -> impl Signal<Item = bool> {
        self.status.signal().map(|status| status == FormStatus::Success).dedupe()
    }

    /// Validates, posts the payload and records the outcome. Exactly one
    /// toast is pushed per attempt that reaches the network.
    pub async fn submit(&self, client: &dyn ApiClient, toaster: &Toaster) -> SubmitOutcome {
        if self.submitting.get() {
            log::debug!("Signup already in flight, ignoring submit");
            return SubmitOutcome::Ignored;
        }

        self.touch_all();
        let values = self.values.get_cloned();
        let errors = validate(&values);
        let invalid = !errors.is_empty();
        self.errors.set_neq(errors);
        if invalid {
            log::debug!("Signup blocked by validation");
            return SubmitOutcome::Invalid;
        }

        let Some(payload) = SignupPayload::from_values(&values, self.send_confirm_password) else {
            return SubmitOutcome::Invalid;
        };

        self.submitting.set(true);
        let outcome = match client.signup(&payload).await {
            Ok(response) => {
                log::info!("Signup response: {}", response);
                self.status.set(FormStatus::Success);
                toaster.success(SIGNUP_SUCCESS_MESSAGE);
                SubmitOutcome::Created
            }
            Err(e) => {
                log::error!("Signup failed: {:?}", e);
                let message = e.user_message();
                self.status.set(FormStatus::Failure);
                toaster.error(message.clone());
                SubmitOutcome::Rejected(message)
            }
        };
        self.submitting.set(false);

        outcome
    }
}
