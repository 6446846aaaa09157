use std::sync::Arc;

use aak_auth_core::model::{Field, UserType};
use aak_auth_core::route::Route;
use aak_auth_core::signup::SignupState;
use dominator::{clone, events, html, Dom, EventOptions};
use futures_signals::signal::{always, SignalExt};
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::components::auth_switch::AuthSwitch;
use crate::components::form::{Select, SelectOption, TextInput};
use crate::components::loading::loading_indicator;
use crate::config::CONFIG;

#[derive(Clone)]
pub struct SignupPage {
    app: Arc<App>,
    state: Arc<SignupState>,
}

impl SignupPage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            app,
            state: SignupState::new(CONFIG.send_confirm_password),
        })
    }

    fn load_countries(&self) {
        let state = self.state.clone();
        let api = self.app.api.clone();
        spawn_local(async move {
            state.countries.load(api.as_ref()).await;
        });
    }

    fn submit(&self) {
        let state = self.state.clone();
        let app = self.app.clone();
        spawn_local(async move {
            let outcome = state.submit(app.api.as_ref(), &app.toaster).await;
            log::debug!("Signup submit finished: {:?}", outcome);
        });
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let page = self.clone();
        let state = self.state.clone();

        html!("div", {
            .class(["min-h-screen", "flex", "items-center", "justify-center"])
            .after_inserted(clone!(page => move |_| page.load_countries()))
            .after_removed(clone!(state => move |_| state.countries.cancel()))
            .children(&mut [
                html!("div", {
                    .class(["w-full", "max-w-md", "px-4", "py-10"])
                    .children(&mut [
                        html!("div", {
                            .class(["mb-8", "text-center"])
                            .children(&mut [
                                html!("h1", {
                                    .class(["text-4xl", "font-extrabold", "mb-2"])
                                    .text("Create Account")
                                }),
                                html!("p", {
                                    .class(["text-lg", "text-base-content/70"])
                                    .text("Join AAK Tele-Science today")
                                }),
                            ])
                        }),
                        html!("div", {
                            .child_signal(state.created_signal().map(clone!(page => move |created| {
                                Some(if created {
                                    Self::render_created()
                                } else {
                                    page.render_form()
                                })
                            })))
                        }),
                        AuthSwitch {
                            app: self.app.clone(),
                            text: "Already have an account? ",
                            link_text: "Sign in",
                            route: Route::Login,
                        }.render(),
                    ])
                })
            ])
        })
    }

    fn render_created() -> Dom {
        html!("div", {
            .class(["text-center"])
            .children(&mut [
                html!("div", {
                    .class(["mx-auto", "w-16", "h-16", "rounded-full", "bg-success/20", "flex", "items-center", "justify-center", "mb-4", "text-success", "text-3xl"])
                    .text("✓")
                }),
                html!("h2", {
                    .class(["text-2xl", "font-bold", "mb-2"])
                    .text("Account Created Successfully!")
                }),
                html!("p", {
                    .class(["text-base-content/70", "mb-6"])
                    .text("Please check your email to verify your account and activate it.")
                }),
            ])
        })
    }

    fn text_field(&self, field: Field, input: TextInput) -> Dom {
        let state = self.state.clone();
        input.render(
            state.value_signal(field),
            state.error_signal(field),
            clone!(state => move |value| state.set_field(field, value)),
            move || state.touch(field),
        )
    }

    fn render_form(self: &Arc<Self>) -> Dom {
        let page = self.clone();
        let state = self.state.clone();
        let countries = state.countries.clone();

        html!("form", {
            .class(["space-y-4"])
            .attribute("novalidate", "")
            .event_with_options(&EventOptions::preventable(), clone!(page => move |e: events::Submit| {
                e.prevent_default();
                page.submit();
            }))
            .children(&mut [
                Select { name: "user_type", label: "User Type" }.render(
                    always(UserType::ALL
                        .iter()
                        .map(|user_type| SelectOption::new(user_type.as_str(), user_type.label()))
                        .collect::<Vec<_>>()),
                    state.value_signal(Field::UserType),
                    always("Select user type"),
                    always(true),
                    state.error_signal(Field::UserType),
                    clone!(state => move |value| {
                        state.set_field(Field::UserType, value);
                        state.touch(Field::UserType);
                    }),
                ),
                html!("div", {
                    .class(["grid", "grid-cols-2", "gap-4"])
                    .children(&mut [
                        self.text_field(
                            Field::FirstName,
                            TextInput::text("first_name", "First Name", "John").autocomplete("given-name"),
                        ),
                        self.text_field(
                            Field::LastName,
                            TextInput::text("last_name", "Last Name", "Doe").autocomplete("family-name"),
                        ),
                    ])
                }),
                self.text_field(
                    Field::Username,
                    TextInput::text("username", "Username", "johndoe").autocomplete("username"),
                ),
                self.text_field(
                    Field::Email,
                    TextInput::text("email", "Email Address", "john@example.com")
                        .input_type("email")
                        .autocomplete("email"),
                ),
                self.text_field(
                    Field::Password,
                    TextInput::text("password", "Password", "••••••••")
                        .input_type("password")
                        .autocomplete("new-password"),
                ),
                self.text_field(
                    Field::ConfirmPassword,
                    TextInput::text("confirm_password", "Confirm Password", "Repeat your password")
                        .input_type("password")
                        .autocomplete("new-password"),
                ),
                Select { name: "country", label: "Country" }.render(
                    countries.countries_signal().map(|countries| {
                        countries
                            .iter()
                            .map(|country| SelectOption::new(country.full_name.clone(), country.display_name()))
                            .collect::<Vec<_>>()
                    }),
                    state.value_signal(Field::Country),
                    countries.placeholder_signal(),
                    countries.selector_enabled_signal(),
                    state.error_signal(Field::Country),
                    clone!(state => move |value| {
                        state.set_field(Field::Country, value);
                        state.touch(Field::Country);
                    }),
                ),
                html!("button", {
                    .class(["btn", "btn-primary", "w-full", "mt-8", "gap-2"])
                    .attribute("type", "submit")
                    .attribute_signal("disabled", state.submitting.signal().map(|submitting| {
                        if submitting {
                            Some("true")
                        } else {
                            None
                        }
                    }))
                    .children(&mut [
                        loading_indicator(state.submitting.signal()),
                        html!("span", {
                            .text_signal(state.submitting.signal().map(|submitting| {
                                if submitting {
                                    "Creating Account..."
                                } else {
                                    "Create Account"
                                }
                            }))
                        }),
                    ])
                }),
            ])
        })
    }
}
