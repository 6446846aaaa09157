use std::sync::Arc;

use aak_auth_core::login::LoginState;
use aak_auth_core::route::Route;
use dominator::{clone, events, html, Dom, EventOptions};

use crate::app::App;
use crate::components::auth_switch::AuthSwitch;
use crate::components::form::TextInput;

#[derive(Clone)]
pub struct LoginPage {
    app: Arc<App>,
    state: Arc<LoginState>,
}

impl LoginPage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            app,
            state: LoginState::new(),
        })
    }

    fn submit(&self) {
        let outcome = self.state.submit(&self.app.credentials, self.app.router.as_ref(), &self.app.toaster);
        log::debug!("Login submit finished: {:?}", outcome);
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let page = self.clone();
        let state = self.state.clone();

        html!("div", {
            .class(["min-h-screen", "flex", "flex-col", "items-center", "justify-center", "p-4"])
            .children(&mut [
                html!("div", {
                    .class(["card", "w-full", "max-w-md", "bg-base-100", "border", "border-base-300"])
                    .children(&mut [
                        html!("form", {
                            .class(["card-body"])
                            .attribute("novalidate", "")
                            .event_with_options(&EventOptions::preventable(), clone!(page => move |e: events::Submit| {
                                e.prevent_default();
                                page.submit();
                            }))
                            .children(&mut [
                                html!("h2", {
                                    .class(["text-2xl", "font-semibold", "text-center", "mb-2", "w-full"])
                                    .text("Login")
                                }),
                                TextInput::text("username", "Nombre de usuario", "johndoe123")
                                    .autocomplete("username")
                                    .render(
                                        state.username.signal_cloned(),
                                        state.username_error_signal(),
                                        clone!(state => move |value| state.username.set_neq(value)),
                                        || {},
                                    ),
                                TextInput::text("password", "Contraseña", "••••••••")
                                    .input_type("password")
                                    .autocomplete("current-password")
                                    .render(
                                        state.password.signal_cloned(),
                                        state.password_error_signal(),
                                        clone!(state => move |value| state.password.set_neq(value)),
                                        || {},
                                    ),
                                html!("button", {
                                    .class(["btn", "btn-primary", "w-full", "mt-6"])
                                    .attribute("type", "submit")
                                    .text("Iniciar sesión")
                                }),
                                AuthSwitch {
                                    app: self.app.clone(),
                                    text: "¿No tienes cuenta? ",
                                    link_text: "Regístrate",
                                    route: Route::Signup,
                                }.render(),
                            ])
                        })
                    ])
                })
            ])
        })
    }
}
