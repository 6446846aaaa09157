use std::sync::Arc;

use aak_auth_core::notify::Toaster;
use aak_auth_core::route::Route;
use aak_auth_core::theme::Theme;
use dominator::{clone, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};

use crate::components::theme_toggle::theme_toggle;
use crate::components::toaster::toaster_view;
use crate::config::CONFIG;
use crate::http::HttpApiClient;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::signup::SignupPage;
use crate::pages::success::SuccessPage;
use crate::router::Router;
use crate::storage::{self, LocalStorageCredentials};

pub struct App {
    pub router: Arc<Router>,
    pub toaster: Arc<Toaster>,
    pub api: Arc<HttpApiClient>,
    pub credentials: LocalStorageCredentials,
    pub theme: Mutable<Theme>,
}

impl App {
    pub fn new() -> Arc<Self> {
        let theme = storage::load_theme().unwrap_or(CONFIG.default_theme);
        log::debug!("Using API at {}, theme {:?}", CONFIG.api_base_url, theme);

        Arc::new(Self {
            router: Router::new(),
            toaster: Toaster::new(),
            api: Arc::new(HttpApiClient::from_config(&CONFIG)),
            credentials: LocalStorageCredentials,
            theme: Mutable::new(theme),
        })
    }

    pub fn toggle_theme(&self) {
        let theme = self.theme.get().toggled();
        self.theme.set_neq(theme);
        storage::save_theme(theme);
    }

    pub fn render(app: Arc<Self>) -> Dom {
        html!("div", {
            .class(["min-h-screen", "bg-base-100", "text-base-content"])
            .class_signal("dark", app.theme.signal().map(|theme| theme == Theme::Dark))
            .attribute_signal("data-theme", app.theme.signal().map(|theme| Some(theme.as_class())))
            .children(&mut [
                theme_toggle(app.clone()),
                toaster_view(app.toaster.clone(), CONFIG.toast_duration_ms),
                html!("main", {
                    .child_signal(app.router.current_route.signal().map(clone!(app => move |route| {
                        Some(match route {
                            Route::Signup => SignupPage::new(app.clone()).render(),
                            Route::Login => LoginPage::new(app.clone()).render(),
                            Route::Success => SuccessPage::render(),
                            Route::NotFound => NotFoundPage::render(app.clone()),
                        })
                    })))
                }),
            ])
        })
    }
}
