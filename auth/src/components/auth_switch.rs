use std::sync::Arc;

use aak_auth_core::route::Route;
use dominator::{clone, events, html, Dom, EventOptions};

use crate::app::App;

/// "Already have an account? Sign in" style link under a form.
pub struct AuthSwitch {
    pub app: Arc<App>,
    pub text: &'static str,
    pub link_text: &'static str,
    pub route: Route,
}

impl AuthSwitch {
    pub fn render(&self) -> Dom {
        let app = self.app.clone();
        let route = self.route;

        html!("p", {
            .class(["text-sm", "text-center", "mt-6"])
            .children(&mut [
                html!("span", {
                    .text(self.text)
                }),
                html!("a", {
                    .class(["link", "link-primary", "font-medium"])
                    .attribute("href", route.path())
                    .text(self.link_text)
                    .event_with_options(&EventOptions::preventable(), clone!(app => move |e: events::Click| {
                        e.prevent_default();
                        app.router.push(route);
                    }))
                })
            ])
        })
    }
}
