use std::sync::Arc;

use aak_auth_core::route::Route;
use dominator::{html, Dom};

use crate::app::App;
use crate::components::auth_switch::AuthSwitch;

pub struct NotFoundPage;

impl NotFoundPage {
    pub fn render(app: Arc<App>) -> Dom {
        html!("div", {
            .class(["flex", "flex-col", "items-center", "justify-center", "min-h-screen"])
            .children(&mut [
                html!("h1", {
                    .class(["text-3xl", "font-bold", "mb-4"])
                    .text("Page not found")
                }),
                AuthSwitch {
                    app,
                    text: "Looking for something else? ",
                    link_text: "Create an account",
                    route: Route::Signup,
                }.render(),
            ])
        })
    }
}
