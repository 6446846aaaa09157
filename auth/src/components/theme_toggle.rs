use std::sync::Arc;

use aak_auth_core::theme::Theme;
use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;

use crate::app::App;

pub fn theme_toggle(app: Arc<App>) -> Dom {
    html!("button", {
        .class(["btn", "btn-ghost", "btn-sm", "fixed", "top-4", "left-4"])
        .attribute("type", "button")
        .text_signal(app.theme.signal().map(|theme| match theme {
            Theme::Dark => "Light mode",
            Theme::Light => "Dark mode",
        }))
        .event(clone!(app => move |_: events::Click| {
            app.toggle_theme();
        }))
    })
}
