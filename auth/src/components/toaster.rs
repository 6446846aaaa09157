use std::sync::Arc;

use aak_auth_core::notify::{Toast, ToastKind, Toaster};
use dominator::{clone, events, html, Dom};
use futures_signals::signal_vec::SignalVecExt;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Stack of transient notifications, mounted once by the app shell.
pub fn toaster_view(toaster: Arc<Toaster>, duration_ms: u32) -> Dom {
    html!("div", {
        .class(["toast", "toast-top", "toast-end", "z-50"])
        .children_signal_vec(toaster.signal_vec().map(clone!(toaster => move |toast| {
            render_toast(toaster.clone(), toast, duration_ms)
        })))
    })
}

fn render_toast(toaster: Arc<Toaster>, toast: Toast, duration_ms: u32) -> Dom {
    let id = toast.id;
    let kind_class = match toast.kind {
        ToastKind::Success => "alert-success",
        ToastKind::Error => "alert-error",
    };

    html!("div", {
        .class(["alert", kind_class, "cursor-pointer", "shadow-lg"])
        .attribute("role", "status")
        .children(&mut [
            html!("span", {
                .text(&toast.message)
            })
        ])
        .after_inserted(clone!(toaster => move |_| {
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                toaster.dismiss(id);
            });
        }))
        .event(move |_: events::Click| toaster.dismiss(id))
    })
}
