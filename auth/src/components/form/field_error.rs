use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};

/// Message rendered under an input while `error` carries one.
pub fn field_error<S>(error: S) -> Dom
where
    S: Signal<Item = Option<&'static str>> + 'static,
{
    html!("div", {
        .child_signal(error.map(|error| {
            error.map(|message| html!("p", {
                .class(["mt-1", "text-xs", "text-error"])
                .text(message)
            }))
        }))
    })
}
