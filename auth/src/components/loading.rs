use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};

pub fn loading_indicator<S>(is_loading: S) -> Dom
where
    S: Signal<Item = bool> + 'static,
{
    html!("span", {
        .class(["loading", "loading-spinner", "loading-sm"])
        .class_signal("hidden", is_loading.map(|loading| !loading))
    })
}
