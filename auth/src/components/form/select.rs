use dominator::{events, html, with_node, Dom};
use futures_signals::map_ref;
use futures_signals::signal::{Signal, SignalExt};
use web_sys::HtmlSelectElement;

use super::field_error;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub struct Select {
    pub name: &'static str,
    pub label: &'static str,
}

impl Select {
    /// `placeholder` is shown as a disabled first entry while nothing is
    /// picked; `enabled == false` disables the whole control.
    pub fn render<O, V, P, D, E, C>(
        &self,
        options: O,
        value: V,
        placeholder: P,
        enabled: D,
        error: E,
        on_change: C,
    ) -> Dom
    where
        O: Signal<Item = Vec<SelectOption>> + 'static,
        V: Signal<Item = String> + 'static,
        P: Signal<Item = &'static str> + 'static,
        D: Signal<Item = bool> + 'static,
        E: Signal<Item = Option<&'static str>> + 'static,
        C: Fn(String) + 'static,
    {
        let error = error.broadcast();
        let entries = map_ref! {
            let options = options,
            let value = value,
            let placeholder = placeholder =>
            Self::entries(options, value, *placeholder)
        };

        html!("div", {
            .class(["form-control", "w-full", "mt-2"])
            .children(&mut [
                html!("label", {
                    .class(["label"])
                    .attribute("for", self.name)
                    .children(&mut [
                        html!("span", {
                            .class(["label-text", "font-semibold"])
                            .text(self.label)
                        })
                    ])
                }),
                html!("select" => HtmlSelectElement, {
                    .class(["select", "select-bordered", "w-full"])
                    .class_signal("select-error", error.signal().map(|error| error.is_some()))
                    .attribute("id", self.name)
                    .attribute("name", self.name)
                    .attribute_signal("disabled", enabled.map(|enabled| {
                        if enabled {
                            None
                        } else {
                            Some("true")
                        }
                    }))
                    .children_signal_vec(entries.to_signal_vec())
                    .with_node!(select => {
                        .event(move |_: events::Change| {
                            on_change(select.value());
                        })
                    })
                }),
                field_error(error.signal()),
            ])
        })
    }

    fn entries(options: &[SelectOption], value: &str, placeholder: &'static str) -> Vec<Dom> {
        let mut entries = Vec::with_capacity(options.len() + 1);
        entries.push(html!("option", {
            .attribute("value", "")
            .attribute("disabled", "")
            .apply_if(value.is_empty(), |dom| dom.attribute("selected", ""))
            .text(placeholder)
        }));
        entries.extend(options.iter().map(|option| {
            html!("option", {
                .attribute("value", &option.value)
                .apply_if(option.value == value, |dom| dom.attribute("selected", ""))
                .text(&option.label)
            })
        }));
        entries
    }
}
