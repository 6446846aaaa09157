use dominator::{events, html, with_node, Dom};
use futures_signals::signal::{Signal, SignalExt};
use web_sys::HtmlInputElement;

use super::field_error;

pub struct TextInput {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub autocomplete: &'static str,
}

impl TextInput {
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            input_type: "text",
            placeholder,
            autocomplete: "off",
        }
    }

    pub fn input_type(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn autocomplete(mut self, autocomplete: &'static str) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    pub fn render<V, E, C, B>(&self, value: V, error: E, on_input: C, on_blur: B) -> Dom
    where
        V: Signal<Item = String> + 'static,
        E: Signal<Item = Option<&'static str>> + 'static,
        C: Fn(String) + 'static,
        B: Fn() + 'static,
    {
        let error = error.broadcast();

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
                html!("input" => HtmlInputElement, {
                    .class(["input", "input-bordered", "w-full"])
                    .class_signal("input-error", error.signal().map(|error| error.is_some()))
                    .attribute("id", self.name)
                    .attribute("name", self.name)
                    .attribute("type", self.input_type)
                    .attribute("placeholder", self.placeholder)
                    .attribute("autocomplete", self.autocomplete)
                    .property_signal("value", value)
                    .with_node!(input => {
                        .event(move |_: events::Input| {
                            on_input(input.value());
                        })
                    })
                    .event(move |_: events::Blur| on_blur())
                }),
                field_error(error.signal()),
            ])
        })
    }
}
