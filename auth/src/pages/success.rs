use dominator::{html, Dom};

pub struct SuccessPage;

impl SuccessPage {
    pub fn render() -> Dom {
        html!("div", {
            .class(["flex", "flex-col", "items-center", "justify-center", "min-h-screen"])
            .children(&mut [
                html!("h1", {
                    .class(["text-3xl", "font-bold", "mb-4"])
                    .text("¡Login exitoso!")
                }),
                html!("p", {
                    .class(["text-base-content/70"])
                    .text("Bienvenido, has iniciado sesión correctamente.")
                }),
            ])
        })
    }
}
