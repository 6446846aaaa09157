pub mod app;
pub mod components;
pub mod config;
pub mod http;
pub mod pages;
pub mod router;
pub mod storage;

use wasm_bindgen::prelude::*;

use crate::app::App;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(feature = "develop")]
    {
        wasm_logger::init(wasm_logger::Config::default());
        console_error_panic_hook::set_once();
    }

    log::info!("Starting AAK sign-up portal");
    dominator::append_dom(&dominator::body(), App::render(App::new()));
    Ok(())
}
