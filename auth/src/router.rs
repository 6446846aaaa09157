use std::sync::Arc;

use aak_auth_core::route::{Navigator, Route};
use dominator::{clone, routing};
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen_futures::spawn_local;

pub struct Router {
    pub current_route: Mutable<Route>,
}

impl Router {
    pub fn new() -> Arc<Self> {
        let initial = Route::from_url(&routing::url().lock_ref());
        let router = Arc::new(Self {
            current_route: Mutable::new(initial),
        });

        // Follow back/forward navigation
        spawn_local(clone!(router => async move {
            routing::url()
                .signal_ref(|url| Route::from_url(url))
                .for_each(move |route| {
                    log::debug!("Route changed to: {:?}", route);
                    router.current_route.set_neq(route);
                    async {}
                })
                .await;
        }));

        router
    }

    pub fn push(&self, route: Route) {
        log::debug!("Pushing route {:?} (from {:?})", route, self.current_route.get());
        routing::go_to_url(route.path());
        self.current_route.set_neq(route);
    }
}

impl Navigator for Router {
    fn navigate(&self, route: Route) {
        self.push(route);
    }
}
