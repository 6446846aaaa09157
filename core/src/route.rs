#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Signup,
    Login,
    Success,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Signup => "/",
            Route::Login => "/login",
            Route::Success => "/success",
            Route::NotFound => "/404",
        }
    }

    /// Accepts a full URL or a bare path; query and fragment are ignored.
    pub fn from_url(url: &str) -> Route {
        let path = match url::Url::parse(url) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => url
                .split(|c| c == '?' || c == '#')
                .next()
                .unwrap_or(url)
                .to_string(),
        };

        let route = match path.trim_end_matches('/') {
            "" => Route::Signup,
            "/login" => Route::Login,
            "/success" => Route::Success,
            _ => Route::NotFound,
        };

        log::debug!("Mapped URL {} to route {:?}", url, route);
        route
    }
}

/// Client-side navigation, implemented by the browser router.
pub trait Navigator {
    fn navigate(&self, route: Route);
}
