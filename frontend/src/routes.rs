//! Path based routes of the application.

/// Screens reachable by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    NewContact,
    ContactDetail(i64),
    NotFound,
}

impl Route {
    /// Maps a `location.pathname` to a route. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] | [""] => Route::Home,
            ["contact", "new"] => Route::NewContact,
            ["contact", id] => id
                .parse()
                .map(Route::ContactDetail)
                .unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::NewContact => "/contact/new".to_string(),
            Route::ContactDetail(id) => format!("/contact/{}", id),
        }
    }
}
