use crate::constants::{ROUTE_ACCOUNT, ROUTE_AUTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    NewPage,
    Auth,
    Account,
    View(String),
}

impl Route {
    pub fn from_pathname(pathname: &str) -> Self {
        let uri = pathname.trim_start_matches('/').trim_end_matches('/');
        match uri {
            "" => Route::NewPage,
            _ if uri == ROUTE_AUTH => Route::Auth,
            _ if uri == ROUTE_ACCOUNT => Route::Account,
            _ => Route::View(uri.to_string()),
        }
    }

    pub fn page_uri(&self) -> Option<&str> {
        match self {
            Route::View(uri) => Some(uri),
            _ => None,
        }
    }
}
