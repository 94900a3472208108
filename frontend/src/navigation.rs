use std::fmt;

/// Route identifiers understood by the navigation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    /// Path as registered with the router.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Navigation collaborator: replaces the current view with the route's
/// rendered markup. Assumed always available; navigating has no failure
/// mode.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_expose_their_registered_paths() {
        assert_eq!(Route::Bills.path(), "#employee/bills");
        assert_eq!(Route::NewBill.path(), "#employee/bill/new");
        assert_eq!(Route::Login.to_string(), "/");
    }
}
