use std::fmt;

/// Who may open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    SuperAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Customers,
    Bookings,
    Vendors,
    Subscriptions,
    Plans,
    AdminManagement,
    NotFound,
}

impl Route {
    pub const PROTECTED: [Route; 7] = [
        Route::Dashboard,
        Route::Customers,
        Route::Bookings,
        Route::Vendors,
        Route::Subscriptions,
        Route::Plans,
        Route::AdminManagement,
    ];

    /// `/` is an alias of `/login`; trailing slashes and query strings are ignored
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/customer" => Route::Customers,
            "/booking" => Route::Bookings,
            "/vendor" => Route::Vendors,
            "/subscription" => Route::Subscriptions,
            "/plans" => Route::Plans,
            "/admin-management" => Route::AdminManagement,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Customers => "/customer",
            Route::Bookings => "/booking",
            Route::Vendors => "/vendor",
            Route::Subscriptions => "/subscription",
            Route::Plans => "/plans",
            Route::AdminManagement => "/admin-management",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Admin Login",
            Route::Dashboard => "Dashboard",
            Route::Customers => "Customers",
            Route::Bookings => "Bookings",
            Route::Vendors => "Vendors",
            Route::Subscriptions => "Subscriptions",
            Route::Plans => "Plans",
            Route::AdminManagement => "Admin Management",
            Route::NotFound => "Not Found",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::NotFound => Access::Public,
            Route::AdminManagement => Access::SuperAdmin,
            _ => Access::Authenticated,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Login)]
    #[case("", Route::Login)]
    #[case("/login", Route::Login)]
    #[case("/dashboard/", Route::Dashboard)]
    #[case("/customer?status=Active", Route::Customers)]
    #[case("/subscription", Route::Subscriptions)]
    #[case("/admin-management", Route::AdminManagement)]
    #[case("/nope", Route::NotFound)]
    fn paths_resolve(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[rstest]
    fn protected_routes_round_trip_through_their_path() {
        for route in Route::PROTECTED {
            assert_eq!(Route::from_path(route.path()), route);
            assert_ne!(route.access(), Access::Public);
        }
    }
}
