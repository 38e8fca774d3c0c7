//! The routing surface as data: a closed set of paths plus the gate
//! decision evaluated before anything protected renders. The router
//! components in `lib.rs` and the guard in `components/guard.rs` are thin
//! wrappers over this table.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
    Admin,
    Sales,
    Inventory,
    Purchase,
    Payment,
    Issues,
}

/// Sidebar order.
pub const NAV_ROUTES: [AppRoute; 7] = [
    AppRoute::Dashboard,
    AppRoute::Admin,
    AppRoute::Sales,
    AppRoute::Inventory,
    AppRoute::Purchase,
    AppRoute::Payment,
    AppRoute::Issues,
];

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Admin => "/admin",
            AppRoute::Sales => "/sales",
            AppRoute::Inventory => "/inventory",
            AppRoute::Purchase => "/purchase",
            AppRoute::Payment => "/payment",
            AppRoute::Issues => "/issues",
        }
    }

    /// `None` means "no such route" and lands on the not-found view. The
    /// bare root resolves to `Login`, which bounces authenticated visitors
    /// on to the dashboard.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/login" => Some(AppRoute::Login),
            "/dashboard" => Some(AppRoute::Dashboard),
            "/admin" => Some(AppRoute::Admin),
            "/sales" => Some(AppRoute::Sales),
            "/inventory" => Some(AppRoute::Inventory),
            "/purchase" => Some(AppRoute::Purchase),
            "/payment" => Some(AppRoute::Payment),
            "/issues" => Some(AppRoute::Issues),
            _ => None,
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, AppRoute::Login)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Render the view for this path.
    Allow,
    /// Redirect to the login form. The originally requested path is
    /// discarded; there is no return-after-login memory.
    ToLogin,
    /// Already authenticated on the login path; go to the dashboard.
    ToDashboard,
}

pub fn gate(route: Option<AppRoute>, authenticated: bool) -> Gate {
    match route {
        Some(AppRoute::Login) if authenticated => Gate::ToDashboard,
        Some(AppRoute::Login) => Gate::Allow,
        // Unknown paths render the public not-found view.
        None => Gate::Allow,
        Some(_) if authenticated => Gate::Allow,
        Some(_) => Gate::ToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_business_route_is_gated() {
        for route in NAV_ROUTES {
            assert!(route.requires_auth());
            assert_eq!(gate(Some(route), false), Gate::ToLogin);
            assert_eq!(gate(Some(route), true), Gate::Allow);
        }
    }

    #[test]
    fn login_is_public_but_bounces_authenticated_visitors() {
        assert!(!AppRoute::Login.requires_auth());
        assert_eq!(gate(Some(AppRoute::Login), false), Gate::Allow);
        assert_eq!(gate(Some(AppRoute::Login), true), Gate::ToDashboard);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/no-such-page"), None);
        assert_eq!(gate(None, false), Gate::Allow);
        assert_eq!(gate(None, true), Gate::Allow);
    }

    #[test]
    fn paths_round_trip_through_the_table() {
        for route in NAV_ROUTES {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
        assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Login));
        assert_eq!(AppRoute::from_path("/sales/"), Some(AppRoute::Sales));
    }
}
