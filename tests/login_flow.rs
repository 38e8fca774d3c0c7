//! End-to-end exercise of the login lifecycle against an in-memory marker
//! store, including the reload simulations a browser session would go
//! through.

use std::rc::Rc;

use mall_magic::routes::{gate, AppRoute, Gate};
use mall_magic::session::{MemoryStore, Session};

#[test]
fn full_login_lifecycle() {
    let rt = leptos::create_runtime();
    let store = Rc::new(MemoryStore::default());

    // Fresh process: no marker, logged out, every business page gated.
    let session = Session::restore(store.clone());
    assert!(!session.is_authenticated());
    for path in ["/dashboard", "/admin", "/sales", "/inventory", "/purchase", "/payment", "/issues"] {
        let route = AppRoute::from_path(path);
        assert_eq!(gate(route, session.is_authenticated()), Gate::ToLogin, "{path} should redirect");
    }

    // Wrong password: rejected, still logged out.
    assert!(!session.login("wrong"));
    assert!(!session.is_authenticated());

    // Right password: accepted and persisted.
    assert!(session.login("mall-magic-2024"));
    assert!(session.is_authenticated());
    for path in ["/dashboard", "/admin", "/sales", "/inventory", "/purchase", "/payment", "/issues"] {
        let route = AppRoute::from_path(path);
        assert_eq!(gate(route, session.is_authenticated()), Gate::Allow, "{path} should render");
    }

    // An authenticated visit to the login form bounces to the dashboard.
    assert_eq!(
        gate(AppRoute::from_path("/login"), session.is_authenticated()),
        Gate::ToDashboard
    );

    // Reload: the marker alone restores the authenticated state.
    let reloaded = Session::restore(store.clone());
    assert!(reloaded.is_authenticated());

    // Logout sticks across another reload.
    reloaded.logout();
    let after_logout = Session::restore(store);
    assert!(!after_logout.is_authenticated());

    rt.dispose();
}
