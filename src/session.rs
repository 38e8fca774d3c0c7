//! Login state for the console. One boolean flag, restored from a persisted
//! marker on startup, owned by a [`Session`] handle that the app provides
//! through context instead of module-level state.

use std::rc::Rc;

use leptos::{create_rw_signal, expect_context, provide_context, RwSignal, SignalGet, SignalSet};

pub const STORAGE_KEY: &str = "isAuthenticated";
const STORAGE_MARKER: &str = "true";

// Client-side password gate for the private preview. Anyone with the shipped
// bundle can read this string; real deployments need server-side verification.
const ADMIN_PASSWORD: &str = "mall-magic-2024";

/// Where the persisted marker lives. The browser build keeps it in
/// `localStorage`; tests and native builds use an in-memory slot with the
/// same semantics.
pub trait MarkerStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn clear(&self);
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl MarkerStore for BrowserStore {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[derive(Default)]
pub struct MemoryStore(std::cell::RefCell<Option<String>>);

impl MarkerStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.0.borrow_mut() = Some(value.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

pub fn default_marker_store() -> Rc<dyn MarkerStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStore::default())
    }
}

/// The session handle. Cheap to clone; all clones share the same flag and
/// marker store, so exactly one session exists per running app.
#[derive(Clone)]
pub struct Session {
    authenticated: RwSignal<bool>,
    store: Rc<dyn MarkerStore>,
}

impl Session {
    /// Rebuilds the session from the persisted marker. Only the exact
    /// literal `"true"` counts as authenticated; anything else (absent,
    /// `"TRUE"`, `"1"`, garbage) restores logged-out.
    pub fn restore(store: Rc<dyn MarkerStore>) -> Self {
        let authenticated = store.read().as_deref() == Some(STORAGE_MARKER);
        Session {
            authenticated: create_rw_signal(authenticated),
            store,
        }
    }

    /// Compares `candidate` against the fixed secret. On match the flag is
    /// set and the marker persisted; on mismatch nothing changes, whatever
    /// the current state.
    pub fn login(&self, candidate: &str) -> bool {
        let valid = candidate == ADMIN_PASSWORD;
        if valid {
            self.authenticated.set(true);
            self.store.write(STORAGE_MARKER);
        }
        valid
    }

    /// Clears the flag and the marker. Safe to call when already logged out.
    pub fn logout(&self) {
        self.authenticated.set(false);
        self.store.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }
}

pub fn provide_session(session: Session) {
    provide_context(session);
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn fresh_store_restores_logged_out() {
        let rt = create_runtime();
        let session = Session::restore(Rc::new(MemoryStore::default()));
        assert!(!session.is_authenticated());
        rt.dispose();
    }

    #[test]
    fn wrong_password_leaves_state_untouched() {
        let rt = create_runtime();
        let store = Rc::new(MemoryStore::default());
        let session = Session::restore(store.clone());

        assert!(!session.login("wrong"));
        assert!(!session.is_authenticated());
        assert_eq!(store.read(), None);

        // A failed attempt while logged in must not log anyone out either.
        assert!(session.login("mall-magic-2024"));
        assert!(!session.login("still wrong"));
        assert!(session.is_authenticated());
        rt.dispose();
    }

    #[test]
    fn correct_password_persists_across_reload() {
        let rt = create_runtime();
        let store = Rc::new(MemoryStore::default());
        let session = Session::restore(store.clone());

        assert!(session.login("mall-magic-2024"));
        assert!(session.is_authenticated());
        assert_eq!(store.read().as_deref(), Some("true"));

        let reloaded = Session::restore(store.clone());
        assert!(reloaded.is_authenticated());
        rt.dispose();
    }

    #[test]
    fn logout_clears_flag_and_marker_and_is_idempotent() {
        let rt = create_runtime();
        let store = Rc::new(MemoryStore::default());
        let session = Session::restore(store.clone());
        session.login("mall-magic-2024");

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(store.read(), None);

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(store.read(), None);

        let reloaded = Session::restore(store.clone());
        assert!(!reloaded.is_authenticated());
        rt.dispose();
    }

    #[test]
    fn only_the_exact_marker_literal_restores_authenticated() {
        let rt = create_runtime();
        for (marker, expected) in [
            ("true", true),
            ("TRUE", false),
            ("1", false),
            ("yes", false),
            (" true", false),
        ] {
            let store = Rc::new(MemoryStore::default());
            store.write(marker);
            let session = Session::restore(store.clone());
            assert_eq!(
                session.is_authenticated(),
                expected,
                "marker {marker:?} should restore authenticated={expected}"
            );
        }
        rt.dispose();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_round_trips_the_marker() {
        let store = BrowserStore;
        store.clear();
        assert_eq!(store.read(), None);
        store.write("true");
        assert_eq!(store.read().as_deref(), Some("true"));
        store.clear();
        assert_eq!(store.read(), None);
    }
}
