//! Credential access for the API client layer.
//!
//! Credentials are read fresh on every request, never cached in memory: the
//! admin bearer token lives in localStorage and the cart session in a cookie
//! the backend owns. The store is injected thread-locally so the client
//! helpers never touch the browser directly and tests can install
//! [`MemoryCredentials`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::window;

/// localStorage key holding the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "animantra_admin_token";

/// Cookie carrying the anonymous shopper's cart session.
pub const CART_SESSION_COOKIE: &str = "cart_session";

pub trait CredentialStore {
    /// Admin bearer token, if the admin has logged in.
    fn admin_token(&self) -> Option<String>;
    fn set_admin_token(&self, token: &str);
    fn clear_admin_token(&self);
    /// Cart session token issued by the backend, if present.
    fn cart_session(&self) -> Option<String>;
}

/// Browser-backed store: localStorage for the token, `document.cookie` for
/// the cart session.
#[derive(Debug, Default)]
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn admin_token(&self) -> Option<String> {
        let storage = window()?.local_storage().ok()??;
        storage.get_item(ADMIN_TOKEN_KEY).ok()?
    }

    fn set_admin_token(&self, token: &str) {
        if let Some(Ok(Some(storage))) = window().map(|w| w.local_storage()) {
            if let Err(e) = storage.set_item(ADMIN_TOKEN_KEY, token) {
                log::error!("Failed to persist admin token: {:?}", e);
            }
        }
    }

    fn clear_admin_token(&self) {
        if let Some(Ok(Some(storage))) = window().map(|w| w.local_storage()) {
            if let Err(e) = storage.remove_item(ADMIN_TOKEN_KEY) {
                log::error!("Failed to clear admin token: {:?}", e);
            }
        }
    }

    fn cart_session(&self) -> Option<String> {
        let document = window()?.document()?;
        let html_document: web_sys::HtmlDocument = document.dyn_into().ok()?;
        let cookies = html_document.cookie().ok()?;
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            if name == CART_SESSION_COOKIE && !value.is_empty() {
                Some(value.to_string())
            } else {
                None
            }
        })
    }
}

/// In-memory store for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: RefCell<Option<String>>,
    session: RefCell<Option<String>>,
}

impl MemoryCredentials {
    pub fn with_session(session: &str) -> Self {
        Self {
            token: RefCell::new(None),
            session: RefCell::new(Some(session.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn admin_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_admin_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_admin_token(&self) {
        *self.token.borrow_mut() = None;
    }

    fn cart_session(&self) -> Option<String> {
        self.session.borrow().clone()
    }
}

thread_local! {
    static STORE: RefCell<Rc<dyn CredentialStore>> = RefCell::new(Rc::new(BrowserCredentials));
}

/// Replace the active store (tests, alternative hosts).
pub fn install(store: Rc<dyn CredentialStore>) {
    STORE.with(|s| *s.borrow_mut() = store);
}

/// Run `f` against the active store.
pub fn with<R>(f: impl FnOnce(&dyn CredentialStore) -> R) -> R {
    STORE.with(|s| f(s.borrow().as_ref()))
}
