//! Session presence for the account/login controls.
//!
//! Authentication itself lives elsewhere; the landing page only needs to
//! know whether a token exists and how to drop it.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use tracing::{debug, warn};

use crate::error::SessionError;

/// Where the session token is persisted between page loads.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// Token kept in `window.localStorage`.
#[derive(Clone, Debug)]
pub struct BrowserTokenStore {
    key: &'static str,
}

impl BrowserTokenStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Result<web_sys::Storage, SessionError> {
        let window = web_sys::window().ok_or(SessionError::NoWindow)?;
        window
            .local_storage()
            .map_err(|err| SessionError::Storage(format!("{err:?}")))?
            .ok_or(SessionError::StorageUnavailable)
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(self.key).ok().flatten(),
            Err(err) => {
                warn!(%err, "cannot read session token");
                None
            }
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(self.key)
            .map_err(|err| SessionError::Storage(format!("{err:?}")))
    }
}

/// Token held in memory. Used for prerendering and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|token| token.clone())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Ok(mut token) = self.token.lock() {
            *token = None;
        }
        Ok(())
    }
}

/// Which set of session controls the navbar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionView {
    /// Signed in: dashboard link and log out
    Account,
    /// Signed out: log in link
    Guest,
}

impl SessionView {
    /// An empty token is treated as no token.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Account,
            _ => Self::Guest,
        }
    }
}

/// Reactive handle on the current session.
#[derive(Clone, Copy)]
pub struct UserSession {
    token: RwSignal<Option<String>>,
    store: StoredValue<Arc<dyn TokenStore>>,
}

impl UserSession {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        let token = store.load();
        debug!(signed_in = token.is_some(), "session loaded");
        Self {
            token: RwSignal::new(token),
            store: StoredValue::new(Arc::new(store) as Arc<dyn TokenStore>),
        }
    }

    /// A session with no token and nothing persisted.
    pub fn guest() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Tracked read of the token.
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.view() == SessionView::Account
    }

    /// Tracked session view derived from the token.
    pub fn view(&self) -> SessionView {
        self.token.with(|token| SessionView::from_token(token.as_deref()))
    }

    /// Forgets the token in memory, then clears the persisted copy.
    ///
    /// The in-memory token is dropped even when the store fails, so the UI
    /// always reflects the user's intent to sign out.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.token.set(None);
        self.store.with_value(|store| store.clear())
    }
}

pub fn provide_user_session(session: UserSession) -> UserSession {
    provide_context(session);
    session
}

/// Session from context. Without one the visitor is a guest.
pub fn use_user() -> UserSession {
    use_context::<UserSession>().unwrap_or_else(|| {
        debug!("no session in context, using guest session");
        provide_user_session(UserSession::guest())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingStore;

    impl TokenStore for FailingStore {
        fn load(&self) -> Option<String> {
            Some("abc".into())
        }

        fn clear(&self) -> Result<(), SessionError> {
            Err(SessionError::StorageUnavailable)
        }
    }

    #[test]
    fn session_view_follows_token_presence() {
        assert_eq!(SessionView::from_token(Some("jwt")), SessionView::Account);
        assert_eq!(SessionView::from_token(None), SessionView::Guest);
        assert_eq!(SessionView::from_token(Some("")), SessionView::Guest);
    }

    #[test]
    fn logout_clears_token_and_store() {
        let owner = Owner::new();
        owner.with(|| {
            let session = UserSession::new(MemoryTokenStore::with_token("jwt"));
            assert!(session.is_authenticated());
            assert_eq!(session.logout(), Ok(()));
            assert!(!session.is_authenticated());
            assert_eq!(session.token(), None);
            assert_eq!(session.store.with_value(|s| s.load()), None);
        });
    }

    #[test]
    fn failed_logout_still_signs_out_locally() {
        let owner = Owner::new();
        owner.with(|| {
            let session = UserSession::new(FailingStore);
            assert_eq!(session.view(), SessionView::Account);
            assert_eq!(session.logout(), Err(SessionError::StorageUnavailable));
            assert_eq!(session.view(), SessionView::Guest);
        });
    }

    #[test]
    fn missing_context_yields_guest() {
        let owner = Owner::new();
        owner.with(|| assert_eq!(use_user().view(), SessionView::Guest));
    }
}
