//! Session guard: the stored bearer credential decides whether the dashboard loads at all.

use tracing::info;

use crate::config::DashboardConfig;

/// Read-only view of browser-local persistent storage.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Full-page navigation away from the dashboard.
pub trait Redirector {
    fn redirect(&self, target: &str);
}

/// Opaque bearer credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(<{} bytes>)", self.0.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionGate {
    Authenticated(SessionToken),
    /// No credential was stored; a redirect to the login page has been issued.
    Redirected,
}

/// Returns the stored token unchanged, or redirects to the login page.
///
/// An empty stored value counts as absent. Expiry and format are not checked here;
/// a stale token surfaces as a failed fetch.
pub fn ensure_session(
    store: &dyn TokenStore,
    redirector: &dyn Redirector,
    config: &DashboardConfig,
) -> SessionGate {
    match store.get(&config.token_key) {
        Some(raw) if !raw.is_empty() => SessionGate::Authenticated(SessionToken::new(raw)),
        _ => {
            info!(login_url = %config.login_url, "no stored session, redirecting to login");
            redirector.redirect(&config.login_url);
            SessionGate::Redirected
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct MemoryStore(pub(crate) HashMap<String, String>);

    impl MemoryStore {
        pub(crate) fn with(key: &str, value: &str) -> Self {
            let mut map = HashMap::new();
            map.insert(key.to_string(), value.to_string());
            Self(map)
        }
    }

    impl TokenStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingRedirector(pub(crate) RefCell<Vec<String>>);

    impl Redirector for RecordingRedirector {
        fn redirect(&self, target: &str) {
            self.0.borrow_mut().push(target.to_string());
        }
    }

    #[test]
    fn stored_token_is_returned_unchanged() {
        let store = MemoryStore::with("token", "abc.def.ghi");
        let redirector = RecordingRedirector::default();
        let gate = ensure_session(&store, &redirector, &DashboardConfig::default());

        assert_eq!(
            gate,
            SessionGate::Authenticated(SessionToken::new("abc.def.ghi"))
        );
        assert!(redirector.0.borrow().is_empty());
    }

    #[test]
    fn missing_token_redirects_to_login() {
        let store = MemoryStore::default();
        let redirector = RecordingRedirector::default();
        let gate = ensure_session(&store, &redirector, &DashboardConfig::default());

        assert_eq!(gate, SessionGate::Redirected);
        assert_eq!(*redirector.0.borrow(), vec!["login.html".to_string()]);
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = MemoryStore::with("token", "");
        let redirector = RecordingRedirector::default();
        let gate = ensure_session(&store, &redirector, &DashboardConfig::default());

        assert_eq!(gate, SessionGate::Redirected);
        assert_eq!(redirector.0.borrow().len(), 1);
    }

    #[test]
    fn debug_output_hides_credential() {
        let token = SessionToken::new("super-secret");
        let dbg = format!("{token:?}");
        assert!(!dbg.contains("super-secret"));
        assert_eq!(token.bearer_header(), "Bearer super-secret");
    }
}
