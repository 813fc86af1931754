use log::{info, warn};
use shared::auth::{redirect_target, AUTH_FLAG_KEY};
use shared::{Result, UiError};

use crate::dom;

/// Read side of the persisted sign-in marker.
pub trait FlagStore {
    fn has_flag(&self, key: &str) -> Result<bool>;
}

/// Performs the full-page navigation.
pub trait Redirect {
    fn redirect(&self, target: &str) -> Result<()>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl FlagStore for BrowserStorage {
    fn has_flag(&self, key: &str) -> Result<bool> {
        let storage = dom::window()?
            .local_storage()
            .map_err(|e| UiError::StorageUnavailable(dom::js_to_text(&e)))?
            .ok_or_else(|| UiError::StorageUnavailable("localStorage is disabled".to_string()))?;
        let value = storage
            .get_item(key)
            .map_err(|e| UiError::StorageUnavailable(dom::js_to_text(&e)))?;
        Ok(value.is_some())
    }
}

/// Sets `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationRedirect;

impl Redirect for LocationRedirect {
    fn redirect(&self, target: &str) -> Result<()> {
        dom::window()?
            .location()
            .set_href(target)
            .map_err(dom::js_err)
    }
}

/// Sends signed-in users away from the login page.
#[derive(Clone, Debug, Default)]
pub struct AuthGate<S = BrowserStorage, R = LocationRedirect> {
    storage: S,
    redirect: R,
}

impl AuthGate {
    pub fn browser() -> Self {
        Self::default()
    }

    /// Checks the gate against the current location.
    pub fn check_current_page(&self) -> Option<&'static str> {
        let path = dom::window()
            .and_then(|w| w.location().pathname().map_err(dom::js_err))
            .unwrap_or_default();
        self.check(&path)
    }
}

impl<S: FlagStore, R: Redirect> AuthGate<S, R> {
    pub fn new(storage: S, redirect: R) -> Self {
        Self { storage, redirect }
    }

    /// Returns the page it redirected to, if it did.
    ///
    /// A storage read that throws (storage disabled by policy) counts as
    /// "not signed in".
    pub fn check(&self, path: &str) -> Option<&'static str> {
        let flag_present = self.storage.has_flag(AUTH_FLAG_KEY).unwrap_or_else(|e| {
            warn!("Auth flag unreadable, treating as signed out: {}", e);
            false
        });

        let target = redirect_target(path, flag_present)?;
        info!("Already signed in, leaving {} for {}", path, target);
        if let Err(e) = self.redirect.redirect(target) {
            warn!("Redirect to {} failed: {}", target, e);
        }
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FixedFlag(Result<bool>);

    impl FlagStore for FixedFlag {
        fn has_flag(&self, _key: &str) -> Result<bool> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingRedirect(RefCell<Vec<String>>);

    impl Redirect for &RecordingRedirect {
        fn redirect(&self, target: &str) -> Result<()> {
            self.0.borrow_mut().push(target.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_login_page_with_flag_redirects() {
        let recorder = RecordingRedirect::default();
        let gate = AuthGate::new(FixedFlag(Ok(true)), &recorder);

        assert_eq!(gate.check("/login.html"), Some("index.html"));
        assert_eq!(recorder.0.borrow().as_slice(), ["index.html".to_string()]);
    }

    #[test]
    fn test_login_page_without_flag_stays() {
        let recorder = RecordingRedirect::default();
        let gate = AuthGate::new(FixedFlag(Ok(false)), &recorder);

        assert_eq!(gate.check("/login.html"), None);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_other_pages_never_redirect() {
        for flag in [true, false] {
            let recorder = RecordingRedirect::default();
            let gate = AuthGate::new(FixedFlag(Ok(flag)), &recorder);

            assert_eq!(gate.check("/dashboard.html"), None);
            assert_eq!(gate.check("/"), None);
            assert!(recorder.0.borrow().is_empty());
        }
    }

    #[test]
    fn test_unreadable_storage_counts_as_signed_out() {
        let recorder = RecordingRedirect::default();
        let gate = AuthGate::new(
            FixedFlag(Err(UiError::StorageUnavailable("SecurityError".to_string()))),
            &recorder,
        );

        assert_eq!(gate.check("/login.html"), None);
        assert!(recorder.0.borrow().is_empty());
    }
}
