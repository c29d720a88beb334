//! Bearer token handling.
//!
//! Tokens live in memory only. They are wrapped in [`SecureString`] so that
//! `Debug` output and log lines never carry the raw value.

use parking_lot::RwLock;
use std::sync::Arc;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Something that can hand out the current bearer token.
///
/// Consulted on every outgoing request, so a token set after startup is
/// picked up by the next call.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<SecureString>;
}

/// In-memory token slot shared between the UI and the HTTP client.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<SecureString>>>,
}

impl TokenStore {
    pub fn new(initial: Option<String>) -> Self {
        let store = Self::default();
        if let Some(token) = initial {
            store.set(token);
        }
        store
    }

    /// Replace the token. Empty strings clear it.
    pub fn set(&self, token: String) {
        let value = (!token.is_empty()).then(|| SecureString::new(token));
        *self.inner.write() = value;
    }

    pub fn clear(&self) {
        *self.inner.write() = None;
    }
}

impl TokenSource for TokenStore {
    fn token(&self) -> Option<SecureString> {
        self.inner.read().clone()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("token", &*self.inner.read())
            .finish()
    }
}
