//! Authentication header building for API requests.

use super::credentials::TokenSource;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the bearer header for an outgoing request.
///
/// Returns `None` when auth is disabled or the source has no token; the
/// request then goes out unauthenticated.
pub fn build_auth_header(enabled: bool, source: &dyn TokenSource) -> Option<AuthHeader> {
    if !enabled {
        return None;
    }

    let token = source.token()?;
    Some((
        "Authorization".to_string(),
        format!("Bearer {}", token.expose()),
    ))
}
