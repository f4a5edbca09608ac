//! Basic Authentication for inbound service hooks
//!
//! Azure DevOps service hooks can only send Basic credentials, so the relay
//! checks `Authorization: Basic base64(user:pass)` against configured values.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use subtle::ConstantTimeEq;

use crate::config::RelayConfig;
use crate::domain::Credentials;

const BASIC_SCHEME: &str = "basic";

/// Result of checking an inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    /// Expected username or password is not configured
    NotConfigured,
    MissingHeader,
    MalformedHeader(String),
    CredentialsMismatch,
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Check an `Authorization` header value against the configured credentials
///
/// Fails closed when the expected credentials are not configured. Logs one
/// event per outcome.
pub fn authenticate(config: &RelayConfig, authorization: Option<&str>) -> AuthOutcome {
    let outcome = evaluate(config, authorization);

    match &outcome {
        AuthOutcome::Authenticated => tracing::info!("Basic authentication successful"),
        AuthOutcome::NotConfigured => tracing::error!(
            "Basic authentication is not configured ({} / {} missing)",
            crate::config::ENV_WEBHOOK_USER,
            crate::config::ENV_WEBHOOK_PASS
        ),
        AuthOutcome::MissingHeader => {
            tracing::warn!("Basic authentication failed: missing or non-Basic Authorization header")
        }
        AuthOutcome::MalformedHeader(reason) => {
            tracing::error!(reason = %reason, "Basic authentication failed: malformed Authorization header")
        }
        AuthOutcome::CredentialsMismatch => {
            tracing::warn!("Basic authentication failed: credentials mismatch")
        }
    }

    outcome
}

fn evaluate(config: &RelayConfig, authorization: Option<&str>) -> AuthOutcome {
    let Some(expected) = config.expected_credentials() else {
        return AuthOutcome::NotConfigured;
    };

    let Some(encoded) = authorization.and_then(strip_basic_scheme) else {
        return AuthOutcome::MissingHeader;
    };

    let provided = match decode_credentials(encoded) {
        Ok(creds) => creds,
        Err(reason) => return AuthOutcome::MalformedHeader(reason),
    };

    let user_ok = provided.username.as_bytes().ct_eq(expected.username.as_bytes());
    let pass_ok = provided.password.as_bytes().ct_eq(expected.password.as_bytes());

    if (user_ok & pass_ok).into() {
        AuthOutcome::Authenticated
    } else {
        AuthOutcome::CredentialsMismatch
    }
}

/// `Basic <token>` (scheme matched case-insensitively) → `<token>`
fn strip_basic_scheme(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case(BASIC_SCHEME)
        .then_some(token.trim())
}

/// Decode `base64(user:pass)` into credentials
pub fn decode_credentials(encoded: &str) -> Result<Credentials, String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| format!("invalid base64: {e}"))?;
    let decoded = String::from_utf8(bytes).map_err(|e| format!("invalid UTF-8: {e}"))?;
    Credentials::from_pair(&decoded).ok_or_else(|| "missing ':' separator".to_string())
}

/// Encode credentials as an `Authorization` header value
pub fn basic_header(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(pair))
}
