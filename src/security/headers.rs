//! Security headers applied to every HTTP response.
//!
//! The hosted application runs inside a native window, so the served origin
//! is the only line between page content and the local machine. The policy
//! below is a process-wide constant: the same header set is stamped on every
//! response in both modes, including 404/405/500/502, with no per-route
//! exceptions.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Content Security Policy for the hosted application. Clause order and
/// spelling are part of the contract with the window layer.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'unsafe-inline' 'unsafe-eval'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; font-src 'self' data: https:; connect-src 'self' https: ws: wss:; media-src 'self' https:; object-src 'none'; child-src 'none'; frame-src 'none'; base-uri 'self'; form-action 'self'; frame-ancestors 'none';";

/// Full header set stamped on every response.
pub const POLICY_HEADERS: [(&str, &str); 5] = [
    ("content-security-policy", CONTENT_SECURITY_POLICY),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    ("referrer-policy", "no-referrer"),
];

/// Middleware stamping the policy onto the outgoing response.
///
/// Installed as the outermost layer, so the headers land on every response
/// the host emits regardless of what the router decided, error responses
/// included. Existing values are overwritten, never appended to.
pub async fn apply_security_headers(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    for (name, value) in POLICY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}
