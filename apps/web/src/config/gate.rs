//! Gate configuration: cookie name and the site's path tables.
//!
//! Built once at startup and never mutated afterwards; the gate reads it
//! behind an `Arc` on every request.

use crate::auth::claims::AccountType;
use crate::gate::paths::PathRule;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "authToken";

#[derive(Debug, Clone)]
pub struct GateConfig {
    pub cookie_name: &'static str,
    /// Mark cookie overwrites `Secure`, matching what the identity
    /// service mints in production.
    pub secure_cookies: bool,
    pub login_path: &'static str,
    pub home_path: &'static str,
    /// Prefixes that skip the gate entirely (assets, backend API).
    pub bypass_prefixes: Vec<&'static str>,
    /// File extensions that mark a request as a static asset.
    pub static_extensions: Vec<&'static str>,
    /// Prefix rules requiring a valid session token; first match wins.
    pub protected_paths: Vec<PathRule>,
    /// Login/signup pages that redirect away authenticated visitors.
    pub auth_paths: Vec<PathRule>,
    /// Informational only; never gates (the protected table is what the
    /// gate enforces).
    pub public_paths: Vec<PathRule>,
}

impl GateConfig {
    /// The site's route tables.
    pub fn site_default() -> Self {
        Self {
            cookie_name: SESSION_COOKIE,
            secure_cookies: false,
            login_path: "/auth/login",
            home_path: "/",
            bypass_prefixes: vec!["/assets", "/static", "/api"],
            static_extensions: vec![
                "css", "js", "map", "png", "jpg", "jpeg", "svg", "gif", "webp", "ico", "woff",
                "woff2",
            ],
            protected_paths: vec![
                PathRule::prefix_with_role("/admin-dashboard", AccountType::Admin),
                PathRule::prefix("/user-dashboard"),
                PathRule::prefix("/preference-list"),
                PathRule::prefix("/payment"),
            ],
            auth_paths: vec![PathRule::exact("/auth/login"), PathRule::exact("/auth/signup")],
            public_paths: vec![
                PathRule::exact("/"),
                PathRule::prefix("/about-us"),
                PathRule::prefix("/colleges"),
                PathRule::prefix("/blogs"),
                PathRule::prefix("/contact-us"),
                PathRule::prefix("/privacy-policy"),
                PathRule::prefix("/terms-and-conditions"),
            ],
        }
    }
}
