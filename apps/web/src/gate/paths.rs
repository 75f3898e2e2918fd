//! Pure path classification for the request gate.
//!
//! Classification is ordered: bypass rules first, then the protected
//! table, then auth pages, then the public table. Public entries are
//! documentation of intent; they never short-circuit the protected
//! check, which is what the gate actually enforces.

use crate::auth::claims::AccountType;
use crate::config::gate::GateConfig;

/// How a path rule matches the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
}

/// One entry in the protected/public/auth path tables.
#[derive(Debug, Clone)]
pub struct PathRule {
    pub pattern: &'static str,
    pub kind: MatchKind,
    /// Role required to pass this rule, when set. Only meaningful for
    /// protected entries.
    pub required_role: Option<AccountType>,
}

impl PathRule {
    pub const fn exact(pattern: &'static str) -> Self {
        Self {
            pattern,
            kind: MatchKind::Exact,
            required_role: None,
        }
    }

    pub const fn prefix(pattern: &'static str) -> Self {
        Self {
            pattern,
            kind: MatchKind::Prefix,
            required_role: None,
        }
    }

    pub const fn prefix_with_role(pattern: &'static str, role: AccountType) -> Self {
        Self {
            pattern,
            kind: MatchKind::Prefix,
            required_role: Some(role),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self.kind {
            MatchKind::Exact => path == self.pattern,
            MatchKind::Prefix => path.starts_with(self.pattern),
        }
    }
}

/// Outcome of classifying a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Static asset or backend API path; auth logic must not run.
    Bypass,
    /// Requires a valid session token, and optionally a specific role.
    Protected { required_role: Option<AccountType> },
    /// Login/signup page; authenticated visitors are redirected away.
    AuthPage,
    /// Explicitly listed as reachable without authentication.
    Public,
    /// Not in any table; passes through untouched.
    Unmatched,
}

/// Classify a request path against the gate configuration.
///
/// First match wins in the order Bypass, Protected, AuthPage, Public.
pub fn classify(path: &str, config: &GateConfig) -> PathClass {
    if config
        .bypass_prefixes
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || has_static_extension(path, &config.static_extensions)
    {
        return PathClass::Bypass;
    }

    if let Some(rule) = config.protected_paths.iter().find(|r| r.matches(path)) {
        return PathClass::Protected {
            required_role: rule.required_role,
        };
    }

    if config.auth_paths.iter().any(|r| r.matches(path)) {
        return PathClass::AuthPage;
    }

    if config.public_paths.iter().any(|r| r.matches(path)) {
        return PathClass::Public;
    }

    PathClass::Unmatched
}

fn has_static_extension(path: &str, extensions: &[&'static str]) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => extensions.iter().any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, PathClass};
    use crate::auth::claims::AccountType;
    use crate::config::gate::GateConfig;

    fn config() -> GateConfig {
        GateConfig::site_default()
    }

    #[test]
    fn test_asset_prefixes_bypass() {
        let config = config();
        assert_eq!(classify("/assets/logo.png", &config), PathClass::Bypass);
        assert_eq!(classify("/static/app.css", &config), PathClass::Bypass);
        assert_eq!(classify("/api/colleges", &config), PathClass::Bypass);
    }

    #[test]
    fn test_static_extensions_bypass_anywhere() {
        let config = config();
        assert_eq!(classify("/favicon.ico", &config), PathClass::Bypass);
        assert_eq!(classify("/images/hero.webp", &config), PathClass::Bypass);
        assert_eq!(classify("/fonts/inter.WOFF2", &config), PathClass::Bypass);
    }

    #[test]
    fn test_protected_prefixes() {
        let config = config();
        assert_eq!(
            classify("/user-dashboard", &config),
            PathClass::Protected {
                required_role: None
            }
        );
        assert_eq!(
            classify("/user-dashboard/settings", &config),
            PathClass::Protected {
                required_role: None
            }
        );
        assert_eq!(
            classify("/admin-dashboard/colleges", &config),
            PathClass::Protected {
                required_role: Some(AccountType::Admin)
            }
        );
    }

    #[test]
    fn test_auth_pages_are_exact() {
        let config = config();
        assert_eq!(classify("/auth/login", &config), PathClass::AuthPage);
        assert_eq!(classify("/auth/signup", &config), PathClass::AuthPage);
        assert_eq!(classify("/auth/login/extra", &config), PathClass::Unmatched);
    }

    #[test]
    fn test_public_and_unmatched() {
        let config = config();
        assert_eq!(classify("/", &config), PathClass::Public);
        assert_eq!(classify("/colleges/some-college", &config), PathClass::Public);
        assert_eq!(classify("/no-such-page", &config), PathClass::Unmatched);
    }

    #[test]
    fn test_home_is_exact_not_prefix() {
        // "/" must not act as a prefix rule and swallow every path.
        let config = config();
        assert_eq!(classify("/preference-list", &config), PathClass::Protected {
            required_role: None
        });
    }
}
