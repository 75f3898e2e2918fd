//! The gate's per-request decision, separated from the HTTP framework so
//! the whole state machine is unit-testable with plain strings.

use crate::auth::claims::SessionClaims;
use crate::auth::token::{verify_session_token, TokenError};
use crate::error::AppError;
use crate::gate::paths::PathClass;
use crate::state::security_config::SecurityConfig;

/// Terminal outcome for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// Pass the request through. Claims are present when a valid token
    /// was verified on the way in.
    Continue { claims: Option<SessionClaims> },
    /// Pass through, but overwrite the session cookie with an expired
    /// value first (auth page visited with a broken token).
    ContinueClearCookie,
    /// Send the visitor to the login page.
    RedirectToLogin {
        redirected_from: String,
        session_expired: bool,
        clear_cookie: bool,
    },
    /// Send the visitor to the home page.
    RedirectToHome,
}

/// Run the gate's state machine for one request.
///
/// Verification failure is never fatal here; it always degrades to an
/// unauthenticated outcome plus a cookie-clearing instruction. The only
/// `Err` is a missing signing secret, which must fail closed.
pub fn decide(
    path: &str,
    class: PathClass,
    token: Option<&str>,
    security: &SecurityConfig,
) -> Result<GateDecision, AppError> {
    match class {
        PathClass::Bypass | PathClass::Public | PathClass::Unmatched => {
            Ok(GateDecision::Continue { claims: None })
        }

        PathClass::Protected { required_role } => {
            let Some(token) = token else {
                return Ok(GateDecision::RedirectToLogin {
                    redirected_from: path.to_string(),
                    session_expired: false,
                    clear_cookie: false,
                });
            };

            match verify_session_token(token, security) {
                Ok(claims) => match required_role {
                    Some(role) if claims.account_type != role => Ok(GateDecision::RedirectToHome),
                    _ => Ok(GateDecision::Continue {
                        claims: Some(claims),
                    }),
                },
                Err(TokenError::MissingSecret) => Err(AppError::config(
                    "session signing secret is not configured".to_string(),
                )),
                Err(_) => Ok(GateDecision::RedirectToLogin {
                    redirected_from: path.to_string(),
                    session_expired: true,
                    clear_cookie: true,
                }),
            }
        }

        PathClass::AuthPage => {
            let Some(token) = token else {
                return Ok(GateDecision::Continue { claims: None });
            };

            match verify_session_token(token, security) {
                Ok(_) => Ok(GateDecision::RedirectToHome),
                Err(TokenError::MissingSecret) => Err(AppError::config(
                    "session signing secret is not configured".to_string(),
                )),
                Err(_) => Ok(GateDecision::ContinueClearCookie),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::{decide, GateDecision};
    use crate::auth::claims::AccountType;
    use crate::auth::token::mint_session_token;
    use crate::error::AppError;
    use crate::gate::paths::PathClass;
    use crate::state::security_config::SecurityConfig;

    fn security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    fn student_token(security: &SecurityConfig) -> String {
        mint_session_token("user-1", AccountType::Student, SystemTime::now(), security).unwrap()
    }

    fn expired_token(security: &SecurityConfig) -> String {
        let past = SystemTime::now() - Duration::from_secs(8 * 24 * 60 * 60);
        mint_session_token("user-1", AccountType::Student, past, security).unwrap()
    }

    #[test]
    fn test_bypass_never_inspects_token() {
        // Garbage token must not matter on a bypassed path.
        let security = security();
        let decision = decide("/favicon.ico", PathClass::Bypass, Some("garbage"), &security);
        assert_eq!(
            decision.unwrap(),
            GateDecision::Continue { claims: None }
        );
    }

    #[test]
    fn test_protected_without_cookie_redirects_to_login() {
        let security = security();
        let decision = decide(
            "/admin-dashboard",
            PathClass::Protected {
                required_role: Some(AccountType::Admin),
            },
            None,
            &security,
        )
        .unwrap();

        assert_eq!(
            decision,
            GateDecision::RedirectToLogin {
                redirected_from: "/admin-dashboard".to_string(),
                session_expired: false,
                clear_cookie: false,
            }
        );
    }

    #[test]
    fn test_protected_with_valid_token_continues() {
        let security = security();
        let token = student_token(&security);
        let decision = decide(
            "/user-dashboard",
            PathClass::Protected {
                required_role: None,
            },
            Some(&token),
            &security,
        )
        .unwrap();

        match decision {
            GateDecision::Continue { claims: Some(claims) } => {
                assert_eq!(claims.sub, "user-1");
                assert_eq!(claims.account_type, AccountType::Student);
            }
            other => panic!("expected continue with claims, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_role_redirects_home_not_login() {
        let security = security();
        let token = student_token(&security);
        let decision = decide(
            "/admin-dashboard",
            PathClass::Protected {
                required_role: Some(AccountType::Admin),
            },
            Some(&token),
            &security,
        )
        .unwrap();

        assert_eq!(decision, GateDecision::RedirectToHome);
    }

    #[test]
    fn test_invalid_token_on_protected_clears_cookie() {
        let security = security();
        let token = expired_token(&security);
        let decision = decide(
            "/preference-list",
            PathClass::Protected {
                required_role: None,
            },
            Some(&token),
            &security,
        )
        .unwrap();

        assert_eq!(
            decision,
            GateDecision::RedirectToLogin {
                redirected_from: "/preference-list".to_string(),
                session_expired: true,
                clear_cookie: true,
            }
        );
    }

    #[test]
    fn test_auth_page_states() {
        let security = security();

        // No cookie: render the auth page.
        assert_eq!(
            decide("/auth/login", PathClass::AuthPage, None, &security).unwrap(),
            GateDecision::Continue { claims: None }
        );

        // Valid token: an authenticated user should not see login.
        let token = student_token(&security);
        assert_eq!(
            decide("/auth/login", PathClass::AuthPage, Some(&token), &security).unwrap(),
            GateDecision::RedirectToHome
        );

        // Broken token: render the page but delete the cookie.
        let token = expired_token(&security);
        assert_eq!(
            decide("/auth/login", PathClass::AuthPage, Some(&token), &security).unwrap(),
            GateDecision::ContinueClearCookie
        );
    }

    #[test]
    fn test_missing_secret_fails_closed() {
        let security = SecurityConfig::new(Vec::new());
        let result = decide(
            "/user-dashboard",
            PathClass::Protected {
                required_role: None,
            },
            Some("some-token"),
            &security,
        );

        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    fn test_decision_is_idempotent() {
        let security = security();
        let token = expired_token(&security);
        let class = PathClass::Protected {
            required_role: None,
        };

        let first = decide("/payment", class, Some(&token), &security).unwrap();
        let second = decide("/payment", class, Some(&token), &security).unwrap();

        assert_eq!(first, second);
    }
}
