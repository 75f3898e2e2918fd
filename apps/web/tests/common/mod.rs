#![allow(dead_code)]

// tests/common/mod.rs
use std::time::{Duration, SystemTime};

use admitwise_web::auth::claims::AccountType;
use admitwise_web::auth::token::mint_session_token;
use admitwise_web::state::security_config::SecurityConfig;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    web_test_support::logging::init();
}

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

pub fn valid_token(account_type: AccountType) -> String {
    mint_session_token("user-42", account_type, SystemTime::now(), &test_security())
        .expect("mint test token")
}

pub fn expired_token() -> String {
    let past = SystemTime::now() - Duration::from_secs(8 * 24 * 60 * 60);
    mint_session_token("user-42", AccountType::Student, past, &test_security())
        .expect("mint expired test token")
}

/// Token signed with a different secret, so verification must fail.
pub fn tampered_token() -> String {
    let other = SecurityConfig::new(b"a_completely_different_secret".to_vec());
    mint_session_token("user-42", AccountType::Student, SystemTime::now(), &other)
        .expect("mint tampered test token")
}
