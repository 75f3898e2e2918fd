//! Session token claims shared across the application.

use serde::{Deserialize, Serialize};

/// Role carried in the session token's `accountType` claim.
///
/// The values match what the identity service mints, so serde names are
/// capitalized on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Student,
    Admin,
}

/// Decoded session token payload, inserted into request extensions by the
/// request gate when verification succeeds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// External user identifier
    pub sub: String,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
