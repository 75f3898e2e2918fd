use jsonwebtoken::Algorithm;

/// Configuration for session token security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for verifying session token signatures
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}
