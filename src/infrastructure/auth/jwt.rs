use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};

use crate::entities::token::Claims;
use crate::entities::user::User;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            access_expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(JWT_ALGORITHM), claims, &self.keys.encoding).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })
    }
}

impl TokenServiceRepository for JwtService {
    fn create_jwt(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.access_expiration).timestamp() as usize;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            admin: user.is_admin,
            exp,
            iat: now.timestamp() as usize,
        };

        self.encode_claims(&claims)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }

    fn expires_in_secs(&self) -> i64 {
        self.access_expiration.num_seconds()
    }
}

#[cfg(test)]
impl JwtService {
    /// Signs arbitrary claims so tests can build expired or forged tokens.
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        self.encode_claims(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;

    fn config(secret: &str) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "sqlite::memory:".into(),
            database_max_connections: 1,
            cors_allowed_origins: vec![],
            jwt_secret: secret.into(),
            jwt_expiration_minutes: 15,
            admin_username: None,
            admin_password: None,
            public_cache_ttl_secs: 60,
            contact_rate_limit: 5,
            contact_rate_window_secs: 3600,
            trust_x_forwarded_for: false,
        }
    }

    fn user() -> User {
        User {
            id: 42,
            username: "admin".into(),
            password_hash: String::new(),
            is_admin: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn round_trips_claims() {
        let service = JwtService::new(&config("0123456789abcdef0123456789abcdef"));
        let token = service.create_jwt(&user()).unwrap();

        let claims = service.decode_jwt(&token).unwrap().claims;
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "admin");
        assert!(claims.admin);
        assert_eq!(service.expires_in_secs(), 900);
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = JwtService::new(&config("0123456789abcdef0123456789abcdef"));
        let past = Utc::now().timestamp() as usize - 10;
        let token = service
            .sign(&Claims {
                sub: "42".into(),
                username: "admin".into(),
                admin: true,
                exp: past,
                iat: past - 60,
            })
            .unwrap();

        assert!(matches!(service.decode_jwt(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn token_from_another_secret_is_invalid() {
        let issuer = JwtService::new(&config("0123456789abcdef0123456789abcdef"));
        let verifier = JwtService::new(&config("fedcba9876543210fedcba9876543210"));
        let token = issuer.create_jwt(&user()).unwrap();

        assert!(matches!(verifier.decode_jwt(&token), Err(AuthError::InvalidToken)));
    }
}
