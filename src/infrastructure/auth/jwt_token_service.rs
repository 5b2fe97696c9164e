use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::ports::{TokenError, TokenService};
use crate::domain::authorization::UserContext;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    sub: String,
    is_admin: bool,
    iat: i64,
    exp: i64,
}

/// HS256 bearer tokens carrying the username and admin flag
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &UserContext) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.username.clone(),
            is_admin: user.is_admin,
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<UserContext, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        Ok(UserContext::new(data.claims.sub, data.claims.is_admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_verifies() {
        let service = JwtTokenService::new("test-secret", 60);
        let token = service.issue(&UserContext::new("u1", true)).unwrap();

        let context = service.verify(&token).unwrap();
        assert_eq!(context, UserContext::new("u1", true));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = JwtTokenService::new("secret-a", 60)
            .issue(&UserContext::new("u1", false))
            .unwrap();

        assert!(JwtTokenService::new("secret-b", 60).verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtTokenService::new("test-secret", 60);
        let claims = Claims {
            sub: "u1".to_string(),
            is_admin: false,
            iat: 1_000,
            exp: 2_000,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &service.encoding_key).unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let service = JwtTokenService::new("test-secret", 60);
        assert!(service.verify("not.a.token").is_err());
    }

    #[test]
    fn test_claims_use_camel_case() {
        let claims = Claims {
            sub: "u1".to_string(),
            is_admin: true,
            iat: 1,
            exp: 2,
        };
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["isAdmin"], true);
        assert_eq!(value["sub"], "u1");
    }
}
