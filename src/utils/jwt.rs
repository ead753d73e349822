use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const ROLE_MITRA: &str = "mitra";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // mitra id
    pub email: String,
    pub role: String, // always set by the server, never taken from a request
    pub exp: i64,
    pub iat: i64,
    pub token_type: String, // "access" or "refresh"
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expires_in: i64,
    refresh_token_expires_in: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_expires_in: i64, refresh_expires_in: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expires_in: access_expires_in,
            refresh_token_expires_in: refresh_expires_in,
        }
    }

    pub fn generate_access_token(&self, mitra_id: i64, email: &str) -> AppResult<String> {
        self.generate_token(mitra_id, email, "access", self.access_token_expires_in)
    }

    pub fn generate_refresh_token(&self, mitra_id: i64, email: &str) -> AppResult<String> {
        self.generate_token(mitra_id, email, "refresh", self.refresh_token_expires_in)
    }

    fn generate_token(
        &self,
        mitra_id: i64,
        email: &str,
        token_type: &str,
        expires_in: i64,
    ) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expires_in);

        let claims = Claims {
            sub: mitra_id.to_string(),
            email: email.to_string(),
            role: ROLE_MITRA.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AppError::JwtError)
    }

    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(AppError::JwtError)
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify_token(token)?;

        if claims.token_type != "access" {
            return Err(AppError::AuthError("Invalid access token type".to_string()));
        }
        if claims.role != ROLE_MITRA {
            return Err(AppError::AuthError("Invalid token role".to_string()));
        }

        Ok(claims)
    }

    pub fn verify_refresh_token(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify_token(token)?;

        if claims.token_type != "refresh" {
            return Err(AppError::AuthError(
                "Invalid refresh token type".to_string(),
            ));
        }

        Ok(claims)
    }

    pub fn get_access_token_expires_in(&self) -> i64 {
        self.access_token_expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret", 3600, 86400)
    }

    #[test]
    fn test_access_token_round_trip() {
        let svc = service();
        let token = svc.generate_access_token(42, "toko@example.com").unwrap();
        let claims = svc.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "toko@example.com");
        assert_eq!(claims.role, ROLE_MITRA);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let svc = service();
        let refresh = svc.generate_refresh_token(42, "toko@example.com").unwrap();

        assert!(svc.verify_access_token(&refresh).is_err());
        assert!(svc.verify_refresh_token(&refresh).is_ok());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let svc = service();
        let token = svc.generate_access_token(42, "toko@example.com").unwrap();
        let other = JwtService::new("another-secret", 3600, 86400);

        assert!(other.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // well past the validation leeway
        let svc = JwtService::new("test-secret", -3600, 86400);
        let token = svc.generate_access_token(42, "toko@example.com").unwrap();

        assert!(service().verify_access_token(&token).is_err());
    }
}
