use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};

use crate::errors::TokenError;
use crate::models::Claims;

// Issues and verifies the HS256 tokens guarding the page routes. Tokens are
// self-contained: validity is signature correctness plus the embedded
// expiry, and nothing is stored server-side.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        let mut validation = Validation::default();
        // the default 60s leeway would let just-expired tokens through
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub fn issue(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            user_id,
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    // Pure and synchronous; expiry is checked as part of verification, so an
    // expired-but-well-signed token fails here like a tampered one.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    fn sign_with_expiry(user_id: i64, exp: i64) -> String {
        let claims = Claims { user_id, exp };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issued_token_round_trips() {
        let service = TokenService::new(SECRET, 30);
        let token = service.issue(7).unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.user_id, 7);

        // expiry lands about thirty minutes out
        let expected = (Utc::now() + Duration::minutes(30)).timestamp();
        assert!((claims.exp - expected).abs() <= 60);
    }

    #[test]
    fn expired_token_is_classified_as_expired() {
        let service = TokenService::new(SECRET, 30);
        let token = sign_with_expiry(1, (Utc::now() - Duration::minutes(5)).timestamp());

        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn tampered_signature_is_classified_as_bad_signature() {
        let service = TokenService::new(SECRET, 30);
        let token = service.issue(1).unwrap();

        // flip the leading character of the signature segment
        let (prefix, signature) = token.rsplit_once('.').unwrap();
        let flipped = if signature.starts_with('A') { 'B' } else { 'A' };
        let tampered = format!("{}.{}{}", prefix, flipped, &signature[1..]);

        assert_eq!(service.verify(&tampered), Err(TokenError::BadSignature));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let service = TokenService::new(SECRET, 30);
        let foreign = TokenService::new("some-other-secret", 30);
        let token = foreign.issue(1).unwrap();

        assert_eq!(service.verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn garbage_is_classified_as_malformed() {
        let service = TokenService::new(SECRET, 30);
        assert_eq!(service.verify("not-a-token"), Err(TokenError::Malformed));
    }
}
