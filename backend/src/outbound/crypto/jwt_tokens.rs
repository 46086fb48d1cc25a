//! HS256 JWT implementation of [`SessionTokens`].
//!
//! Claims are `{email, iat}`. Tokens carry no `exp` and are never revoked;
//! logging out only clears the cookie.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::SessionIdentity;
use crate::domain::ports::{SessionTokenError, SessionTokens};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    email: String,
    iat: i64,
}

/// Signs and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct JwtSessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl JwtSessionTokens {
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }
}

impl SessionTokens for JwtSessionTokens {
    fn issue(&self, identity: &SessionIdentity) -> Result<String, SessionTokenError> {
        let claims = Claims {
            email: identity.email().to_owned(),
            iat: self.clock.utc().timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| SessionTokenError::encode(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionIdentity, SessionTokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|err| SessionTokenError::invalid(err.to_string()))?;
        Ok(SessionIdentity::new(data.claims.email))
    }
}
