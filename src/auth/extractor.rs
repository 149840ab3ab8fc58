use std::future::{ready, Ready};

use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{
    auth::{Claims, IdentityVerifier},
    errors::AppError,
};

/// Extractor for the authenticated caller in handlers.
///
/// Pulls the `Authorization: Bearer` header and verifies it against the
/// identity provider's signing secret. Handlers that take this parameter
/// reject unauthenticated requests with 401.
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        &self.0.sub
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let verifier = req
        .app_data::<web::Data<IdentityVerifier>>()
        .ok_or_else(|| AppError::InternalError("identity verifier not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("invalid authorization header format".to_string()))?;

    let claims = verifier.verify(token)?;
    Ok(AuthenticatedUser(claims))
}
