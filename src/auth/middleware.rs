use std::future::{ready, Ready};

use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{
    auth::{claims::Claims, jwt::JwtService},
    errors::AppError,
};

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

fn validate(req: &HttpRequest, token: &str) -> Result<Claims, AppError> {
    let jwt_service = req
        .app_data::<web::Data<JwtService>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    jwt_service.validate_token(token)
}

/// Extractor for handlers that require a signed-in player.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = match bearer_token(req) {
            Some(token) => validate(req, token),
            None => Err(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            )),
        };

        ready(claims.map(AuthenticatedUser))
    }
}

/// Extractor for handlers where anonymous play is allowed. No Authorization
/// header means no identity; a present but invalid token is still rejected.
pub struct MaybeUser(pub Option<Claims>);

impl MaybeUser {
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_ref().map(|claims| claims.sub.as_str())
    }
}

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let result = match bearer_token(req) {
            Some(token) => validate(req, token).map(|claims| MaybeUser(Some(claims))),
            None => Ok(MaybeUser(None)),
        };

        ready(result)
    }
}
