use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::shared::api::ApiResponse;
use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::TokenProvider;

/// The bearer-token user when an `Authorization` header is sent. A request
/// without the header is anonymous; a header that does not verify is
/// rejected with 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaybeAuthenticatedUser(pub Option<UserId>);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for MaybeAuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(header) = req.headers().get("Authorization") else {
            return ready(Ok(MaybeAuthenticatedUser(None)));
        };

        let token = match header.to_str().ok().and_then(|v| v.strip_prefix("Bearer ")) {
            Some(t) if !t.trim().is_empty() => t.trim(),
            _ => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_AUTH_HEADER",
                    "Authorization header must be 'Bearer <token>'",
                ))));
            }
        };

        let Some(token_provider) =
            req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        else {
            tracing::error!("TokenProvider missing from app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        match token_provider.verify_token(token) {
            Ok(claims) => ready(Ok(MaybeAuthenticatedUser(Some(claims.user_id())))),
            Err(e) => {
                tracing::debug!("bearer token rejected: {}", e);
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}
