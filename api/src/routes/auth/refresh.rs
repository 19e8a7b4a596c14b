use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};
use rh_core::{AuthCore, AuthorizationGate};

use crate::dto::TokenResponse;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/auth/refresh
///
/// Re-issues the bearer token presented in the `Authorization` header with
/// fresh issuance and expiry times.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "tokenType": "Bearer",
///     "expiresIn": 1800
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing header, malformed, forged or expired token
/// - 403 Forbidden: token carries an unknown role
pub async fn refresh(
    req: HttpRequest,
    core: web::Data<AuthCore>,
) -> Result<HttpResponse, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let token = AuthorizationGate::bearer_token(header)?;

    let refreshed = core.codec.reissue(token)?;
    tracing::info!("access token refreshed");

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(refreshed, core.codec.ttl_seconds())))
}
