use actix_web::HttpResponse;

use crate::dto::IdentityResponse;
use crate::middleware::AuthenticatedUser;

/// Handler for GET /api/v1/auth/me
///
/// Returns the principal encoded in the presented bearer token.
///
/// ## Errors
/// - 401 Unauthorized: missing header, malformed, forged or expired token
/// - 403 Forbidden: token carries an unknown role
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(IdentityResponse::from(user.into_inner()))
}
