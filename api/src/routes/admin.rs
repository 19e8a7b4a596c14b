use actix_web::HttpResponse;

use crate::dto::IdentityResponse;
use crate::middleware::AdminUser;

/// Handler for GET /api/v1/admin/whoami
///
/// Admin-only probe: 403 with `ROLE_MISMATCH` for customers.
pub async fn whoami(admin: AdminUser) -> HttpResponse {
    HttpResponse::Ok().json(IdentityResponse::from(admin.0))
}
