pub mod admin;
pub mod auth;
pub mod health;

use actix_web::web;

use crate::middleware::JwtAuth;

/// Registers every route of the API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .service(
                        web::resource("/me")
                            .wrap(JwtAuth)
                            .route(web::get().to(auth::me)),
                    )
                    .route("/refresh", web::post().to(auth::refresh)),
            )
            .service(web::scope("/admin").route("/whoami", web::get().to(admin::whoami))),
    );
}
