//! Bearer-token authentication for protected endpoints.
//!
//! `JwtAuth` authenticates every request of the scope it wraps and stores
//! the principal in the request extensions. The `AuthenticatedUser` and
//! `AdminUser` extractors consult the same `AuthorizationGate`, taken from
//! the `web::Data<AuthCore>` registered on the app.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use rh_core::{AuthCore, Identity, Role};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::ApiError;

/// Principal authenticated for the current request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl AuthenticatedUser {
    pub fn identity(&self) -> &Identity {
        &self.0
    }

    pub fn into_inner(self) -> Identity {
        self.0
    }
}

/// Principal holding the administrator role
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let authenticated = auth_core(req.app_data::<web::Data<AuthCore>>())
                .and_then(|core| {
                    core.gate
                        .authenticate(authorization_header(req.headers()))
                        .map_err(ApiError::from)
                });

            match authenticated {
                Ok(identity) => {
                    req.extensions_mut().insert(AuthenticatedUser(identity));
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(error) => Ok(req.error_response(error).map_into_right_body()),
            }
        })
    }
}

/// Raw `Authorization` header value; non-UTF-8 values count as absent
fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok())
}

fn auth_core(data: Option<&web::Data<AuthCore>>) -> Result<&AuthCore, ApiError> {
    data.map(|data| data.get_ref())
        .ok_or_else(|| ApiError::Internal(String::from("authorization gate is not configured")))
}

/// Checks that the caller owns `owner_id` (or is an administrator).
///
/// For ownership-sensitive handlers: editing one's recipes, favorites and
/// ratings.
pub fn authorize_owner(req: &HttpRequest, owner_id: i64) -> Result<Identity, ApiError> {
    let core = auth_core(req.app_data::<web::Data<AuthCore>>())?;
    Ok(core.gate.require_owner(authorization_header(req.headers()), owner_id)?)
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(user) = req.extensions().get::<AuthenticatedUser>().cloned() {
            return ready(Ok(user));
        }

        // Not behind JwtAuth: authenticate on the spot
        let result = auth_core(req.app_data::<web::Data<AuthCore>>()).and_then(|core| {
            core.gate
                .authenticate(authorization_header(req.headers()))
                .map(AuthenticatedUser)
                .map_err(ApiError::from)
        });
        ready(result)
    }
}

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = auth_core(req.app_data::<web::Data<AuthCore>>()).and_then(|core| {
            core.gate
                .require_role(authorization_header(req.headers()), Role::Admin)
                .map(AdminUser)
                .map_err(ApiError::from)
        });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;

    #[test]
    fn test_authorization_header() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(authorization_header(req.headers()), Some("Bearer test_token_123"));

        let req_no_header = actix_test::TestRequest::default().to_srv_request();
        assert_eq!(authorization_header(req_no_header.headers()), None);
    }

    #[test]
    fn test_missing_auth_core_is_internal_error() {
        let req = actix_test::TestRequest::default().to_http_request();
        assert!(matches!(
            authorize_owner(&req, 1),
            Err(ApiError::Internal(_))
        ));
    }
}
