use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web, Error, HttpMessage, ResponseError,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    constants::PUBLIC_READ_PREFIXES,
    entities::token::Claims,
    errors::AuthError,
    use_cases::extractors::bearer_token,
    AppState,
};

/// Lets public routes through, and requires a valid, unrevoked bearer token
/// everywhere else. Outside `/api/auth` the token must carry the admin claim.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if is_public_route(req.path(), req.method()) {
                return service.call(req).await;
            }

            let claims = match get_valid_claims(&req) {
                Ok(claims) => claims,
                Err(e) => {
                    tracing::warn!(path = %req.path(), "Rejected request: {}", e);
                    return Ok(req.into_response(e.error_response()));
                }
            };

            if let Err(e) = enforce_admin_access(req.path(), &claims) {
                tracing::warn!(path = %req.path(), user = %claims.sub, "Admin access required");
                return Ok(req.into_response(e.error_response()));
            }

            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}

pub fn is_public_route(path: &str, method: &Method) -> bool {
    if method == Method::OPTIONS {
        return true;
    }

    if method == Method::GET {
        return path == "/"
            || PUBLIC_READ_PREFIXES
                .iter()
                .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")));
    }

    method == Method::POST && matches!(path, "/api/auth/login" | "/api/contact")
}

fn get_valid_claims(req: &ServiceRequest) -> Result<Claims, AuthError> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState missing in middleware");
        AuthError::MissingAppState
    })?;

    let token = bearer_token(req.request()).ok_or(AuthError::MissingCredentials)?;
    state.auth_handler.authenticate(&token)
}

fn enforce_admin_access(path: &str, claims: &Claims) -> Result<(), AuthError> {
    if !path.starts_with("/api/auth/") && !claims.admin {
        return Err(AuthError::Forbidden("Admin access required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_reads_and_submissions_skip_auth() {
        assert!(is_public_route("/", &Method::GET));
        assert!(is_public_route("/api/projects", &Method::GET));
        assert!(is_public_route("/api/projects/4", &Method::GET));
        assert!(is_public_route("/api/legal/privacy_policy", &Method::GET));
        assert!(is_public_route("/api/contact", &Method::POST));
        assert!(is_public_route("/api/auth/login", &Method::POST));
        assert!(is_public_route("/api/contact", &Method::OPTIONS));
    }

    #[test]
    fn mutations_and_inbox_require_auth() {
        assert!(!is_public_route("/api/projects", &Method::POST));
        assert!(!is_public_route("/api/projects/4", &Method::DELETE));
        assert!(!is_public_route("/api/about", &Method::PUT));
        assert!(!is_public_route("/api/contact", &Method::GET));
        assert!(!is_public_route("/api/projectsx", &Method::GET));
        assert!(!is_public_route("/api/admin/health", &Method::GET));
    }

    #[test]
    fn non_admin_may_only_use_auth_routes() {
        let claims = Claims {
            sub: "2".into(),
            username: "viewer".into(),
            admin: false,
            exp: 0,
            iat: 0,
        };
        assert!(enforce_admin_access("/api/auth/me", &claims).is_ok());
        assert!(enforce_admin_access("/api/projects", &claims).is_err());
    }
}
