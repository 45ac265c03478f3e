use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::session::ROLE_HEADER;
use crate::core::{AppError, Session, UserRole};

/// Builds the per-request [`Session`] from the role header.
///
/// A missing header means a signed-in traveler. An unreadable or unknown role
/// is rejected before any handler runs.
pub struct SessionContext;

impl<S, B> Transform<S, ServiceRequest> for SessionContext
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionContextMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionContextMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionContextMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionContextMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();

        Box::pin(async move {
            let role = match req.headers().get(ROLE_HEADER) {
                None => UserRole::default(),
                Some(value) => value
                    .to_str()
                    .map_err(|_| AppError::validation(format!("Invalid {} header", ROLE_HEADER)))
                    .and_then(|v| v.parse::<UserRole>())
                    .map_err(Error::from)?,
            };

            tracing::debug!(role = %role, path = req.path(), "Session established");

            req.extensions_mut().insert(Session::new(role));

            svc.call(req).await
        })
    }
}
