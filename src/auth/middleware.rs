use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::Header,
    web, Error, HttpMessage, ResponseError,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::{app_state::AppState, errors::AppError};

/// Requires `Authorization: Bearer <AI_API_TOKEN>` when a token is
/// configured. Without a configured token requests pass through untouched.
pub struct ApiTokenMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ApiTokenMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ApiTokenMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiTokenMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct ApiTokenMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ApiTokenMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let expected = req
                .app_data::<web::Data<AppState>>()
                .and_then(|state| state.config.api_token.clone());

            if let Some(expected) = expected {
                if let Err(err) = verify_bearer(&req, &expected) {
                    log::warn!("Rejected {} {}: {}", req.method(), req.path(), err);
                    let response = err.error_response().map_into_right_body();
                    return Ok(req.into_response(response));
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn verify_bearer<M: HttpMessage>(req: &M, expected: &SecretString) -> Result<(), AppError> {
    let auth = Authorization::<Bearer>::parse(req)
        .map_err(|_| AppError::Unauthorized("Missing or invalid bearer token".to_string()))?;

    let token = auth.as_ref().token().as_bytes();
    if bool::from(token.ct_eq(expected.expose_secret().as_bytes())) {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Invalid API token".to_string()))
    }
}
