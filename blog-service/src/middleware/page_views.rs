/// Per-client page-view counting.
///
/// Each response carries a signed counter cookie, incremented once per
/// request. The count is observational (it feeds a debug log line) and
/// never drives business logic; a missing or tampered cookie restarts the
/// count at one.
use actix_web::cookie::Cookie;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::session::{sign_counter, verify_counter, PAGE_VIEWS_COOKIE};

/// Middleware factory for page-view counting
pub struct PageViewCounter {
    secret: Rc<String>,
}

impl PageViewCounter {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Rc::new(secret.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for PageViewCounter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = PageViewCounterService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PageViewCounterService {
            service,
            secret: self.secret.clone(),
        }))
    }
}

/// Middleware service that wraps each request
pub struct PageViewCounterService<S> {
    service: S,
    secret: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for PageViewCounterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let secret = self.secret.clone();

        let previous = req
            .cookie(PAGE_VIEWS_COOKIE)
            .and_then(|c| verify_counter(&secret, c.value()))
            .unwrap_or(0);
        let count = previous + 1;

        let path = req.path().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            tracing::debug!(count, path = %path, "Page view");

            let cookie = Cookie::build(PAGE_VIEWS_COOKIE, sign_counter(&secret, count))
                .path("/")
                .finish();
            if let Err(err) = res.response_mut().add_cookie(&cookie) {
                tracing::warn!(error = %err, "Failed to set page-view cookie");
            }

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn test_handler() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
    }

    fn counter_from(resp: &ServiceResponse<impl actix_web::body::MessageBody>) -> Option<u64> {
        let header = resp.headers().get(actix_web::http::header::SET_COOKIE)?;
        let cookie = Cookie::parse(header.to_str().ok()?.to_string()).ok()?;
        verify_counter("test-secret", cookie.value())
    }

    #[actix_web::test]
    async fn test_counter_starts_at_one() {
        let app = test::init_service(
            App::new()
                .wrap(PageViewCounter::new("test-secret"))
                .route("/test", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(counter_from(&resp), Some(1));
    }

    #[actix_web::test]
    async fn test_counter_increments_across_requests() {
        let app = test::init_service(
            App::new()
                .wrap(PageViewCounter::new("test-secret"))
                .route("/test", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;
        let first = counter_from(&resp).expect("cookie should be set");

        let replay = Cookie::new(PAGE_VIEWS_COOKIE, sign_counter("test-secret", first));
        let req = test::TestRequest::get().uri("/test").cookie(replay).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(counter_from(&resp), Some(first + 1));
    }

    #[actix_web::test]
    async fn test_tampered_cookie_restarts_count() {
        let app = test::init_service(
            App::new()
                .wrap(PageViewCounter::new("test-secret"))
                .route("/test", web::get().to(test_handler)),
        )
        .await;

        let forged = Cookie::new(PAGE_VIEWS_COOKIE, "99.deadbeef");
        let req = test::TestRequest::get().uri("/test").cookie(forged).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(counter_from(&resp), Some(1));
    }
}
