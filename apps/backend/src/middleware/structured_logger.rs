//! One `request_completed` event per request.
//!
//! Jokenpo paths embed player ids, so the event carries the matched route
//! pattern (`/jokenpo/history/{player_id}`) and the id as a separate field
//! instead of the raw path. Requests that hit no route are logged as
//! `unmatched`.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::Level;

use super::request_trace::TraceId;

const UNMATCHED: &str = "unmatched";

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// Summary of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Completion {
    method: String,
    route: String,
    player_id: Option<String>,
    status: StatusCode,
}

impl Completion {
    fn from_request(req: &HttpRequest, status: StatusCode) -> Self {
        Self {
            method: req.method().to_string(),
            route: req
                .match_pattern()
                .unwrap_or_else(|| UNMATCHED.to_string()),
            player_id: req.match_info().get("player_id").map(str::to_owned),
            status,
        }
    }

    fn level(&self) -> Level {
        if self.status.is_server_error() {
            Level::ERROR
        } else if self.status.is_client_error() {
            Level::WARN
        } else {
            Level::INFO
        }
    }

    fn emit(&self, trace_id: &str, duration_us: u64) {
        let method = &self.method;
        let route = &self.route;
        let player_id = self.player_id.as_deref().unwrap_or("-");
        let status = self.status.as_u16();
        macro_rules! completed {
            ($lvl:ident) => {
                tracing::$lvl!(
                    http.method = %method,
                    http.route = %route,
                    http.status_code = status,
                    player_id = %player_id,
                    duration_us,
                    trace_id = %trace_id,
                    "request_completed"
                )
            };
        }
        let level = self.level();
        if level == Level::ERROR {
            completed!(error);
        } else if level == Level::WARN {
            completed!(warn);
        } else {
            completed!(info);
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let completion = match &result {
                Ok(res) => Completion::from_request(res.request(), res.status()),
                Err(err) => Completion {
                    method,
                    route: UNMATCHED.to_string(),
                    player_id: None,
                    status: err.as_response_error().status_code(),
                },
            };
            let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
            completion.emit(&trace_id, duration_us);

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    fn completion(status: StatusCode) -> Completion {
        Completion {
            method: "GET".into(),
            route: "/jokenpo/scoreboard".into(),
            player_id: None,
            status,
        }
    }

    #[::core::prelude::v1::test]
    fn level_follows_status_class() {
        assert_eq!(completion(StatusCode::OK).level(), Level::INFO);
        assert_eq!(completion(StatusCode::NOT_FOUND).level(), Level::WARN);
        assert_eq!(
            completion(StatusCode::INTERNAL_SERVER_ERROR).level(),
            Level::ERROR
        );
    }

    #[actix_web::test]
    async fn path_param_is_kept_apart_from_the_route() {
        let req = test::TestRequest::get()
            .uri("/jokenpo/history/7")
            .param("player_id", "7")
            .to_http_request();
        let c = Completion::from_request(&req, StatusCode::OK);
        assert_eq!(c.player_id.as_deref(), Some("7"));
        assert_eq!(c.method, "GET");
    }

    #[actix_web::test]
    async fn matched_requests_report_the_route_pattern() {
        let app = test::init_service(
            App::new().wrap(StructuredLogger).route(
                "/jokenpo/history/{player_id}",
                web::get().to(|req: HttpRequest| async move {
                    let c = Completion::from_request(&req, StatusCode::OK);
                    HttpResponse::Ok().body(c.route)
                }),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/jokenpo/history/42")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "/jokenpo/history/{player_id}");
    }
}
