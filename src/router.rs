use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use utoipa_redoc::{Redoc, Servable as _};
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use apikit_config::CorsConfig;
use apikit_core::ErrorResponse;

use crate::docs::{OPENAPI_PATH, REDOC_PATH, SCALAR_PATH, SWAGGER_PATH, openapi};
use crate::logging::logging_middleware;
use crate::middleware::auth::require_token;
use crate::middleware::panic::handle_panic;
use crate::middleware::timing::process_time_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::system::router::init_system_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let doc = openapi(&state.settings);

    let router = Router::new()
        .merge(SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_PATH, doc.clone()))
        .merge(Redoc::with_url(REDOC_PATH, doc.clone()))
        .merge(Scalar::with_url(SCALAR_PATH, doc))
        .nest(
            "/api",
            Router::new().merge(init_system_router()).nest(
                "/auth",
                init_auth_router()
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_token)),
            ),
        )
        .fallback(not_found)
        .with_state(state.clone());

    with_middleware(router, &state.settings.cors)
}

/// Wraps `router` in the application-wide layers.
///
/// Inner to outer: panic boundary, CORS, request logging, `x-process-time`.
pub fn with_middleware(router: Router, cors: &CorsConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(cors))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(process_time_middleware))
}

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let credentials = config.allow_credentials;

    let origins = if config.any_origin() {
        if credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::from(Any)
        }
    } else {
        AllowOrigin::list(parse_each(&config.allow_origins, "origin", |origin| {
            origin.parse::<HeaderValue>().ok()
        }))
    };

    let methods = if config.any_method() {
        if credentials {
            AllowMethods::mirror_request()
        } else {
            AllowMethods::from(Any)
        }
    } else {
        AllowMethods::list(parse_each(&config.allow_methods, "method", |method| {
            method.to_ascii_uppercase().parse::<Method>().ok()
        }))
    };

    let headers = if config.any_header() {
        if credentials {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::from(Any)
        }
    } else {
        AllowHeaders::list(parse_each(&config.allow_headers, "header", |header| {
            header.parse::<HeaderName>().ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(credentials)
}

fn parse_each<T>(values: &[String], kind: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| {
            let parsed = parse(value);
            if parsed.is_none() {
                tracing::warn!(%value, kind, "skipping unparseable CORS entry");
            }
            parsed
        })
        .collect()
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Not Found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(origins: &[&str], credentials: bool) -> CorsConfig {
        CorsConfig {
            allow_origins: origins.iter().map(|o| o.to_string()).collect(),
            allow_methods: vec!["get".to_string(), "not a method".to_string()],
            allow_headers: vec!["authorization".to_string()],
            allow_credentials: credentials,
        }
    }

    #[test]
    fn test_parse_each_skips_invalid_entries() {
        let values = vec!["GET".to_string(), "bad method".to_string()];
        let parsed = parse_each(&values, "method", |m| m.parse::<Method>().ok());
        assert_eq!(parsed, vec![Method::GET]);
    }

    #[test]
    fn test_cors_layer_builds_for_every_combination() {
        let router = Router::<()>::new();
        for credentials in [true, false] {
            let _ = router
                .clone()
                .layer(cors_layer(&CorsConfig {
                    allow_credentials: credentials,
                    ..CorsConfig::default()
                }));
            let _ = router
                .clone()
                .layer(cors_layer(&config(&["https://app.example.com"], credentials)));
        }
    }
}
