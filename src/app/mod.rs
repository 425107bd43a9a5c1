//! 路由组装

pub mod users;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::{
    middleware::{panic_response, request_logging_middleware, require_json_content_type},
    ApiError,
};
use crate::infrastructure::config::HttpConfig;
use users::{handler, AppState};

/// 创建完整的应用路由
pub fn router(state: AppState, http: &HttpConfig) -> Router {
    with_layers(routes(), http).with_state(state)
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_info).fallback(route_not_found))
        .route(
            "/users",
            get(handler::list_users)
                .post(handler::create_user)
                .fallback(route_not_found),
        )
        .route(
            "/users/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
}

/// 套上全部中间件层 (后添加的在外层)
pub fn with_layers<S>(routes: Router<S>, http: &HttpConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .layer(middleware::from_fn(require_json_content_type))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(
            http.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        // 预检请求之外的响应同样带上允许的方法和请求头
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// API 信息
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "User Management API is running!",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /users": "List all users (with filters and pagination)",
            "GET /users/:id": "Get user by ID",
            "POST /users": "Create new user",
            "PUT /users/:id": "Update user",
            "DELETE /users/:id": "Delete user"
        }
    }))
}

async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}
