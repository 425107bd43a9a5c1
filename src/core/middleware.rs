//! 核心中间件模块

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info};
use uuid::Uuid;

use super::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件
///
/// 为每个请求分配 request id，写入响应头并记录方法、路径、状态码和耗时。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = Uuid::new_v4().to_string();

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    info!(
        request_id = %request_id,
        "{} {} - {} - {}ms",
        method,
        path,
        status.as_u16(),
        duration.as_millis()
    );

    response
}

/// POST/PUT 请求必须声明 JSON 请求体
pub async fn require_json_content_type(req: Request, next: Next) -> Response {
    if matches!(*req.method(), Method::POST | Method::PUT) {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        if !is_json {
            return ApiError::BadRequest("Content-Type must be application/json".to_string())
                .into_response();
        }
    }

    next.run(req).await
}

/// 处理器 panic 时返回的 500 响应
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    error!("请求处理时发生 panic: {}", message);
    ApiError::Internal(message).into_response()
}
