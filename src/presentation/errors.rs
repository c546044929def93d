// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;
use validator::ValidationErrors;

/// 统一的错误响应体 `{ "error": message }`
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// 请求体无法解析
pub fn invalid_payload(rejection: JsonRejection) -> Response {
    debug!("Rejected request body: {}", rejection.body_text());
    error_response(StatusCode::BAD_REQUEST, "Invalid payload")
}

/// 请求体校验失败
pub fn validation_failed(errors: ValidationErrors) -> Response {
    error_response(StatusCode::BAD_REQUEST, format!("Invalid payload: {}", errors))
}
