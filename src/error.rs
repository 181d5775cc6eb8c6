//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 에러 분류 (모두 해당 사용자 액션의 경계에서 회복됩니다):
//! - `Validation`: 로컬 검증 실패 — 외부 호출 전에 차단 (400)
//! - `Unauthorized`: 활성 세션 없음/무효 (401)
//! - `NotFound`: 레코드 없음 또는 소유자 불일치 (404)
//!   (owner filter 불일치는 "0행 영향"으로 나타나며 NotFound와 동일 취급)
//! - `Conflict`: 중복 가입 등 리소스 충돌 (409)
//! - `Database`: 외부 스토어 실패 — 메시지를 그대로 노출하고,
//!   폼 상태는 클라이언트에 남아 있으므로 사용자가 수동 재시도합니다 (500)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::form::ValidationIssue;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면 Axum이 `IntoResponse`를
/// 호출하여 적절한 HTTP 상태 코드와 JSON 본문으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 — 전용 "not found" 응답 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 제출 전 검증 실패 (HTTP 400)
    /// 필드별 문제를 모두 담아 인라인 표시에 쓸 수 있게 합니다.
    #[error("Validation failed")]
    Validation(Vec<ValidationIssue>),

    /// 인증 실패 (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 리소스 충돌 (HTTP 409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 외부 스토어(DB) 오류 (HTTP 500)
    /// #[from]: sqlx::Error에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    #[error("Store error: {0}")]
    Database(#[from] sqlx::Error),
}

// 폼 검증 실패를 `?` 한 번으로 전파할 수 있게 합니다.
impl From<Vec<ValidationIssue>> for AppError {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        AppError::Validation(issues)
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 응답 본문은 `{ "error": { "code", "message", ... } }` 형태입니다.
    /// 스토어 에러 메시지는 **그대로** 클라이언트에 전달합니다 — 사용자가
    /// 실패 원인을 보고 수동으로 재시도하는 모델이기 때문입니다.
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": { "code": "not_found", "message": self.to_string() } }),
            ),

            AppError::Validation(ref issues) => {
                // 필드별 문제 목록을 함께 내려보냅니다 (인라인 표시용).
                let fields: Vec<_> = issues
                    .iter()
                    .map(|i| json!({ "field": i.field, "message": i.message }))
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": {
                        "code": "validation_failed",
                        "message": "Validation failed",
                        "fields": fields,
                    } }),
                )
            }

            AppError::Unauthorized(ref msg) => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": { "code": "unauthorized", "message": msg } }),
            ),

            AppError::Conflict(ref msg) => (
                StatusCode::CONFLICT,
                json!({ "error": { "code": "conflict", "message": msg } }),
            ),

            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": { "code": "internal_error", "message": "An internal error occurred" } }),
                )
            }

            AppError::Database(ref e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    // 스토어 실패 메시지는 verbatim으로 노출합니다.
                    json!({ "error": { "code": "store_failure", "message": e.to_string() } }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
