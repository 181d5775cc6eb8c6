//! # 테이스팅(Tasting) 라우트 핸들러
//!
//! 테이스팅 기록의 CRUD를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET    /api/v1/tastings`          → 내 테이스팅 목록 (최신순)
//! - `POST   /api/v1/tastings`          → 새 테이스팅 저장 (Add 플로우)
//! - `GET    /api/v1/tastings/:id`      → 단일 테이스팅 조회
//! - `GET    /api/v1/tastings/:id/form` → 편집용 폼 상태로 복원해 조회
//! - `PUT    /api/v1/tastings/:id`      → 테이스팅 수정 (Edit 플로우)
//! - `DELETE /api/v1/tastings/:id`      → 테이스팅 삭제
//!
//! 모든 핸들러는 `AuthUser` extractor를 받으므로 세션 없는 요청은
//! 핸들러 실행 전에 401로 거부됩니다. 모든 DB 접근은 owner filter로
//! 스코프되어, 남의 레코드는 존재 여부와 무관하게 404가 됩니다.

use crate::{
    db::TastingStore,
    error::AppError,
    middleware::auth::AuthUser,
    models::Tasting,
    services::{form::TastingForm, submit},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 풀이 복제되지 않습니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀
    pub pool: SqlitePool,
    /// JWT 토큰 서명용 비밀키
    pub jwt_secret: String,
}

/// `GET /tastings` — 내 테이스팅 목록을 생성 시각 내림차순으로 조회합니다.
pub async fn list_tastings(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let tastings = state.pool.list_tastings(&auth_user.user_id).await?;
    Ok(Json(json!({ "tastings": tastings })))
}

/// `GET /tastings/:id` — 단일 테이스팅을 조회합니다.
///
/// owner filter 불일치는 존재하지 않는 id와 똑같이 404입니다.
pub async fn get_tasting(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Tasting>, AppError> {
    let tasting = state
        .pool
        .get_tasting(&id, &auth_user.user_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(tasting))
}

/// `GET /tastings/:id/form` — 저장 레코드를 폼 상태로 복원해 반환합니다.
///
/// Edit 화면이 이 응답으로 폼을 채웁니다 (null → 빈 문자열/빈 집합).
pub async fn get_tasting_form(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<TastingForm>, AppError> {
    let form = submit::load_for_edit(&state.pool, Some(&auth_user), &id).await?;
    Ok(Json(form))
}

/// `POST /tastings` — 폼 상태를 검증하고 새 테이스팅으로 저장합니다.
///
/// 검증 실패는 400으로 즉시 반환되며 스토어 호출이 일어나지 않습니다.
pub async fn create_tasting(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(form): Json<TastingForm>,
) -> Result<(StatusCode, Json<Tasting>), AppError> {
    let tasting = submit::create_tasting(&state.pool, Some(&auth_user), &form).await?;
    Ok((StatusCode::CREATED, Json(tasting)))
}

/// `PUT /tastings/:id` — 테이스팅을 폼 상태로 덮어씁니다.
pub async fn update_tasting(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    Json(form): Json<TastingForm>,
) -> Result<Json<Tasting>, AppError> {
    let tasting = submit::update_tasting(&state.pool, Some(&auth_user), &id, &form).await?;
    Ok(Json(tasting))
}

/// `DELETE /tastings/:id` — 테이스팅을 삭제합니다.
///
/// 성공 시 HTTP 204 No Content를 반환합니다 (본문 없음).
pub async fn delete_tasting(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = state.pool.delete_tasting(&id, &auth_user.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
