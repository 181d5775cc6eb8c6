//! # 폼 스키마 라우트 핸들러
//!
//! 프론트엔드가 조건부 폼을 그리는 데 필요한 스키마를 제공합니다.
//!
//! ## 엔드포인트
//! - `GET /api/v1/schema`                  → 빈 스키마 (타입 미선택 상태)
//! - `GET /api/v1/schema?wine_type=Red`    → Red 기준 활성 필드/옵션
//!
//! 타입 미선택 시의 빈 스키마는 "식별 필드 외의 폼을 아직 보여주지
//! 말라"는 신호입니다. `wine_type` 파라미터 철자는 저장 계약과 동일합니다
//! (`Rosé`는 URL 인코딩되어 들어옵니다).

use crate::models::WineType;
use crate::services::{schema::resolve_schema, taxonomy};
use axum::{extract::Query, Json};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct SchemaQuery {
    pub wine_type: Option<WineType>,
}

/// `GET /schema` — 와인 타입에 따른 조건부 폼 스키마를 반환합니다.
///
/// 품질 단계 목록은 타입과 무관하므로 스키마 옆에 함께 내려보냅니다.
pub async fn get_schema(Query(query): Query<SchemaQuery>) -> Json<Value> {
    let schema = resolve_schema(query.wine_type);
    Json(json!({
        "schema": schema,
        "quality_levels": taxonomy::QUALITY_LEVELS,
    }))
}
