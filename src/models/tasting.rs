//! # 테이스팅(Tasting) 모델 정의
//!
//! 와인 테이스팅 기록 한 건을 표현하는 데이터 구조체와,
//! 각 속성의 닫힌 enum 타입들을 정의합니다.
//!
//! ## 저장 철자 계약
//! 저장되는 문자열 철자("Red", "Rosé", "Very Good" 등)는 기존 데이터와의
//! 호환을 위한 계약입니다. `#[serde(rename)]`/`#[sqlx(rename)]`으로
//! Rust 식별자와 무관하게 철자를 고정합니다 (Rosé의 é 포함).
//!
//! ## 조건부 필드 불변식
//! - `tannin`은 `wine_type`이 Red일 때만 Some
//! - `mousse`는 `wine_type`이 Sparkling일 때만 Some
//!
//! 이 불변식은 Record Mapper(`services::mapper`)가 강제합니다.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use std::fmt;

/// 와인 타입 — 폼의 조건부 필드/옵션을 결정하는 최상위 분류
///
/// 모든 속성 enum 중 유일하게 다른 필드의 스키마에 영향을 줍니다.
/// (Red → tannin 표시, Sparkling → mousse 표시, 타입별 색상/아로마 제한)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum WineType {
    Red,
    White,
    /// 저장 철자는 악센트가 있는 "Rosé"입니다. Rust 식별자에는
    /// 비ASCII를 쓰지 않으므로 rename으로 고정합니다.
    #[serde(rename = "Rosé")]
    #[sqlx(rename = "Rosé")]
    Rose,
    Sparkling,
    Fortified,
}

impl WineType {
    /// 전체 타입 목록 (스키마 검증 테스트와 전수 순회용)
    pub const ALL: [WineType; 5] = [
        WineType::Red,
        WineType::White,
        WineType::Rose,
        WineType::Sparkling,
        WineType::Fortified,
    ];

    /// 저장 계약상의 철자를 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            WineType::Red => "Red",
            WineType::White => "White",
            WineType::Rose => "Rosé",
            WineType::Sparkling => "Sparkling",
            WineType::Fortified => "Fortified",
        }
    }
}

impl fmt::Display for WineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 당도 (필수 선택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Sweetness {
    Dry,
    Medium,
    Sweet,
}

/// 산도 (필수 선택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Acidity {
    Low,
    Medium,
    High,
}

/// 타닌 — Red 전용 조건부 속성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Tannin {
    Low,
    Medium,
    High,
}

/// 바디 (필수 선택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Body {
    Light,
    Medium,
    Full,
}

/// 무스(기포 질감) — Sparkling 전용 조건부 속성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Mousse {
    Delicate,
    Creamy,
    Aggressive,
}

/// 피니시 길이 (필수 선택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Finish {
    Short,
    Medium,
    Long,
}

/// 외관 — 투명도 (선택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Clarity {
    Clear,
    Hazy,
}

/// 외관 — 색 강도 (선택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum AppearanceIntensity {
    Pale,
    Medium,
    Deep,
}

/// 아로마 그룹 — Primary(품종 유래) / Secondary(양조 유래) / Tertiary(숙성 유래)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AromaGroup {
    Primary,
    Secondary,
    Tertiary,
}

impl AromaGroup {
    pub const ALL: [AromaGroup; 3] = [
        AromaGroup::Primary,
        AromaGroup::Secondary,
        AromaGroup::Tertiary,
    ];
}

/// 테이스팅 엔티티 — DB의 `tastings` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tasting {
    /// 레코드 고유 식별자 (UUIDv7)
    pub id: String,
    /// 소유 사용자 ID — 모든 조회/수정은 이 값으로 스코프됩니다
    pub user_id: String,
    /// 생성 시각 (ISO 8601 문자열, DB에서 자동 생성)
    pub created_at: String,

    pub wine_name: String,
    pub wine_type: WineType,
    pub vintage: Option<i64>,
    pub producer: Option<String>,
    pub region: Option<String>,
    pub clarity: Option<Clarity>,
    pub appearance_intensity: Option<AppearanceIntensity>,
    /// 타입별 색상 옵션 집합에 속하는 자유 문자열
    /// (입력 시점의 집합 기준 — 소급 재검증은 하지 않음)
    pub color: Option<String>,
    pub sweetness: Sweetness,
    pub acidity: Acidity,
    pub tannin: Option<Tannin>,
    pub body: Body,
    pub mousse: Option<Mousse>,
    pub finish: Finish,
    /// 선택된 아로마 토큰들 — JSON 배열로 저장, None = 기록 없음
    /// (빈 배열과 "기록 없음"을 저장 계층에서 구분합니다)
    pub aromas: Option<Json<Vec<String>>>,
    pub quality_level: Option<String>,
    pub notes: Option<String>,
}

impl Tasting {
    /// 식별자를 제외한 저장 필드만 추출합니다 (편집 폼 복원용).
    pub fn fields(&self) -> TastingFields {
        TastingFields {
            wine_name: self.wine_name.clone(),
            wine_type: self.wine_type,
            vintage: self.vintage,
            producer: self.producer.clone(),
            region: self.region.clone(),
            clarity: self.clarity,
            appearance_intensity: self.appearance_intensity,
            color: self.color.clone(),
            sweetness: self.sweetness,
            acidity: self.acidity,
            tannin: self.tannin,
            body: self.body,
            mousse: self.mousse,
            finish: self.finish,
            aromas: self.aromas.as_ref().map(|a| a.0.clone()),
            quality_level: self.quality_level.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// 저장 필드 묶음 — insert/update 시 Record Store에 전달되는 형태입니다.
///
/// `Tasting`에서 identity(id, user_id, created_at)를 뺀 나머지이며,
/// Record Mapper의 출력 타입입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TastingFields {
    pub wine_name: String,
    pub wine_type: WineType,
    pub vintage: Option<i64>,
    pub producer: Option<String>,
    pub region: Option<String>,
    pub clarity: Option<Clarity>,
    pub appearance_intensity: Option<AppearanceIntensity>,
    pub color: Option<String>,
    pub sweetness: Sweetness,
    pub acidity: Acidity,
    pub tannin: Option<Tannin>,
    pub body: Body,
    pub mousse: Option<Mousse>,
    pub finish: Finish,
    pub aromas: Option<Vec<String>>,
    pub quality_level: Option<String>,
    pub notes: Option<String>,
}
