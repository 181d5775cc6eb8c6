//! # 레코드 매퍼(Record Mapper)
//!
//! 메모리상의 폼 상태(`TastingForm`)와 저장 레코드 형태(`TastingFields`)
//! 사이의 변환을 담당합니다.
//!
//! - `to_record`: 검증 후 저장 형태로 변환. 조건부 null 규칙 적용
//!   (tannin은 Red 외 null, mousse는 Sparkling 외 null),
//!   빈 문자열 → null, vintage 문자열 → 정수, 빈 아로마 집합 → null.
//! - `from_record`: 역변환. null을 폼 컨트롤에 맞는 센티널 값
//!   (빈 문자열/빈 집합)으로 되돌립니다.
//!
//! 왕복 속성: 유효한 폼 상태 s에 대해 `from_record(to_record(s)) == s`.
//! (빈 문자열/null 정규화와 vintage의 문자열/정수 표현은 동치로 봅니다.)

use crate::models::{TastingFields, WineType};
use crate::services::form::{TastingForm, ValidationIssue};

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 폼 상태를 저장 필드로 변환합니다.
///
/// 변환 전에 `TastingForm::validate`를 수행하므로, 검증을 통과하지
/// 못한 폼은 저장 형태가 되지 못합니다 (외부 호출 차단은 제출
/// 파이프라인이 담당).
///
/// 조건부 null 규칙은 폼에 남아 있던 값과 무관하게 적용됩니다:
/// 타입이 Red가 아니면 tannin은 무조건 null입니다.
pub fn to_record(form: &TastingForm) -> Result<TastingFields, Vec<ValidationIssue>> {
    form.validate()?;

    // validate()가 Ok면 필수 Option들은 모두 Some입니다.
    // 그래도 unwrap 대신 검증 실패로 전파합니다.
    let required = |field: &'static str| {
        vec![ValidationIssue {
            field,
            message: format!("{field} is required"),
        }]
    };

    let wine_type = form.wine_type.ok_or_else(|| required("wine_type"))?;

    let vintage = {
        let trimmed = form.vintage.trim();
        if trimmed.is_empty() {
            None
        } else {
            // 범위 검사는 validate()가 이미 수행했습니다.
            Some(trimmed.parse::<i64>().map_err(|_| required("vintage"))?)
        }
    };

    let aromas = if form.aromas.is_empty() {
        // "기록된 아로마 없음"은 빈 배열이 아니라 null로 저장합니다.
        None
    } else {
        Some(form.aromas.iter().cloned().collect::<Vec<String>>())
    };

    Ok(TastingFields {
        wine_name: form.wine_name.trim().to_string(),
        wine_type,
        vintage,
        producer: none_if_empty(&form.producer),
        region: none_if_empty(&form.region),
        clarity: form.clarity,
        appearance_intensity: form.appearance_intensity,
        color: none_if_empty(&form.color),
        sweetness: form.sweetness.ok_or_else(|| required("sweetness"))?,
        acidity: form.acidity.ok_or_else(|| required("acidity"))?,
        tannin: if wine_type == WineType::Red {
            form.tannin
        } else {
            None
        },
        body: form.body.ok_or_else(|| required("body"))?,
        mousse: if wine_type == WineType::Sparkling {
            form.mousse
        } else {
            None
        },
        finish: form.finish.ok_or_else(|| required("finish"))?,
        aromas,
        quality_level: none_if_empty(&form.quality_level),
        notes: none_if_empty(&form.notes),
    })
}

/// 저장 필드를 폼 상태로 되돌립니다 (Edit 플로우에서 폼 복원).
pub fn from_record(fields: &TastingFields) -> TastingForm {
    TastingForm {
        wine_name: fields.wine_name.clone(),
        wine_type: Some(fields.wine_type),
        vintage: fields.vintage.map(|v| v.to_string()).unwrap_or_default(),
        producer: fields.producer.clone().unwrap_or_default(),
        region: fields.region.clone().unwrap_or_default(),
        clarity: fields.clarity,
        appearance_intensity: fields.appearance_intensity,
        color: fields.color.clone().unwrap_or_default(),
        sweetness: Some(fields.sweetness),
        acidity: Some(fields.acidity),
        tannin: fields.tannin,
        body: Some(fields.body),
        mousse: fields.mousse,
        finish: Some(fields.finish),
        aromas: fields
            .aromas
            .as_ref()
            .map(|a| a.iter().cloned().collect())
            .unwrap_or_default(),
        quality_level: fields.quality_level.clone().unwrap_or_default(),
        notes: fields.notes.clone().unwrap_or_default(),
    }
}
