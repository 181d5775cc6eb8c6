//! # 폼 상태 머신(Form State Machine)
//!
//! 편집 세션 하나가 소유하는 테이스팅 폼의 현재 상태입니다.
//! 전역 싱글턴이 아니라 세션(요청)마다 독립 인스턴스를 만듭니다.
//!
//! 상태는 두 가지뿐입니다:
//! - `Empty`: 와인 타입 미선택 (`wine_type == None`) — 식별 필드만 의미 있음
//! - `Active`: 타입 선택됨 — 전체 폼 활성
//!
//! 타입이 **바뀔 때마다** (Empty→Active, Active(a)→Active(b) 모두)
//! 종속 필드(color, tannin, mousse)는 초기화됩니다. 아로마 선택은
//! 의도적으로 유지됩니다 — 타입을 오가며 비교하는 사용자의 입력을
//! 지우지 않기 위한, 문서화된 비일관성입니다 (새 타입에서 더 이상
//! 유효하지 않은 디스크립터가 남을 수 있음).

use crate::models::{
    Acidity, AppearanceIntensity, AromaGroup, Body, Clarity, Finish, Mousse, Sweetness, Tannin,
    WineType,
};
use crate::services::schema::{resolve_schema, ResolvedSchema};
use crate::services::taxonomy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 빈티지 허용 범위 (경계 포함)
pub const VINTAGE_MIN: i64 = 1900;
pub const VINTAGE_MAX: i64 = 2099;

/// 제출 전 검증에서 발견된 문제 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// 문제가 있는 필드 이름 (저장 계약상의 snake_case 이름)
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// 테이스팅 폼의 현재 필드 값들
///
/// 폼 컨트롤의 표현을 그대로 따릅니다:
/// - 자유 텍스트/숫자 입력은 `String` (빈 문자열 = 미입력)
/// - 라디오/셀렉트는 `Option<Enum>` (None = 미선택)
/// - 아로마는 토큰 문자열의 집합 (카테고리 토큰과 디스크립터 토큰이
///   같은 집합에 독립적으로 들어갑니다)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TastingForm {
    pub wine_name: String,
    pub wine_type: Option<WineType>,
    /// 연도 입력 문자열 — 제출 시 정수로 강제 변환됩니다
    #[serde(default)]
    pub vintage: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub clarity: Option<Clarity>,
    #[serde(default)]
    pub appearance_intensity: Option<AppearanceIntensity>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub sweetness: Option<Sweetness>,
    #[serde(default)]
    pub acidity: Option<Acidity>,
    #[serde(default)]
    pub tannin: Option<Tannin>,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub mousse: Option<Mousse>,
    #[serde(default)]
    pub finish: Option<Finish>,
    #[serde(default)]
    pub aromas: BTreeSet<String>,
    #[serde(default)]
    pub quality_level: String,
    #[serde(default)]
    pub notes: String,
}

impl TastingForm {
    /// 현재 타입 기준의 조건부 스키마
    pub fn schema(&self) -> ResolvedSchema {
        resolve_schema(self.wine_type)
    }

    /// 와인 타입 선택/변경
    ///
    /// 값이 실제로 바뀔 때만 종속 필드를 초기화합니다.
    /// 같은 타입을 다시 선택하는 것은 변경이 아닙니다.
    /// 초기화된 값은 복원되지 않습니다 — Red→White→Red 이후에도
    /// tannin은 비어 있습니다.
    pub fn set_wine_type(&mut self, wine_type: Option<WineType>) {
        if self.wine_type == wine_type {
            return;
        }
        self.wine_type = wine_type;
        self.color.clear();
        self.tannin = None;
        self.mousse = None;
        // 아로마는 의도적으로 유지 (모듈 문서 참고)
    }

    /// 아로마 토큰 토글 — 카테고리/디스크립터 토큰 모두 독립적입니다.
    ///
    /// 디스크립터를 전부 선택해도 카테고리 토큰이 따라 선택되지 않고,
    /// 그 반대도 마찬가지입니다. 둘 다 레코드의 독립적인 태그입니다.
    pub fn toggle_aroma(&mut self, token: &str) {
        if !self.aromas.remove(token) {
            self.aromas.insert(token.to_string());
        }
    }

    /// 카테고리 활성 여부 — 자기 토큰이 선택됐거나,
    /// 소속 디스크립터가 하나라도 선택됐으면 활성입니다.
    pub fn category_is_active(&self, group: AromaGroup, category: &str) -> bool {
        if self.aromas.contains(category) {
            return true;
        }
        self.selected_descriptor_count(group, category) > 0
    }

    /// 카테고리 아래에서 선택된 디스크립터 수 (활성 카테고리 옆 카운트 표시용)
    pub fn selected_descriptor_count(&self, group: AromaGroup, category: &str) -> usize {
        taxonomy::find_category(group, category)
            .map(|c| {
                c.descriptors
                    .iter()
                    .filter(|d| self.aromas.contains(**d))
                    .count()
            })
            .unwrap_or(0)
    }

    /// 제출 전 검증 — 실패하면 외부 호출 없이 제출이 막힙니다.
    ///
    /// 규칙:
    /// - wine_name 비어 있으면 안 됨, wine_type 선택 필수
    /// - sweetness/acidity/body/finish 각각 선택 필수
    /// - tannin/mousse는 **표시되는 경우에만** 필수
    ///   (표시되는 필드는 다른 필수 속성과 동일한 강제 단일 선택 컨트롤)
    /// - vintage는 비어 있거나 [1900, 2099] 범위의 정수
    /// - color/quality_level은 비어 있거나 해당 옵션 집합의 원소
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        if self.wine_name.trim().is_empty() {
            issues.push(ValidationIssue::new("wine_name", "Wine name is required"));
        }

        let Some(wine_type) = self.wine_type else {
            issues.push(ValidationIssue::new("wine_type", "Wine type is required"));
            return Err(issues);
        };

        if self.sweetness.is_none() {
            issues.push(ValidationIssue::new("sweetness", "Sweetness is required"));
        }
        if self.acidity.is_none() {
            issues.push(ValidationIssue::new("acidity", "Acidity is required"));
        }
        if self.body.is_none() {
            issues.push(ValidationIssue::new("body", "Body is required"));
        }
        if self.finish.is_none() {
            issues.push(ValidationIssue::new("finish", "Finish is required"));
        }

        let schema = resolve_schema(Some(wine_type));
        if schema.show_tannin && self.tannin.is_none() {
            issues.push(ValidationIssue::new(
                "tannin",
                "Tannin is required for red wines",
            ));
        }
        if schema.show_mousse && self.mousse.is_none() {
            issues.push(ValidationIssue::new(
                "mousse",
                "Mousse is required for sparkling wines",
            ));
        }

        let vintage = self.vintage.trim();
        if !vintage.is_empty() {
            match vintage.parse::<i64>() {
                Ok(year) if (VINTAGE_MIN..=VINTAGE_MAX).contains(&year) => {}
                Ok(_) => issues.push(ValidationIssue::new(
                    "vintage",
                    format!("Vintage must be between {} and {}", VINTAGE_MIN, VINTAGE_MAX),
                )),
                Err(_) => issues.push(ValidationIssue::new(
                    "vintage",
                    "Vintage must be a whole year",
                )),
            }
        }

        if !self.color.is_empty() && !schema.color_options.contains(&self.color.as_str()) {
            issues.push(ValidationIssue::new(
                "color",
                format!("{:?} is not a color option for {}", self.color, wine_type),
            ));
        }

        if !self.quality_level.is_empty()
            && !taxonomy::QUALITY_LEVELS.contains(&self.quality_level.as_str())
        {
            issues.push(ValidationIssue::new(
                "quality_level",
                "Unknown quality level",
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 제출 가능한 최소한의 Red 폼
    fn valid_red_form() -> TastingForm {
        let mut form = TastingForm::default();
        form.wine_name = "Margaux 2015".to_string();
        form.set_wine_type(Some(WineType::Red));
        form.sweetness = Some(Sweetness::Dry);
        form.acidity = Some(Acidity::Medium);
        form.tannin = Some(Tannin::High);
        form.body = Some(Body::Full);
        form.finish = Some(Finish::Long);
        form
    }

    fn field_names(issues: &[ValidationIssue]) -> Vec<&'static str> {
        issues.iter().map(|i| i.field).collect()
    }

    #[test]
    fn type_change_clears_dependent_fields() {
        let mut form = valid_red_form();
        form.color = "Ruby".to_string();

        form.set_wine_type(Some(WineType::White));
        assert_eq!(form.tannin, None);
        assert_eq!(form.color, "");
        assert_eq!(form.mousse, None);

        // 다시 Red를 선택해도 이전 값은 복원되지 않습니다.
        form.set_wine_type(Some(WineType::Red));
        assert_eq!(form.tannin, None);
        assert_eq!(form.color, "");
    }

    #[test]
    fn reselecting_same_type_keeps_fields() {
        let mut form = valid_red_form();
        form.color = "Garnet".to_string();
        form.set_wine_type(Some(WineType::Red));
        assert_eq!(form.color, "Garnet");
        assert_eq!(form.tannin, Some(Tannin::High));
    }

    #[test]
    fn aromas_survive_type_changes() {
        let mut form = valid_red_form();
        form.toggle_aroma("Raspberry");
        form.set_wine_type(Some(WineType::White));
        // 새 타입에서 유효하지 않은 디스크립터도 남습니다 (문서화된 동작).
        assert!(form.aromas.contains("Raspberry"));
    }

    #[test]
    fn aroma_tokens_are_independent() {
        let mut form = TastingForm::default();
        form.toggle_aroma("Peach");
        assert!(form.aromas.contains("Peach"));
        assert!(!form.aromas.contains("Stone Fruit"));

        form.toggle_aroma("Stone Fruit");
        assert!(form.aromas.contains("Stone Fruit"));

        // 카테고리 토큰 해제는 디스크립터 토큰에 영향이 없습니다.
        form.toggle_aroma("Stone Fruit");
        assert!(!form.aromas.contains("Stone Fruit"));
        assert!(form.aromas.contains("Peach"));
    }

    #[test]
    fn category_active_via_own_token_or_descriptor() {
        let mut form = TastingForm::default();
        assert!(!form.category_is_active(AromaGroup::Primary, "Stone Fruit"));

        form.toggle_aroma("Peach");
        assert!(form.category_is_active(AromaGroup::Primary, "Stone Fruit"));
        assert_eq!(form.selected_descriptor_count(AromaGroup::Primary, "Stone Fruit"), 1);

        form.toggle_aroma("Peach");
        form.toggle_aroma("Stone Fruit");
        assert!(form.category_is_active(AromaGroup::Primary, "Stone Fruit"));
        assert_eq!(form.selected_descriptor_count(AromaGroup::Primary, "Stone Fruit"), 0);
    }

    #[test]
    fn empty_wine_name_fails_validation() {
        let mut form = valid_red_form();
        form.wine_name = "  ".to_string();
        let issues = form.validate().unwrap_err();
        assert!(field_names(&issues).contains(&"wine_name"));
    }

    #[test]
    fn missing_wine_type_fails_validation() {
        let form = TastingForm::default();
        let issues = form.validate().unwrap_err();
        assert!(field_names(&issues).contains(&"wine_type"));
    }

    #[test]
    fn tannin_required_only_when_shown() {
        let mut form = valid_red_form();
        form.tannin = None;
        let issues = form.validate().unwrap_err();
        assert!(field_names(&issues).contains(&"tannin"));

        // White에서는 tannin이 보이지 않으므로 요구되지 않습니다.
        form.set_wine_type(Some(WineType::White));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn mousse_required_for_sparkling() {
        let mut form = valid_red_form();
        form.set_wine_type(Some(WineType::Sparkling));
        let issues = form.validate().unwrap_err();
        assert!(field_names(&issues).contains(&"mousse"));

        form.mousse = Some(Mousse::Creamy);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn vintage_bounds() {
        let mut form = valid_red_form();

        form.vintage = "1899".to_string();
        assert!(field_names(&form.validate().unwrap_err()).contains(&"vintage"));

        form.vintage = "1900".to_string();
        assert!(form.validate().is_ok());

        form.vintage = "2099".to_string();
        assert!(form.validate().is_ok());

        form.vintage = "2100".to_string();
        assert!(field_names(&form.validate().unwrap_err()).contains(&"vintage"));

        form.vintage = "abc".to_string();
        assert!(field_names(&form.validate().unwrap_err()).contains(&"vintage"));

        form.vintage = String::new();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn color_must_belong_to_type_option_set() {
        let mut form = valid_red_form();
        form.color = "Ruby".to_string();
        assert!(form.validate().is_ok());

        form.color = "Lemon".to_string(); // White의 색상
        assert!(field_names(&form.validate().unwrap_err()).contains(&"color"));
    }

    #[test]
    fn quality_level_must_be_known() {
        let mut form = valid_red_form();
        form.quality_level = "Very Good".to_string();
        assert!(form.validate().is_ok());

        form.quality_level = "Amazing".to_string();
        assert!(field_names(&form.validate().unwrap_err()).contains(&"quality_level"));
    }
}
