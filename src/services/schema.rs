//! # 스키마 리졸버(Schema Resolver)
//!
//! 선택된 와인 타입으로부터 "지금 폼에 보여야 할 것"을 계산합니다:
//! 색상 옵션, 그룹별 아로마 카테고리, tannin/mousse 표시 여부.
//!
//! 타입이 아직 선택되지 않았으면(None) **빈 스키마**를 반환합니다.
//! 빈 스키마는 소비 측(프론트엔드)에 "식별 필드 외의 전체 폼을
//! 아직 보여주지 말라"는 신호입니다.

use crate::models::{AromaGroup, WineType};
use crate::services::taxonomy;
use serde::Serialize;

/// 표시 가능한 카테고리 하나 (이름 + 세부 디스크립터)
#[derive(Debug, Clone, Serialize)]
pub struct CategorySchema {
    pub name: &'static str,
    pub descriptors: &'static [&'static str],
}

/// 그룹 하나의 표시 스키마 — 카테고리가 비면 그룹 자체가 생략됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct AromaGroupSchema {
    pub group: AromaGroup,
    pub categories: Vec<CategorySchema>,
}

/// 리졸버의 출력 — 폼이 소비하는 조건부 스키마
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSchema {
    /// 타입별 색상 옵션. 타입 미선택 시 빈 목록.
    pub color_options: Vec<&'static str>,
    /// 표시할 아로마 그룹들 (빈 그룹은 제외)
    pub aroma_groups: Vec<AromaGroupSchema>,
    /// wine_type == Red 일 때만 true
    pub show_tannin: bool,
    /// wine_type == Sparkling 일 때만 true
    pub show_mousse: bool,
}

impl ResolvedSchema {
    /// 타입 미선택 상태의 빈 스키마
    fn empty() -> Self {
        Self {
            color_options: Vec::new(),
            aroma_groups: Vec::new(),
            show_tannin: false,
            show_mousse: false,
        }
    }
}

/// 와인 타입에 따른 활성 필드/옵션 집합을 계산합니다.
///
/// - 그룹별 카테고리는 분류 테이블의 타입별 제한이 있으면 그것을,
///   없으면 그룹 전체를 사용합니다.
/// - 제한을 적용한 결과가 빈 그룹은 스키마에서 아예 생략합니다.
pub fn resolve_schema(wine_type: Option<WineType>) -> ResolvedSchema {
    let Some(wine_type) = wine_type else {
        return ResolvedSchema::empty();
    };

    let mut aroma_groups = Vec::new();
    for group in AromaGroup::ALL {
        let categories: Vec<CategorySchema> =
            match taxonomy::category_restrictions(wine_type, group) {
                Some(names) => names
                    .iter()
                    // 제한 테이블의 이름을 그룹 테이블에서 찾아 디스크립터를 붙입니다.
                    // 이름 불일치는 taxonomy 테스트가 잡으므로 여기선 조용히 건너뜁니다.
                    .filter_map(|name| taxonomy::find_category(group, name))
                    .map(|c| CategorySchema {
                        name: c.name,
                        descriptors: c.descriptors,
                    })
                    .collect(),
                None => taxonomy::categories(group)
                    .iter()
                    .map(|c| CategorySchema {
                        name: c.name,
                        descriptors: c.descriptors,
                    })
                    .collect(),
            };

        if !categories.is_empty() {
            aroma_groups.push(AromaGroupSchema { group, categories });
        }
    }

    ResolvedSchema {
        color_options: taxonomy::color_options(wine_type).to_vec(),
        aroma_groups,
        show_tannin: wine_type == WineType::Red,
        show_mousse: wine_type == WineType::Sparkling,
    }
}
