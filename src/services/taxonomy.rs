//! # 와인 분류(Taxonomy) 정적 테이블
//!
//! 와인 타입별 색상 옵션, 아로마 그룹/카테고리/디스크립터를 담은
//! 순수 데이터 모듈입니다. 동작(로직)은 없고 조회 함수만 있습니다.
//!
//! 새 와인 타입이나 디스크립터를 추가할 때 로직 수정 없이
//! 이 파일의 테이블만 고치면 되도록 데이터 주도로 유지합니다.
//!
//! 두 개의 독립 테이블:
//! - 타입 → 색상 옵션 목록 (`color_options`)
//! - 타입 → 그룹별 카테고리 제한 (`category_restrictions`)
//!   테이블에 없는 (타입, 그룹) 쌍은 "제한 없음 — 그룹 전체 표시"를 뜻합니다.
//!
//! 카테고리 이름은 닫힌 enum이 아닌 문자열이므로, 제한 테이블의 오타는
//! 컴파일러가 잡아주지 못합니다. 대신 아래 테스트 모듈이 제한 테이블의
//! 모든 카테고리 이름을 그룹 테이블과 대조합니다 (빌드/테스트 시점 검증).

use crate::models::{AromaGroup, WineType};

/// 아로마 카테고리 하나 — 이름과 그 아래의 디스크립터 목록
///
/// 카테고리 자체도 선택 가능한 거친 단위이고,
/// 디스크립터는 그 안의 세부 선택지입니다 (예: "Stone Fruit" → "Peach").
#[derive(Debug, Clone, Copy)]
pub struct AromaCategory {
    pub name: &'static str,
    pub descriptors: &'static [&'static str],
}

/// 품질 평가 단계 — 저장 철자가 계약이므로 순서·철자를 바꾸면 안 됩니다.
pub const QUALITY_LEVELS: &[&str] = &[
    "Faulty",
    "Poor",
    "Acceptable",
    "Good",
    "Very Good",
    "Outstanding",
];

/// 타입별 색상 옵션 (Color 셀렉터에 표시되는 순서 그대로)
pub fn color_options(wine_type: WineType) -> &'static [&'static str] {
    match wine_type {
        WineType::Red => &["Purple", "Ruby", "Garnet", "Tawny"],
        WineType::White => &["Lemon-Green", "Lemon", "Gold", "Amber"],
        WineType::Rose => &["Pink", "Salmon", "Orange", "Onion Skin"],
        WineType::Sparkling => &["Lemon", "Gold", "Pink"],
        WineType::Fortified => &["Gold", "Amber", "Brown", "Tawny", "Ruby"],
    }
}

/// 그룹별 전체 카테고리 목록 (디스크립터 포함)
pub fn categories(group: AromaGroup) -> &'static [AromaCategory] {
    match group {
        AromaGroup::Primary => &[
            AromaCategory {
                name: "Floral",
                descriptors: &["Blossom", "Rose", "Violet"],
            },
            AromaCategory {
                name: "Green Fruit",
                descriptors: &["Apple", "Pear", "Gooseberry", "Grape"],
            },
            AromaCategory {
                name: "Citrus Fruit",
                descriptors: &["Grapefruit", "Lemon", "Lime"],
            },
            AromaCategory {
                name: "Stone Fruit",
                descriptors: &["Peach", "Apricot", "Nectarine"],
            },
            AromaCategory {
                name: "Tropical Fruit",
                descriptors: &["Banana", "Lychee", "Mango", "Melon", "Passion Fruit", "Pineapple"],
            },
            AromaCategory {
                name: "Red Fruit",
                descriptors: &["Redcurrant", "Cranberry", "Raspberry", "Strawberry", "Red Cherry", "Red Plum"],
            },
            AromaCategory {
                name: "Black Fruit",
                descriptors: &["Blackcurrant", "Blackberry", "Blueberry", "Black Cherry", "Black Plum"],
            },
            AromaCategory {
                name: "Herbaceous",
                descriptors: &["Green Bell Pepper", "Grass", "Tomato Leaf", "Asparagus"],
            },
            AromaCategory {
                name: "Spice",
                descriptors: &["Black Pepper", "White Pepper", "Liquorice"],
            },
        ],
        AromaGroup::Secondary => &[
            AromaCategory {
                name: "Yeast",
                descriptors: &["Biscuit", "Bread", "Toast", "Brioche", "Dough", "Yeast"],
            },
            AromaCategory {
                name: "Malolactic",
                descriptors: &["Butter", "Cheese", "Cream"],
            },
            AromaCategory {
                name: "Oak",
                descriptors: &["Vanilla", "Cloves", "Coconut", "Cedar", "Charred Wood", "Smoke"],
            },
        ],
        AromaGroup::Tertiary => &[
            AromaCategory {
                name: "Deliberate Oxidation",
                descriptors: &["Almond", "Hazelnut", "Walnut", "Chocolate", "Coffee", "Caramel"],
            },
            AromaCategory {
                name: "Fruit Development",
                descriptors: &["Dried Apricot", "Marmalade", "Dried Apple", "Raisin", "Prune", "Fig"],
            },
            AromaCategory {
                name: "Bottle Age",
                descriptors: &["Petrol", "Honey", "Mushroom", "Hay", "Forest Floor", "Leather", "Earth", "Tobacco"],
            },
        ],
    }
}

/// (타입, 그룹)별 카테고리 제한
///
/// `None` = 제한 없음 → 그 그룹의 전체 카테고리를 표시합니다.
/// 현재 제한은 Primary 그룹에만 있습니다. 양조/숙성 유래 향(Secondary,
/// Tertiary)은 타입과 무관하게 나타날 수 있기 때문입니다.
pub fn category_restrictions(
    wine_type: WineType,
    group: AromaGroup,
) -> Option<&'static [&'static str]> {
    match (wine_type, group) {
        (WineType::Red, AromaGroup::Primary) => {
            Some(&["Floral", "Red Fruit", "Black Fruit", "Herbaceous", "Spice"])
        }
        (WineType::White, AromaGroup::Primary) => Some(&[
            "Floral",
            "Green Fruit",
            "Citrus Fruit",
            "Stone Fruit",
            "Tropical Fruit",
            "Herbaceous",
        ]),
        (WineType::Rose, AromaGroup::Primary) => Some(&[
            "Floral",
            "Red Fruit",
            "Citrus Fruit",
            "Stone Fruit",
            "Herbaceous",
        ]),
        (WineType::Sparkling, AromaGroup::Primary) => Some(&[
            "Floral",
            "Green Fruit",
            "Citrus Fruit",
            "Stone Fruit",
            "Red Fruit",
        ]),
        // Fortified는 스타일 폭이 넓어 Primary도 제한하지 않습니다.
        _ => None,
    }
}

/// 그룹 내에서 카테고리를 이름으로 찾습니다.
pub fn find_category(group: AromaGroup, name: &str) -> Option<&'static AromaCategory> {
    categories(group).iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 제한 테이블의 오타를 테스트 시점에 잡습니다 (런타임 대신).
    #[test]
    fn restricted_categories_exist_in_group_tables() {
        for wine_type in WineType::ALL {
            for group in AromaGroup::ALL {
                if let Some(restriction) = category_restrictions(wine_type, group) {
                    for name in restriction {
                        assert!(
                            find_category(group, name).is_some(),
                            "unknown category {:?} in restriction for {:?}/{:?}",
                            name,
                            wine_type,
                            group
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn every_wine_type_has_color_options() {
        for wine_type in WineType::ALL {
            assert!(
                !color_options(wine_type).is_empty(),
                "no colors for {:?}",
                wine_type
            );
        }
    }

    #[test]
    fn every_category_has_descriptors() {
        for group in AromaGroup::ALL {
            for category in categories(group) {
                assert!(
                    !category.descriptors.is_empty(),
                    "category {:?} has no descriptors",
                    category.name
                );
            }
        }
    }

    #[test]
    fn quality_levels_keep_contract_spelling() {
        assert!(QUALITY_LEVELS.contains(&"Very Good"));
    }
}
