//! # 서비스(도메인 로직) 모듈
//!
//! HTTP/DB와 무관한 순수 도메인 로직을 모아둔 모듈입니다.
//! 의존 방향: taxonomy ← schema ← form ← mapper ← submit
//!
//! 각 하위 모듈:
//! - `taxonomy`: 와인 분류 정적 테이블 (타입별 색상/아로마 데이터)
//! - `schema`: 타입 → 활성 필드/옵션 집합 계산 (Schema Resolver)
//! - `form`: 폼 상태 머신 (종속 필드 초기화, 아로마 토글, 제출 전 검증)
//! - `mapper`: 폼 상태 ↔ 저장 레코드 변환 (Record Mapper)
//! - `submit`: 제출 파이프라인 (세션 확인 → 검증 → 스토어 쓰기)

pub mod form;
pub mod mapper;
pub mod schema;
pub mod submit;
pub mod taxonomy;
