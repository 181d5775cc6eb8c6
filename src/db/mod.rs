//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 코드를 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)와 제출 파이프라인(services/submit)이
//! 이 모듈을 통해 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `tastings`: 테이스팅 Record Store (`TastingStore` trait + SQLite 구현)
//! - `users`: 사용자 인증 관련 쿼리

pub mod tastings;
pub mod users;

pub use tastings::TastingStore;
