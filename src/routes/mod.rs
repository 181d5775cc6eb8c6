//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `auth`: 인증 관련 (회원가입, 로그인, 토큰 갱신, 로그아웃)
//! - `tastings`: 테이스팅 CRUD 핸들러
//! - `schema`: 조건부 폼 스키마 핸들러
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod auth;
pub mod health;
pub mod schema;
pub mod tastings;

// 각 모듈의 핸들러 함수들을 재공개하여
// main.rs에서 `routes::list_tastings`처럼 바로 접근 가능하게 합니다.
pub use health::*;
pub use schema::*;
pub use tastings::*;
