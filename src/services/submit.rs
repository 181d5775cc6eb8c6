//! # 제출 파이프라인
//!
//! Add/Edit 플로우에서 폼 제출 한 번이 거치는 단계를 한 곳에 모았습니다:
//!
//! 1. 활성 세션 확인 — 없으면 `Unauthorized`, **스토어 호출 없음**
//! 2. 로컬 검증 + 레코드 변환 — 실패하면 `Validation`, **스토어 호출 없음**
//! 3. 스토어 쓰기 — 실패 메시지는 그대로 사용자에게 전달되고,
//!    폼 상태는 클라이언트에 남아 있으므로 수동 재시도가 가능합니다
//!
//! 스토어는 `TastingStore` trait으로 받으므로, 테스트에서는 호출 횟수를
//! 세는 목 스토어로 1·2단계가 정말 외부 호출을 막는지 검증합니다.

use crate::db::TastingStore;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::models::Tasting;
use crate::services::form::TastingForm;
use crate::services::mapper;

fn require_session(session: Option<&AuthUser>) -> Result<&AuthUser, AppError> {
    session.ok_or_else(|| AppError::Unauthorized("You must be logged in".to_string()))
}

/// Add 플로우: 새 테이스팅을 검증하고 저장합니다.
pub async fn create_tasting<S: TastingStore>(
    store: &S,
    session: Option<&AuthUser>,
    form: &TastingForm,
) -> Result<Tasting, AppError> {
    let user = require_session(session)?;
    let fields = mapper::to_record(form)?;
    store.insert_tasting(&user.user_id, &fields).await
}

/// Edit 플로우: 기존 테이스팅을 폼 상태로 덮어씁니다.
///
/// owner filter 불일치(0행 영향)는 NotFound로 취급합니다.
pub async fn update_tasting<S: TastingStore>(
    store: &S,
    session: Option<&AuthUser>,
    id: &str,
    form: &TastingForm,
) -> Result<Tasting, AppError> {
    let user = require_session(session)?;
    let fields = mapper::to_record(form)?;

    let updated = store.update_tasting(id, &user.user_id, &fields).await?;
    if !updated {
        return Err(AppError::NotFound);
    }

    store
        .get_tasting(id, &user.user_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Edit 플로우의 조회 단계: 레코드를 읽어 폼 상태로 복원합니다.
pub async fn load_for_edit<S: TastingStore>(
    store: &S,
    session: Option<&AuthUser>,
    id: &str,
) -> Result<TastingForm, AppError> {
    let user = require_session(session)?;
    let tasting = store
        .get_tasting(id, &user.user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(mapper::from_record(&tasting.fields()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Acidity, Body, Finish, Sweetness, Tannin, TastingFields, WineType,
    };
    use sqlx::types::Json;
    use std::cell::Cell;

    /// 호출 횟수만 세는 목 스토어
    #[derive(Default)]
    struct CountingStore {
        writes: Cell<usize>,
        reads: Cell<usize>,
    }

    fn tasting_from(owner_id: &str, fields: &TastingFields) -> Tasting {
        Tasting {
            id: "t-1".to_string(),
            user_id: owner_id.to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            wine_name: fields.wine_name.clone(),
            wine_type: fields.wine_type,
            vintage: fields.vintage,
            producer: fields.producer.clone(),
            region: fields.region.clone(),
            clarity: fields.clarity,
            appearance_intensity: fields.appearance_intensity,
            color: fields.color.clone(),
            sweetness: fields.sweetness,
            acidity: fields.acidity,
            tannin: fields.tannin,
            body: fields.body,
            mousse: fields.mousse,
            finish: fields.finish,
            aromas: fields.aromas.clone().map(Json),
            quality_level: fields.quality_level.clone(),
            notes: fields.notes.clone(),
        }
    }

    impl TastingStore for CountingStore {
        async fn insert_tasting(
            &self,
            owner_id: &str,
            fields: &TastingFields,
        ) -> Result<Tasting, AppError> {
            self.writes.set(self.writes.get() + 1);
            Ok(tasting_from(owner_id, fields))
        }

        async fn update_tasting(
            &self,
            _id: &str,
            _owner_id: &str,
            _fields: &TastingFields,
        ) -> Result<bool, AppError> {
            self.writes.set(self.writes.get() + 1);
            Ok(false) // 소유자 불일치 시나리오
        }

        async fn delete_tasting(&self, _id: &str, _owner_id: &str) -> Result<bool, AppError> {
            self.writes.set(self.writes.get() + 1);
            Ok(true)
        }

        async fn get_tasting(
            &self,
            _id: &str,
            _owner_id: &str,
        ) -> Result<Option<Tasting>, AppError> {
            self.reads.set(self.reads.get() + 1);
            Ok(None)
        }

        async fn list_tastings(&self, _owner_id: &str) -> Result<Vec<Tasting>, AppError> {
            self.reads.set(self.reads.get() + 1);
            Ok(Vec::new())
        }
    }

    fn session() -> AuthUser {
        AuthUser {
            user_id: "u-1".to_string(),
        }
    }

    fn valid_form() -> TastingForm {
        let mut form = TastingForm::default();
        form.wine_name = "Barolo".to_string();
        form.set_wine_type(Some(WineType::Red));
        form.sweetness = Some(Sweetness::Dry);
        form.acidity = Some(Acidity::High);
        form.tannin = Some(Tannin::High);
        form.body = Some(Body::Full);
        form.finish = Some(Finish::Long);
        form
    }

    #[tokio::test]
    async fn validation_failure_makes_no_store_call() {
        let store = CountingStore::default();
        let user = session();
        let mut form = valid_form();
        form.wine_name.clear();

        let result = create_tasting(&store, Some(&user), &form).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.writes.get(), 0);
        assert_eq!(store.reads.get(), 0);
    }

    #[tokio::test]
    async fn missing_session_makes_no_store_call() {
        let store = CountingStore::default();
        let result = create_tasting(&store, None, &valid_form()).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
        assert_eq!(store.writes.get(), 0);
        assert_eq!(store.reads.get(), 0);
    }

    #[tokio::test]
    async fn valid_submission_writes_once() {
        let store = CountingStore::default();
        let user = session();
        let tasting = create_tasting(&store, Some(&user), &valid_form())
            .await
            .expect("insert");
        assert_eq!(store.writes.get(), 1);
        assert_eq!(tasting.user_id, "u-1");
        assert_eq!(tasting.tannin, Some(Tannin::High));
    }

    #[tokio::test]
    async fn zero_rows_affected_is_not_found() {
        let store = CountingStore::default();
        let user = session();
        let result = update_tasting(&store, Some(&user), "t-9", &valid_form()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn load_for_edit_maps_missing_record_to_not_found() {
        let store = CountingStore::default();
        let user = session();
        let result = load_for_edit(&store, Some(&user), "t-9").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
