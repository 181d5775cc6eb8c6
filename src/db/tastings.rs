//! # 테이스팅 Record Store
//!
//! `tastings` 컬렉션에 대한 좁은 CRUD 인터페이스입니다.
//!
//! 모든 변경 쿼리는 **owner filter**(user_id)를 포함합니다.
//! 소유자가 다르면 에러가 아니라 "0행 영향"으로 나타나며,
//! 호출 측은 이를 NotFound와 동일하게 취급합니다.
//!
//! 테스트에서 호출 횟수를 세는 목(mock) 스토어로 바꿔 끼울 수 있도록
//! trait 시임(`TastingStore`)을 두고, 실제 구현은 `SqlitePool`에 붙입니다.

use crate::error::AppError;
use crate::models::{Tasting, TastingFields};
use sqlx::types::Json;
use sqlx::SqlitePool;

/// 테이스팅 컬렉션의 CRUD 계약
///
/// `update`/`delete`의 `bool` 반환값은 "owner filter에 맞는 행이
/// 실제로 있었는가"입니다. false = not found / not authorized.
#[allow(async_fn_in_trait)]
pub trait TastingStore {
    async fn insert_tasting(
        &self,
        owner_id: &str,
        fields: &TastingFields,
    ) -> Result<Tasting, AppError>;

    async fn update_tasting(
        &self,
        id: &str,
        owner_id: &str,
        fields: &TastingFields,
    ) -> Result<bool, AppError>;

    async fn delete_tasting(&self, id: &str, owner_id: &str) -> Result<bool, AppError>;

    async fn get_tasting(&self, id: &str, owner_id: &str)
        -> Result<Option<Tasting>, AppError>;

    /// 소유자의 전체 테이스팅, 생성 시각 내림차순
    async fn list_tastings(&self, owner_id: &str) -> Result<Vec<Tasting>, AppError>;
}

const SELECT_COLUMNS: &str = "\
    id, user_id, created_at, wine_name, wine_type, vintage, producer, region, \
    clarity, appearance_intensity, color, sweetness, acidity, tannin, body, \
    mousse, finish, aromas, quality_level, notes";

impl TastingStore for SqlitePool {
    async fn insert_tasting(
        &self,
        owner_id: &str,
        fields: &TastingFields,
    ) -> Result<Tasting, AppError> {
        let id = uuid::Uuid::now_v7().to_string();

        sqlx::query(
            r#"
            INSERT INTO tastings (
                id, user_id, wine_name, wine_type, vintage, producer, region,
                clarity, appearance_intensity, color, sweetness, acidity,
                tannin, body, mousse, finish, aromas, quality_level, notes
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(owner_id)
        .bind(&fields.wine_name)
        .bind(fields.wine_type)
        .bind(fields.vintage)
        .bind(&fields.producer)
        .bind(&fields.region)
        .bind(fields.clarity)
        .bind(fields.appearance_intensity)
        .bind(&fields.color)
        .bind(fields.sweetness)
        .bind(fields.acidity)
        .bind(fields.tannin)
        .bind(fields.body)
        .bind(fields.mousse)
        .bind(fields.finish)
        // 아로마는 JSON 배열 문자열로 저장합니다 (None = NULL).
        .bind(fields.aromas.clone().map(Json))
        .bind(&fields.quality_level)
        .bind(&fields.notes)
        .execute(self)
        .await?;

        self.get_tasting(&id, owner_id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to retrieve created tasting".to_string()))
    }

    async fn update_tasting(
        &self,
        id: &str,
        owner_id: &str,
        fields: &TastingFields,
    ) -> Result<bool, AppError> {
        // 레코드 전체를 폼 상태로 덮어씁니다 (폼이 전체 필드를 들고 있으므로
        // 부분 업데이트가 필요 없습니다). owner filter 불일치 → 0행.
        let result = sqlx::query(
            r#"
            UPDATE tastings SET
                wine_name = ?, wine_type = ?, vintage = ?, producer = ?,
                region = ?, clarity = ?, appearance_intensity = ?, color = ?,
                sweetness = ?, acidity = ?, tannin = ?, body = ?, mousse = ?,
                finish = ?, aromas = ?, quality_level = ?, notes = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&fields.wine_name)
        .bind(fields.wine_type)
        .bind(fields.vintage)
        .bind(&fields.producer)
        .bind(&fields.region)
        .bind(fields.clarity)
        .bind(fields.appearance_intensity)
        .bind(&fields.color)
        .bind(fields.sweetness)
        .bind(fields.acidity)
        .bind(fields.tannin)
        .bind(fields.body)
        .bind(fields.mousse)
        .bind(fields.finish)
        .bind(fields.aromas.clone().map(Json))
        .bind(&fields.quality_level)
        .bind(&fields.notes)
        .bind(id)
        .bind(owner_id)
        .execute(self)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_tasting(&self, id: &str, owner_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tastings WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(self)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_tasting(
        &self,
        id: &str,
        owner_id: &str,
    ) -> Result<Option<Tasting>, AppError> {
        let tasting = sqlx::query_as::<_, Tasting>(&format!(
            "SELECT {SELECT_COLUMNS} FROM tastings WHERE id = ? AND user_id = ?"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self)
        .await?;

        Ok(tasting)
    }

    async fn list_tastings(&self, owner_id: &str) -> Result<Vec<Tasting>, AppError> {
        let tastings = sqlx::query_as::<_, Tasting>(&format!(
            "SELECT {SELECT_COLUMNS} FROM tastings WHERE user_id = ? ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(self)
        .await?;

        Ok(tastings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::users;
    use crate::models::{
        Acidity, Body, Finish, Mousse, Sweetness, Tannin, WineType,
    };
    use sqlx::sqlite::SqlitePoolOptions;

    // 인메모리 SQLite는 연결마다 별도 DB이므로 연결을 1개로 고정합니다.
    async fn setup() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");
        users::create_user(&pool, "u-1", "owner@example.com", "hash")
            .await
            .expect("owner");
        users::create_user(&pool, "u-2", "other@example.com", "hash")
            .await
            .expect("other user");
        pool
    }

    fn rose_fields() -> TastingFields {
        TastingFields {
            wine_name: "Bandol Rosé".to_string(),
            wine_type: WineType::Rose,
            vintage: Some(2023),
            producer: Some("Domaine Tempier".to_string()),
            region: Some("Provence".to_string()),
            clarity: None,
            appearance_intensity: None,
            color: Some("Salmon".to_string()),
            sweetness: Sweetness::Dry,
            acidity: Acidity::Medium,
            tannin: None,
            body: Body::Light,
            mousse: None,
            finish: Finish::Medium,
            aromas: Some(vec!["Peach".to_string(), "Strawberry".to_string()]),
            quality_level: Some("Very Good".to_string()),
            notes: None,
        }
    }

    fn sparkling_fields() -> TastingFields {
        TastingFields {
            wine_name: "Blanc de Blancs".to_string(),
            wine_type: WineType::Sparkling,
            vintage: None,
            producer: None,
            region: None,
            clarity: None,
            appearance_intensity: None,
            color: None,
            sweetness: Sweetness::Dry,
            acidity: Acidity::High,
            tannin: None,
            body: Body::Light,
            mousse: Some(Mousse::Creamy),
            finish: Finish::Long,
            aromas: None,
            quality_level: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn insert_then_get_preserves_fields_and_spellings() {
        let pool = setup().await;
        let created = pool
            .insert_tasting("u-1", &rose_fields())
            .await
            .expect("insert");

        let fetched = pool
            .get_tasting(&created.id, "u-1")
            .await
            .expect("get")
            .expect("row exists");

        // 저장 철자("Rosé" 포함)와 JSON 아로마가 그대로 돌아와야 합니다.
        assert_eq!(fetched.wine_type, WineType::Rose);
        assert_eq!(fetched.wine_type.as_str(), "Rosé");
        assert_eq!(fetched.fields(), rose_fields());
        assert!(!fetched.created_at.is_empty());
    }

    #[tokio::test]
    async fn owner_filter_hides_foreign_rows() {
        let pool = setup().await;
        let created = pool
            .insert_tasting("u-1", &sparkling_fields())
            .await
            .expect("insert");

        // 다른 사용자에게는 에러가 아니라 "없음"으로 보입니다.
        assert!(pool
            .get_tasting(&created.id, "u-2")
            .await
            .expect("get")
            .is_none());
        assert!(!pool
            .update_tasting(&created.id, "u-2", &sparkling_fields())
            .await
            .expect("update"));
        assert!(!pool
            .delete_tasting(&created.id, "u-2")
            .await
            .expect("delete"));

        // 소유자는 여전히 접근 가능합니다.
        assert!(pool
            .get_tasting(&created.id, "u-1")
            .await
            .expect("get")
            .is_some());
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let pool = setup().await;
        let created = pool
            .insert_tasting("u-1", &rose_fields())
            .await
            .expect("insert");

        let updated = pool
            .update_tasting(&created.id, "u-1", &sparkling_fields())
            .await
            .expect("update");
        assert!(updated);

        let fetched = pool
            .get_tasting(&created.id, "u-1")
            .await
            .expect("get")
            .expect("row exists");
        assert_eq!(fetched.fields(), sparkling_fields());
        assert_eq!(fetched.tannin, None);
        assert_eq!(fetched.mousse, Some(Mousse::Creamy));
    }

    #[tokio::test]
    async fn list_returns_owner_rows_newest_first() {
        let pool = setup().await;
        let older = pool
            .insert_tasting("u-1", &rose_fields())
            .await
            .expect("insert");
        let newer = pool
            .insert_tasting("u-1", &sparkling_fields())
            .await
            .expect("insert");
        pool.insert_tasting("u-2", &rose_fields())
            .await
            .expect("insert foreign");

        // created_at 동률을 피하기 위해 한 행을 과거로 밀어둡니다.
        sqlx::query("UPDATE tastings SET created_at = '2020-01-01T00:00:00.000Z' WHERE id = ?")
            .bind(&older.id)
            .execute(&pool)
            .await
            .expect("backdate");

        let listed = pool.list_tastings("u-1").await.expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let pool = setup().await;
        let created = pool
            .insert_tasting("u-1", &sparkling_fields())
            .await
            .expect("insert");

        assert!(pool
            .delete_tasting(&created.id, "u-1")
            .await
            .expect("delete"));
        assert!(pool
            .get_tasting(&created.id, "u-1")
            .await
            .expect("get")
            .is_none());
        // 두 번째 삭제는 0행 영향 → false
        assert!(!pool
            .delete_tasting(&created.id, "u-1")
            .await
            .expect("delete again"));
    }
}
