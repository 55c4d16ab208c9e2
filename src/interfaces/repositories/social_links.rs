use async_trait::async_trait;

use crate::{
    entities::social_links::{SocialLinks, SocialLinksForm},
    errors::AppError,
    repositories::sqlx_repo::SqlxSocialLinksRepo,
};

/// The singleton row lives under this fixed key.
const SINGLETON_ID: i64 = 1;

#[async_trait]
pub trait SocialLinksRepository: Send + Sync {
    async fn get_social_links(&self) -> Result<Option<SocialLinks>, AppError>;
    async fn upsert_social_links(&self, form: &SocialLinksForm) -> Result<(), AppError>;
}

impl SqlxSocialLinksRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxSocialLinksRepo { pool }
    }
}

#[async_trait]
impl SocialLinksRepository for SqlxSocialLinksRepo {
    async fn get_social_links(&self) -> Result<Option<SocialLinks>, AppError> {
        let record = sqlx::query_as::<_, SocialLinks>(
            "SELECT telegram, github, linkedin FROM social_links WHERE id = ?",
        )
        .bind(SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn upsert_social_links(&self, form: &SocialLinksForm) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO social_links (id, telegram, github, linkedin)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                telegram = excluded.telegram,
                github = excluded.github,
                linkedin = excluded.linkedin
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(&form.telegram)
        .bind(&form.github)
        .bind(&form.linkedin)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
