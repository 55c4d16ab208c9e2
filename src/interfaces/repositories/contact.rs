use async_trait::async_trait;

use crate::{
    entities::contact_message::{ContactForm, ContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactMessageRepo,
};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(&self, form: &ContactForm) -> Result<ContactMessage, AppError>;
    async fn get_contact_message(&self, id: i64) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
}

impl SqlxContactMessageRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(&self, form: &ContactForm) -> Result<ContactMessage, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO contact_messages (full_name, email, message, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&form.full_name)
        .bind(&form.email)
        .bind(&form.message)
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;

        self.get_contact_message(result.last_insert_rowid()).await
    }

    async fn get_contact_message(&self, id: i64) -> Result<ContactMessage, AppError> {
        let message =
            sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        message.ok_or_else(|| AppError::NotFound(format!("Contact message {} not found", id)))
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
