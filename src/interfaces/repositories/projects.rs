use async_trait::async_trait;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, new_project: &NewProject) -> Result<Project, AppError>;
    async fn get_project(&self, id: i64) -> Result<Project, AppError>;
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn update_project(&self, id: i64, changes: &NewProject) -> Result<Project, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, new_project: &NewProject) -> Result<Project, AppError> {
        let now = chrono::Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO projects (
                name, subtitle, description, description_en, category,
                release_date, work_start_date, work_end_date,
                link_google_play, link_rustore, link_appstore, link_github,
                extra_social_link, image, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_project.name)
        .bind(&new_project.subtitle)
        .bind(&new_project.description)
        .bind(&new_project.description_en)
        .bind(new_project.category)
        .bind(new_project.release_date)
        .bind(new_project.work_start_date)
        .bind(new_project.work_end_date)
        .bind(&new_project.link_google_play)
        .bind(&new_project.link_rustore)
        .bind(&new_project.link_appstore)
        .bind(&new_project.link_github)
        .bind(&new_project.extra_social_link)
        .bind(&new_project.image)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_project(result.last_insert_rowid()).await
    }

    async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        project.ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn update_project(&self, id: i64, changes: &NewProject) -> Result<Project, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                name = ?, subtitle = ?, description = ?, description_en = ?,
                category = ?, release_date = ?, work_start_date = ?,
                work_end_date = ?, link_google_play = ?, link_rustore = ?,
                link_appstore = ?, link_github = ?, extra_social_link = ?,
                image = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.subtitle)
        .bind(&changes.description)
        .bind(&changes.description_en)
        .bind(changes.category)
        .bind(changes.release_date)
        .bind(changes.work_start_date)
        .bind(changes.work_end_date)
        .bind(&changes.link_google_play)
        .bind(&changes.link_rustore)
        .bind(&changes.link_appstore)
        .bind(&changes.link_github)
        .bind(&changes.extra_social_link)
        .bind(&changes.image)
        .bind(chrono::Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Project {} not found", id)));
        }

        self.get_project(id).await
    }
}
