use crate::{
    entities::project::{NewProject, Project, ProjectJson},
    errors::AppError,
    repositories::projects::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every project, newest-created first, in wire shape.
    pub async fn list_projects(&self, base_url: &str) -> Result<Vec<ProjectJson>, AppError> {
        let projects = self.project_repo.list_projects().await?;

        Ok(projects
            .iter()
            .map(|p| ProjectJson::new(p, base_url))
            .collect())
    }

    /// Retrieves a single project by id in wire shape.
    pub async fn get_project(&self, id: i64, base_url: &str) -> Result<ProjectJson, AppError> {
        let project = self.project_repo.get_project(id).await?;

        Ok(ProjectJson::new(&project, base_url))
    }

    /// Creates a project. Only reachable through the administrative
    /// collaborator; the public API is read-only.
    pub async fn create_project(&self, new_project: NewProject) -> Result<Project, AppError> {
        self.project_repo.create_project(&new_project).await
    }

    /// Replaces a project's editable fields, refreshing `updated_at`.
    pub async fn update_project(
        &self,
        id: i64,
        changes: NewProject,
    ) -> Result<Project, AppError> {
        self.project_repo.update_project(id, &changes).await
    }
}
