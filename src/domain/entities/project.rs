use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::constants::MEDIA_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[display("experience")]
    Experience,
    #[display("freelance")]
    Freelance,
    #[display("personal")]
    Personal,
}

impl ProjectCategory {
    /// Human-readable label shown alongside the raw value.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Experience => "Опыт",
            ProjectCategory::Freelance => "Фриланс",
            ProjectCategory::Personal => "Персональный",
        }
    }
}

impl Default for ProjectCategory {
    fn default() -> Self {
        ProjectCategory::Personal
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub description_en: Option<String>,
    pub category: ProjectCategory,
    pub release_date: Option<NaiveDate>,
    pub work_start_date: Option<NaiveDate>,
    pub work_end_date: Option<NaiveDate>,
    pub link_google_play: Option<String>,
    pub link_rustore: Option<String>,
    pub link_appstore: Option<String>,
    pub link_github: Option<String>,
    pub extra_social_link: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or replacing a project through the data store.
/// The public API never accepts this; it exists for the administrative
/// collaborator and for seeding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub description_en: Option<String>,
    #[serde(default)]
    pub category: ProjectCategory,
    pub release_date: Option<NaiveDate>,
    pub work_start_date: Option<NaiveDate>,
    pub work_end_date: Option<NaiveDate>,
    pub link_google_play: Option<String>,
    pub link_rustore: Option<String>,
    pub link_appstore: Option<String>,
    pub link_github: Option<String>,
    pub extra_social_link: Option<String>,
    pub image: Option<String>,
}

/// Wire representation of a project.
///
/// Field order is the response field order; every optional renders as null,
/// never omitted, so the shape is identical across all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectJson {
    pub id: i64,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub description_en: Option<String>,
    pub category: ProjectCategory,
    pub category_label: String,
    pub release_date: Option<NaiveDate>,
    pub work_period: WorkPeriod,
    pub links: ProjectLinks,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub google_play: Option<String>,
    pub rustore: Option<String>,
    pub appstore: Option<String>,
    pub github: Option<String>,
    pub extra_social: Option<String>,
}

impl ProjectJson {
    /// Pure mapping from a stored project to its wire shape. `base_url` is
    /// the scheme+authority of the incoming request and is only used to
    /// absolutize the image path.
    pub fn new(project: &Project, base_url: &str) -> Self {
        ProjectJson {
            id: project.id,
            name: project.name.clone(),
            subtitle: project.subtitle.clone(),
            description: project.description.clone(),
            description_en: project.description_en.clone(),
            category: project.category,
            category_label: project.category.label().to_string(),
            release_date: project.release_date,
            work_period: WorkPeriod {
                start: project.work_start_date,
                end: project.work_end_date,
            },
            links: ProjectLinks {
                google_play: project.link_google_play.clone(),
                rustore: project.link_rustore.clone(),
                appstore: project.link_appstore.clone(),
                github: project.link_github.clone(),
                extra_social: project.extra_social_link.clone(),
            },
            image: project.image.as_deref().map(|path| media_url(base_url, path)),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

fn media_url(base_url: &str, path: &str) -> String {
    format!(
        "{}{}{}",
        base_url.trim_end_matches('/'),
        MEDIA_URL,
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_project() -> Project {
        Project {
            id: 7,
            name: "Weather Widget".into(),
            subtitle: "Android home-screen widget".into(),
            description: "Полное описание".into(),
            description_en: None,
            category: ProjectCategory::Freelance,
            release_date: NaiveDate::from_ymd_opt(2023, 11, 2),
            work_start_date: NaiveDate::from_ymd_opt(2023, 6, 1),
            work_end_date: None,
            link_google_play: Some("https://play.google.com/store/apps/details?id=w".into()),
            link_rustore: None,
            link_appstore: None,
            link_github: None,
            extra_social_link: None,
            image: Some("projects/widget.png".into()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn serialization_is_stable() {
        let project = sample_project();
        let first = serde_json::to_string(&ProjectJson::new(&project, "http://x.test")).unwrap();
        let second = serde_json::to_string(&ProjectJson::new(&project, "http://x.test")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn absent_optionals_render_as_null() {
        let project = sample_project();
        let value = serde_json::to_value(ProjectJson::new(&project, "http://x.test")).unwrap();

        assert!(value["description_en"].is_null());
        assert!(value["work_period"]["end"].is_null());
        assert!(value["links"]["rustore"].is_null());
        assert!(value["links"]["google_play"].is_string());
        assert_eq!(value["release_date"], "2023-11-02");
    }

    #[test]
    fn image_path_becomes_absolute_media_url() {
        let project = sample_project();
        let json = ProjectJson::new(&project, "http://127.0.0.1:8080/");
        assert_eq!(
            json.image.as_deref(),
            Some("http://127.0.0.1:8080/media/projects/widget.png")
        );

        let mut without_image = sample_project();
        without_image.image = None;
        assert!(ProjectJson::new(&without_image, "http://x.test").image.is_none());
    }

    #[test]
    fn category_labels_follow_the_value() {
        assert_eq!(ProjectCategory::Experience.label(), "Опыт");
        assert_eq!(ProjectCategory::Freelance.label(), "Фриланс");
        assert_eq!(ProjectCategory::Personal.label(), "Персональный");
        assert_eq!(ProjectCategory::Experience.to_string(), "experience");
    }
}
