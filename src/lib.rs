mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod openapi;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{db, notify};
pub use interfaces::{handlers, repositories, routes};

use notify::telegram::TelegramNotifier;
use repositories::sqlx_repo::{SqlxContactMessageRepo, SqlxProjectRepo, SqlxSocialLinksRepo};
use settings::AppConfig;
use use_cases::{
    contact::ContactHandler, projects::ProjectHandler, social_links::SocialLinksHandler,
};

pub struct AppState {
    pub config: AppConfig,
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
    pub social_handler: AppSocialLinksHandler,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactMessageRepo, TelegramNotifier>;
pub type AppSocialLinksHandler = SocialLinksHandler<SqlxSocialLinksRepo>;

impl AppState {
    pub fn new(config: &AppConfig, pool: sqlx::SqlitePool) -> Self {
        let notifier = TelegramNotifier::from_config(config);

        AppState {
            config: config.clone(),
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            contact_handler: ContactHandler::new(
                SqlxContactMessageRepo::new(pool.clone()),
                notifier,
            ),
            social_handler: SocialLinksHandler::new(SqlxSocialLinksRepo::new(pool)),
        }
    }
}
