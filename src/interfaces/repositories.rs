pub mod contact;
pub mod projects;
pub mod social_links;
pub mod sqlx_repo;
