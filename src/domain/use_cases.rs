pub mod contact;
pub mod extractors;
pub mod projects;
pub mod social_links;
