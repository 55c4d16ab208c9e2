use crate::{
    entities::social_links::{SocialLinksForm, SocialLinksView},
    errors::AppError,
    repositories::social_links::SocialLinksRepository,
};

pub struct SocialLinksHandler<R>
where
    R: SocialLinksRepository,
{
    pub social_repo: R,
}

impl<R> SocialLinksHandler<R>
where
    R: SocialLinksRepository,
{
    pub fn new(social_repo: R) -> Self {
        SocialLinksHandler { social_repo }
    }

    /// Reads the singleton. An absent row is not an error; it reads as a
    /// record with every field empty.
    pub async fn get_links(&self) -> Result<SocialLinksView, AppError> {
        let record = self.social_repo.get_social_links().await?;

        Ok(SocialLinksView::from(record))
    }

    /// Creates or replaces the singleton from a write payload.
    pub async fn set_links(&self, form: SocialLinksForm) -> Result<(), AppError> {
        self.social_repo.upsert_social_links(&form.trimmed()).await
    }
}
