use std::sync::Arc;

use crate::{
    cache::content_cache::{CacheKey, ContentCache},
    entities::about_info::{AboutInfo, AboutInfoUpdate, UpdateAboutInfoRequest},
    errors::AppError,
    repositories::about::AboutRepository,
};

pub struct AboutHandler<R>
where
    R: AboutRepository,
{
    pub about_repo: R,
    cache: ContentCache,
}

impl<R> AboutHandler<R>
where
    R: AboutRepository,
{
    pub fn new(about_repo: R, cache: ContentCache) -> Self {
        AboutHandler { about_repo, cache }
    }

    pub async fn get_about(&self) -> Result<Arc<AboutInfo>, AppError> {
        self.cache
            .get_or_load(CacheKey::About, || self.about_repo.get_about())
            .await
    }

    /// Updates the about record in place; absent fields keep their value
    pub async fn update_about(&self, changes: UpdateAboutInfoRequest) -> Result<AboutInfo, AppError> {
        let current = self.about_repo.get_about().await?;
        let update = AboutInfoUpdate::try_from(current.merged_with(changes))?;

        let about = self.about_repo.update_about(&update).await?;
        self.cache.invalidate(CacheKey::About);

        tracing::info!("About info updated");
        Ok(about)
    }
}
