use std::sync::Arc;

use crate::{
    cache::content_cache::{CacheKey, ContentCache},
    entities::testimonial::{
        NewTestimonialRequest, Testimonial, TestimonialInsert, UpdateTestimonialRequest,
    },
    errors::AppError,
    repositories::testimonial::TestimonialRepository,
};

pub struct TestimonialHandler<R>
where
    R: TestimonialRepository,
{
    pub testimonial_repo: R,
    cache: ContentCache,
}

impl<R> TestimonialHandler<R>
where
    R: TestimonialRepository,
{
    pub fn new(testimonial_repo: R, cache: ContentCache) -> Self {
        TestimonialHandler { testimonial_repo, cache }
    }

    pub async fn list_testimonials(&self) -> Result<Arc<Vec<Testimonial>>, AppError> {
        self.cache
            .get_or_load(CacheKey::Testimonials, || self.testimonial_repo.list_testimonials())
            .await
    }

    pub async fn get_testimonial(&self, id: i64) -> Result<Testimonial, AppError> {
        self.testimonial_repo.get_testimonial(id).await
    }

    pub async fn create_testimonial(
        &self,
        request: NewTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        let insert = TestimonialInsert::try_from(request)?;

        let testimonial = self.testimonial_repo.create_testimonial(&insert).await?;
        self.cache.invalidate(CacheKey::Testimonials);

        tracing::info!(testimonial_id = testimonial.id, "Testimonial created");
        Ok(testimonial)
    }

    pub async fn update_testimonial(
        &self,
        id: i64,
        changes: UpdateTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        let current = self.testimonial_repo.get_testimonial(id).await?;
        let insert = TestimonialInsert::try_from(current.merged_with(changes))?;

        let testimonial = self.testimonial_repo.update_testimonial(id, &insert).await?;
        self.cache.invalidate(CacheKey::Testimonials);

        tracing::info!(testimonial_id = id, "Testimonial updated");
        Ok(testimonial)
    }

    pub async fn delete_testimonial(&self, id: i64) -> Result<(), AppError> {
        self.testimonial_repo.delete_testimonial(id).await?;
        self.cache.invalidate(CacheKey::Testimonials);

        tracing::info!(testimonial_id = id, "Testimonial deleted");
        Ok(())
    }
}
