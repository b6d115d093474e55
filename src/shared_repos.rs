use crate::repositories::sqlx_repo::{
    SqlxAboutRepo, SqlxContactMessageRepo, SqlxLegalRepo, SqlxProjectRepo, SqlxSkillRepo,
    SqlxTestimonialRepo, SqlxUserRepo,
};

/// One repository per table, all sharing the same pool.
#[derive(Clone)]
pub struct SharedRepositories {
    pub user_repo: SqlxUserRepo,
    pub project_repo: SqlxProjectRepo,
    pub skill_repo: SqlxSkillRepo,
    pub testimonial_repo: SqlxTestimonialRepo,
    pub contact_repo: SqlxContactMessageRepo,
    pub about_repo: SqlxAboutRepo,
    pub legal_repo: SqlxLegalRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SharedRepositories {
            user_repo: SqlxUserRepo::new(pool.clone()),
            project_repo: SqlxProjectRepo::new(pool.clone()),
            skill_repo: SqlxSkillRepo::new(pool.clone()),
            testimonial_repo: SqlxTestimonialRepo::new(pool.clone()),
            contact_repo: SqlxContactMessageRepo::new(pool.clone()),
            about_repo: SqlxAboutRepo::new(pool.clone()),
            legal_repo: SqlxLegalRepo::new(pool),
        }
    }
}
