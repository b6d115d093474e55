use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxTestimonialRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxContactMessageRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxAboutRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxLegalRepo {
    pub pool: SqlitePool,
}

/// Maps "no row touched" to a NotFound naming the record.
pub(crate) fn expect_affected(rows: u64, what: &str) -> Result<(), AppError> {
    if rows == 0 {
        Err(AppError::NotFound(format!("{} not found", what)))
    } else {
        Ok(())
    }
}

pub(crate) fn not_found(what: &'static str) -> impl Fn(sqlx::Error) -> AppError {
    move |e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound(format!("{} not found", what)),
        other => other.into(),
    }
}
