use sqlx::{migrate::Migrator, SqlitePool};
use tracing::info;

use crate::errors::AppError;

/// Ordered, checksummed schema history embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies every pending migration. Already applied versions are skipped; an
/// applied version whose checksum changed aborts with an error.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    let version = current_version(pool).await?;
    info!(version = ?version, "Database schema up to date");
    Ok(())
}

/// Latest successfully applied migration, if any.
pub async fn current_version(pool: &SqlitePool) -> Result<Option<i64>, AppError> {
    let version: Option<i64> = sqlx::query_scalar(
        "SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1",
    )
    .fetch_one(pool)
    .await?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::create_pool;

    async fn table_columns(pool: &SqlitePool, table: &str) -> Vec<String> {
        sqlx::query_scalar::<_, String>(&format!("SELECT name FROM pragma_table_info('{table}')"))
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn applies_every_step_once() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(applied as usize, MIGRATOR.iter().count());

        let last = MIGRATOR.iter().map(|m| m.version).max();
        assert_eq!(current_version(&pool).await.unwrap(), last);
    }

    #[tokio::test]
    async fn later_steps_add_their_columns() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        run_migrations(&pool).await.unwrap();

        assert!(table_columns(&pool, "projects").await.contains(&"live_url".to_string()));
        assert!(table_columns(&pool, "contact_messages").await.contains(&"starred".to_string()));
        assert!(table_columns(&pool, "about_info").await.contains(&"instagram_url".to_string()));
    }

    #[tokio::test]
    async fn singletons_are_seeded_and_constrained() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let about: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM about_info")
            .fetch_one(&pool)
            .await
            .unwrap();
        let legal: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM legal_docs")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!((about, legal), (1, 2));

        let second_row = sqlx::query("INSERT INTO about_info (id) VALUES (2)")
            .execute(&pool)
            .await;
        assert!(second_row.is_err());

        let unknown_doc = sqlx::query("INSERT INTO legal_docs (doc_type) VALUES ('cookie_policy')")
            .execute(&pool)
            .await;
        assert!(unknown_doc.is_err());
    }
}
