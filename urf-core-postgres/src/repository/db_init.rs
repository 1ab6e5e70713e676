//! Database initialization and cleanup utilities
//!
//! Schema creation runs the embedded migrations. Seed rows are written in the
//! same transaction that records them in `seed_history`, under an advisory
//! lock, so they are applied exactly once per database even when several
//! instances start together or an earlier attempt failed.

use sqlx::migrate::Migrator;
use sqlx::{PgConnection, PgPool};
use std::fs;
use std::path::Path;
use urf_core_db::{DbResult, ProductModel, Versioned};

/// Migrations under `./migrations`, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Advisory lock key serializing seed attempts across instances
const SEED_LOCK_KEY: i64 = 0x7572_665f_7365_6564;

/// Initialize the database schema and apply seed data on first creation
///
/// # Returns
/// * `Ok(true)` - The seed was applied by this call
/// * `Ok(false)` - The seed had already been applied; nothing was written
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use urf_core_db::Deployment;
/// use urf_core_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool, &Deployment::Sample.seed_products()?).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool, seed: &[ProductModel]) -> DbResult<bool> {
    MIGRATOR.run(pool).await.map_err(sqlx::Error::from)?;

    let mut transaction = pool.begin().await?;
    sqlx::query(r#"SELECT pg_advisory_xact_lock($1)"#)
        .bind(SEED_LOCK_KEY)
        .execute(&mut *transaction)
        .await?;

    let already_seeded: bool =
        sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM seed_history)"#)
            .fetch_one(&mut *transaction)
            .await?;
    if already_seeded {
        tracing::debug!("Seed already applied, skipping");
        return Ok(false);
    }

    insert_seed(&mut *transaction, seed).await?;
    sqlx::query(r#"INSERT INTO seed_history (id) VALUES (1)"#)
        .execute(&mut *transaction)
        .await?;
    transaction.commit().await?;

    tracing::info!(rows = seed.len(), "Seed applied");
    Ok(true)
}

/// Insert seed rows with their explicit ids and move the id sequence past them
async fn insert_seed(conn: &mut PgConnection, seed: &[ProductModel]) -> DbResult<()> {
    if seed.is_empty() {
        return Ok(());
    }

    for item in seed {
        let mut item = item.clone();
        item.rehash()?;
        sqlx::query(
            r#"
            INSERT INTO product (id, product_name, unit_price, hash)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id)
        .bind(item.name.as_str())
        .bind(item.unit_price)
        .bind(item.hash)
        .execute(&mut *conn)
        .await?;
    }

    sqlx::query(
        r#"SELECT setval(pg_get_serial_sequence('product', 'id'), (SELECT MAX(id) FROM product))"#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Drop the schema by running the files under `cleanup/`, highest number first
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use urf_core_postgres::repository::db_init::cleanup_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// cleanup_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");

    let mut scripts: Vec<_> = fs::read_dir(&cleanup_dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();
    scripts.sort_by(|a, b| b.cmp(a));

    for script in scripts {
        let sql = fs::read_to_string(&script).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::database_url;
    use rust_decimal::Decimal;
    use serial_test::serial;
    use sqlx::postgres::PgPoolOptions;
    use urf_core_db::Deployment;

    async fn product_rows(pool: &PgPool) -> Result<Vec<(i32, String)>, sqlx::Error> {
        sqlx::query_as("SELECT id, product_name FROM product ORDER BY id")
            .fetch_all(pool)
            .await
    }

    fn seeded_rows() -> Vec<(i32, String)> {
        vec![
            (1, "Chai".to_string()),
            (2, "Chang".to_string()),
            (3, "Cappuccino".to_string()),
        ]
    }

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_init_and_cleanup() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = PgPool::connect(&database_url()).await?;
        let seed = Deployment::Sample.seed_products()?;

        cleanup_database(&pool).await?;

        // Fresh schema gets the seed, a second run leaves it alone
        assert!(init_database(&pool, &seed).await?);
        assert!(!init_database(&pool, &seed).await?);
        assert_eq!(product_rows(&pool).await?, seeded_rows());

        let next_id: i32 = sqlx::query_scalar(
            "SELECT nextval(pg_get_serial_sequence('product', 'id'))::int4",
        )
        .fetch_one(&pool)
        .await?;
        assert_eq!(next_id, 4);

        cleanup_database(&pool).await?;
        assert!(init_database(&pool, &seed).await?);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_failed_seed_is_retried() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = PgPool::connect(&database_url()).await?;
        cleanup_database(&pool).await?;

        let duplicate_ids = vec![
            ProductModel::with_id(1, "Chai", Decimal::from(1))?,
            ProductModel::with_id(1, "Chai again", Decimal::from(1))?,
        ];
        assert!(init_database(&pool, &duplicate_ids).await.is_err());
        assert!(product_rows(&pool).await?.is_empty());

        let seed = Deployment::Sample.seed_products()?;
        assert!(init_database(&pool, &seed).await?);
        assert_eq!(product_rows(&pool).await?, seeded_rows());

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_concurrent_init_seeds_once() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect(&database_url())
            .await?;
        cleanup_database(&pool).await?;

        let seed = Deployment::Sample.seed_products()?;
        let (first, second) = tokio::join!(
            init_database(&pool, &seed),
            init_database(&pool, &seed)
        );
        let (first, second) = (first?, second?);

        assert!(first ^ second);
        assert_eq!(product_rows(&pool).await?, seeded_rows());

        Ok(())
    }
}
