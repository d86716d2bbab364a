#![cfg(test)]
use std::path::PathBuf;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Migrated scratch database; its file is removed on drop.
pub struct TestDb {
    pub db: DatabaseConnection,
    path: PathBuf,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub async fn get_db() -> Result<TestDb, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("refill-service-{}.sqlite", Uuid::new_v4()));
    let cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(TestDb { db, path })
}
