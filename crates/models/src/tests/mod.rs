

use std::path::PathBuf;

use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Scratch SQLite file that is removed when dropped.
pub struct TestDb {
    pub db: DatabaseConnection,
    path: PathBuf,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Fresh, migrated database in its own temp file
pub async fn setup_test_db() -> Result<TestDb> {
    let mut path = std::env::temp_dir();
    path.push(format!("refill-models-{}.sqlite", Uuid::new_v4()));
    let cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", path.display()));
    let db = crate::db::connect_and_migrate(&cfg).await?;
    Ok(TestDb { db, path })
}
