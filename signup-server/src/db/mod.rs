//! Database Module
//!
//! Handles the embedded SurrealDB instance and schema definition

pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::core::{Result, ServerError};

/// Registration table schema.
///
/// SCHEMAFULL with a unique index on email: a duplicate insert fails
/// atomically at the storage layer, so two racing creates with the same
/// email cannot both land. The created_at index backs the newest-first
/// list query.
const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS registration SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS user_type ON registration TYPE string ASSERT $value IN ['volunteer', 'vendor', 'corporate'];
    DEFINE FIELD IF NOT EXISTS country_of_residence ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS emirates_id ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS emirates_id_expiry ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS first_name_english ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS last_name_english ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS first_name_arabic ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS last_name_arabic ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS email ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS mobile ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS gender ON registration TYPE string ASSERT $value IN ['male', 'female', 'other'];
    DEFINE FIELD IF NOT EXISTS date_of_birth ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS country ON registration TYPE string;
    DEFINE FIELD IF NOT EXISTS state ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS city ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS address ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS person_of_determination ON registration TYPE bool DEFAULT false;
    DEFINE FIELD IF NOT EXISTS how_did_you_hear ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS vat ON registration TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS created_at ON registration TYPE int;
    DEFINE INDEX IF NOT EXISTS registration_email ON registration FIELDS email UNIQUE;
    DEFINE INDEX IF NOT EXISTS registration_created_at ON registration FIELDS created_at;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the database at `path` and apply the schema
    pub async fn new(path: &Path) -> Result<Self> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        db.use_ns("signup")
            .use_db("signup")
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %path.display(), "Database connection established (SurrealDB/RocksDB)");

        db.query(SCHEMA)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to define schema: {e}")))?
            .check()
            .map_err(|e| ServerError::Database(format!("Failed to define schema: {e}")))?;
        tracing::info!("Database schema defined");

        Ok(Self { db })
    }
}
