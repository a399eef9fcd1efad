//! Registration Repository

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{Registration, RegistrationCreate};

// Explicit projection: the <string> cast turns record ids into plain
// "registration:key" strings.
const REGISTRATION_SELECT: &str = "SELECT <string>id AS id, user_type, country_of_residence, emirates_id, emirates_id_expiry, first_name_english, last_name_english, first_name_arabic, last_name_arabic, email, mobile, gender, date_of_birth, country, state, city, address, person_of_determination, how_did_you_hear, vat, created_at FROM registration";

/// Insert payload: the create payload plus the system-assigned timestamp
#[derive(Serialize)]
struct NewRegistration {
    #[serde(flatten)]
    registration: RegistrationCreate,
    created_at: i64,
}

#[derive(Clone)]
pub struct RegistrationRepository {
    base: BaseRepository,
}

impl RegistrationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a registration by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Registration>> {
        let sql = format!("{REGISTRATION_SELECT} WHERE email = $email LIMIT 1");
        let mut result = self
            .base
            .db()
            .query(sql)
            .bind(("email", email.to_string()))
            .await?;
        let rows: Vec<Registration> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// All registrations, most recent first
    pub async fn find_all(&self) -> RepoResult<Vec<Registration>> {
        let sql = format!("{REGISTRATION_SELECT} ORDER BY created_at DESC");
        let mut result = self.base.db().query(sql).await?;
        let rows: Vec<Registration> = result.take(0)?;
        Ok(rows)
    }

    /// Create a new registration
    ///
    /// The email pre-check gives a clean error for the common case; the
    /// unique index on email is the atomic guard, so a concurrent insert
    /// landing between the check and the CREATE still fails instead of
    /// producing a duplicate row.
    pub async fn create(&self, data: RegistrationCreate) -> RepoResult<Registration> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate("Email already registered".to_string()));
        }

        let email = data.email.clone();
        let response = self
            .base
            .db()
            .query("CREATE registration CONTENT $data RETURN NONE")
            .bind((
                "data",
                NewRegistration {
                    registration: data,
                    created_at: shared::util::now_millis(),
                },
            ))
            .await?;

        response.check().map_err(|e| {
            let msg = e.to_string();
            if msg.contains("registration_email") {
                RepoError::Duplicate("Email already registered".to_string())
            } else {
                RepoError::Database(msg)
            }
        })?;

        self.find_by_email(&email)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create registration".to_string()))
    }
}
