//! Registration store integration tests
//!
//! Run against a real embedded database in a temp directory.

use shared::models::{Gender, RegistrationCreate, UserType};
use signup_server::db::DbService;
use signup_server::db::repository::{RegistrationRepository, RepoError};

fn payload(email: &str) -> RegistrationCreate {
    RegistrationCreate {
        user_type: UserType::Volunteer,
        country_of_residence: "United Arab Emirates".into(),
        emirates_id: None,
        emirates_id_expiry: None,
        first_name_english: "John".into(),
        last_name_english: "Doe".into(),
        first_name_arabic: None,
        last_name_arabic: None,
        email: email.into(),
        mobile: "0501234567".into(),
        gender: Gender::Male,
        date_of_birth: "1990-01-01".into(),
        country: "United Arab Emirates".into(),
        state: None,
        city: None,
        address: None,
        person_of_determination: false,
        how_did_you_hear: None,
        vat: None,
    }
}

async fn open_repo(tmp: &tempfile::TempDir) -> RegistrationRepository {
    let service = DbService::new(tmp.path()).await.unwrap();
    RegistrationRepository::new(service.db)
}

#[tokio::test]
async fn test_create_returns_record_with_id_and_timestamp() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let before = shared::util::now_millis();
    let created = repo.create(payload("john@example.com")).await.unwrap();

    assert!(created.id.starts_with("registration:"));
    assert!(created.created_at >= before);
    assert_eq!(created.email, "john@example.com");
    assert_eq!(created.user_type, UserType::Volunteer);
    assert_eq!(created.gender, Gender::Male);
    assert!(!created.person_of_determination);
    assert!(created.emirates_id.is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected_without_second_record() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    repo.create(payload("john@example.com")).await.unwrap();

    let mut second = payload("john@example.com");
    second.first_name_english = "Jane".into();
    let err = repo.create(second).await.unwrap_err();

    match err {
        RepoError::Duplicate(msg) => assert_eq!(msg, "Email already registered"),
        other => panic!("expected Duplicate, got {other:?}"),
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].first_name_english, "John");
}

#[tokio::test]
async fn test_unique_index_blocks_direct_insert() {
    // Bypass the repository pre-check: the storage-level index alone must
    // refuse a second row with the same email.
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path()).await.unwrap();
    let db = service.db.clone();

    let mut content = serde_json::to_value(payload("dup@example.com")).unwrap();
    content["created_at"] = serde_json::json!(shared::util::now_millis());

    db.query("CREATE registration CONTENT $data RETURN NONE")
        .bind(("data", content.clone()))
        .await
        .unwrap()
        .check()
        .unwrap();

    let second = db
        .query("CREATE registration CONTENT $data RETURN NONE")
        .bind(("data", content))
        .await
        .unwrap()
        .check();
    assert!(second.is_err(), "unique email index must reject the insert");

    let repo = RegistrationRepository::new(db);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_all_newest_first() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    for email in ["first@example.com", "second@example.com", "third@example.com"] {
        repo.create(payload(email)).await.unwrap();
        // created_at has millisecond resolution; keep timestamps distinct
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].email, "third@example.com");
    assert_eq!(all[1].email, "second@example.com");
    assert_eq!(all[2].email, "first@example.com");
    assert!(all[0].created_at > all[1].created_at);
    assert!(all[1].created_at > all[2].created_at);
}

#[tokio::test]
async fn test_find_by_email() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());

    repo.create(payload("john@example.com")).await.unwrap();
    let found = repo.find_by_email("john@example.com").await.unwrap().unwrap();
    assert_eq!(found.email, "john@example.com");

    // Uniqueness is over the exact submitted string
    assert!(repo.find_by_email("JOHN@example.com").await.unwrap().is_none());
}
