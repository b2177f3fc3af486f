#![allow(dead_code)]

// tests/common/mod.rs
use pet_service::adapters::pets_sea::PetCreate;
use pet_service::config::db::DbKind;
use pet_service::infra::state::build_state;
use pet_service::state::app_state::AppState;
use tracing_subscriber::EnvFilter;

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Build an AppState backed by a fresh in-memory database with the schema
/// applied. Every caller gets its own database, so tests are isolated
/// without any cross-test serialization.
pub async fn test_state() -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build test state with in-memory DB")
}

/// A valid creation DTO with the given name and microchip.
pub fn pet_create(name: &str, microchip: i32) -> PetCreate {
    PetCreate {
        name: name.to_string(),
        birthday: "2020-01-01".to_string(),
        domain: "dog".to_string(),
        gender: "M".to_string(),
        breed: "SRD".to_string(),
        weight: 10.0,
        microchip,
        photo: "photo.jpg".to_string(),
    }
}
