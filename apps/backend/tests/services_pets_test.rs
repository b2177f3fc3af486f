mod common;

use pet_service::adapters::pets_sea::{PetCreate, PetPatch};
use pet_service::db::txn::with_txn;
use pet_service::entities::pets;
use pet_service::error::AppError;
use pet_service::services::pets as pet_services;
use pet_service::services::pets::{PetAdded, PetEdited, PetRemoved};
use pet_service::state::app_state::AppState;

/// Add a pet through a transaction scope, expecting creation to succeed.
async fn add_created(state: &AppState, dto: PetCreate) -> pets::Model {
    let added = with_txn(state, |txn| {
        Box::pin(async move { pet_services::add(txn, dto).await })
    })
    .await
    .expect("add should not fail");

    match added {
        PetAdded::Created(model) => model,
        PetAdded::DuplicateMicrochip => panic!("unexpected duplicate microchip"),
    }
}

/// Test: list_all returns every record ordered by name ascending
#[tokio::test]
async fn test_list_all_orders_by_name() -> Result<(), AppError> {
    let state = common::test_state().await;

    add_created(&state, common::pet_create("thor", 1)).await;
    add_created(&state, common::pet_create("bela", 2)).await;
    add_created(&state, common::pet_create("rex", 3)).await;

    let names: Vec<String> = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::list_all(txn).await })
    })
    .await?
    .into_iter()
    .map(|pet| pet.name)
    .collect();

    assert_eq!(names, vec!["bela", "rex", "thor"]);
    Ok(())
}

/// Test: search matches case-insensitive substrings of name, ordered by name
#[tokio::test]
async fn test_search_matches_case_insensitive_substring() -> Result<(), AppError> {
    let state = common::test_state().await;

    add_created(&state, common::pet_create("Rex", 1)).await;
    add_created(&state, common::pet_create("Trexie", 2)).await;
    add_created(&state, common::pet_create("Bela", 3)).await;

    let names: Vec<String> = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::search(txn, Some("rex")).await })
    })
    .await?
    .into_iter()
    .map(|pet| pet.name)
    .collect();
    assert_eq!(names, vec!["Rex", "Trexie"]);

    let upper: Vec<String> = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::search(txn, Some("REX")).await })
    })
    .await?
    .into_iter()
    .map(|pet| pet.name)
    .collect();
    assert_eq!(upper, vec!["Rex", "Trexie"]);

    let misses = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::search(txn, Some("zz")).await })
    })
    .await?;
    assert!(misses.is_empty());

    Ok(())
}

/// Test: search without a term behaves like list_all
#[tokio::test]
async fn test_search_without_term_lists_everything() -> Result<(), AppError> {
    let state = common::test_state().await;

    add_created(&state, common::pet_create("Rex", 1)).await;
    add_created(&state, common::pet_create("Bela", 2)).await;

    let all = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::search(txn, None).await })
    })
    .await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Test: add assigns a fresh id per record
#[tokio::test]
async fn test_add_assigns_fresh_ids() -> Result<(), AppError> {
    let state = common::test_state().await;

    let first = add_created(&state, common::pet_create("Rex", 100)).await;
    let second = add_created(&state, common::pet_create("Bela", 200)).await;

    assert!(first.id > 0, "id should be assigned by the database");
    assert_ne!(first.id, second.id);
    assert_eq!(first.microchip, Some(100));
    Ok(())
}

/// Test: add with an already registered microchip returns the duplicate
/// outcome and inserts nothing
#[tokio::test]
async fn test_add_duplicate_microchip_inserts_nothing() -> Result<(), AppError> {
    let state = common::test_state().await;

    add_created(&state, common::pet_create("Rex", 123)).await;

    let dto = common::pet_create("Impostor", 123);
    let added = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::add(txn, dto).await })
    })
    .await?;
    assert_eq!(added, PetAdded::DuplicateMicrochip);

    let all = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::list_all(txn).await })
    })
    .await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Rex");
    Ok(())
}

/// Test: edit changes only the supplied fields
#[tokio::test]
async fn test_edit_changes_only_supplied_fields() -> Result<(), AppError> {
    let state = common::test_state().await;

    let created = add_created(&state, common::pet_create("Rex", 123)).await;
    let id = created.id;

    let patch = PetPatch {
        weight: Some(9.5),
        ..PetPatch::default()
    };
    let edited = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::edit(txn, id, patch).await })
    })
    .await?;

    let updated = match edited {
        PetEdited::Updated(model) => model,
        PetEdited::NotFound => panic!("pet should exist"),
    };

    assert_eq!(updated.weight, Some(9.5));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.birthday, created.birthday);
    assert_eq!(updated.domain, created.domain);
    assert_eq!(updated.gender, created.gender);
    assert_eq!(updated.breed, created.breed);
    assert_eq!(updated.microchip, created.microchip);
    assert_eq!(updated.photo, created.photo);
    Ok(())
}

/// Test: edit with an empty patch leaves the record unchanged
#[tokio::test]
async fn test_edit_empty_patch_is_a_noop() -> Result<(), AppError> {
    let state = common::test_state().await;

    let created = add_created(&state, common::pet_create("Rex", 123)).await;
    let id = created.id;

    let edited = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::edit(txn, id, PetPatch::default()).await })
    })
    .await?;

    assert_eq!(edited, PetEdited::Updated(created));
    Ok(())
}

/// Test: edit on a nonexistent id returns NotFound and mutates nothing
#[tokio::test]
async fn test_edit_unknown_id_not_found() -> Result<(), AppError> {
    let state = common::test_state().await;

    let created = add_created(&state, common::pet_create("Rex", 123)).await;

    let patch = PetPatch {
        weight: Some(99.0),
        ..PetPatch::default()
    };
    let edited = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::edit(txn, 9999, patch).await })
    })
    .await?;
    assert_eq!(edited, PetEdited::NotFound);

    let all = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::list_all(txn).await })
    })
    .await?;
    assert_eq!(all, vec![created]);
    Ok(())
}

/// Test: remove deletes the row; a second remove reports NotFound
#[tokio::test]
async fn test_remove_deletes_row() -> Result<(), AppError> {
    let state = common::test_state().await;

    let created = add_created(&state, common::pet_create("Rex", 123)).await;
    let id = created.id;

    let removed = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::remove(txn, id).await })
    })
    .await?;
    assert_eq!(removed, PetRemoved::Removed);

    let all = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::list_all(txn).await })
    })
    .await?;
    assert!(all.is_empty());

    let again = with_txn(&state, |txn| {
        Box::pin(async move { pet_services::remove(txn, id).await })
    })
    .await?;
    assert_eq!(again, PetRemoved::NotFound);
    Ok(())
}
