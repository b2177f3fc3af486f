//! Pet query and mutation services.
//!
//! Read operations are side-effect-free and idempotent. Write operations
//! return outcome enums rather than errors for the expected domain cases;
//! only storage failures surface as `AppError`.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::adapters::pets_sea;
use crate::adapters::pets_sea::{PetCreate, PetPatch};
use crate::entities::pets;
use crate::error::AppError;

/// Outcome of `add`: the created row, or a microchip already registered.
#[derive(Debug, Clone, PartialEq)]
pub enum PetAdded {
    Created(pets::Model),
    DuplicateMicrochip,
}

/// Outcome of `edit`: the updated row, or no row for the given id.
#[derive(Debug, Clone, PartialEq)]
pub enum PetEdited {
    Updated(pets::Model),
    NotFound,
}

/// Outcome of `remove`.
#[derive(Debug, Clone, PartialEq)]
pub enum PetRemoved {
    Removed,
    NotFound,
}

/// Every pet on record, ordered by name ascending.
pub async fn list_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<pets::Model>, AppError> {
    Ok(pets_sea::find_all_ordered(conn).await?)
}

/// Pets whose name contains `term` case-insensitively, ordered by name.
/// Without a term this is `list_all`.
pub async fn search<C: ConnectionTrait>(
    conn: &C,
    term: Option<&str>,
) -> Result<Vec<pets::Model>, AppError> {
    match term {
        Some(term) => Ok(pets_sea::find_by_name_contains(conn, term).await?),
        None => Ok(pets_sea::find_all_ordered(conn).await?),
    }
}

/// Register a new pet unless its microchip is already on record.
pub async fn add<C: ConnectionTrait>(conn: &C, dto: PetCreate) -> Result<PetAdded, AppError> {
    if pets_sea::find_by_microchip(conn, dto.microchip)
        .await?
        .is_some()
    {
        info!(
            microchip = dto.microchip,
            "add rejected, microchip already registered"
        );
        return Ok(PetAdded::DuplicateMicrochip);
    }

    // The lookup above is a fast path only; the unique constraint is the
    // authority. A concurrent add that wins the race lands here as a
    // unique violation.
    match pets_sea::insert_pet(conn, dto).await {
        Ok(pet) => {
            info!(pet_id = pet.id, "pet created");
            Ok(PetAdded::Created(pet))
        }
        Err(err) => match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                Ok(PetAdded::DuplicateMicrochip)
            }
            _ => Err(err.into()),
        },
    }
}

/// Apply the supplied fields of `patch` to the pet with the given id.
/// Omitted fields keep their stored values.
pub async fn edit<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    patch: PetPatch,
) -> Result<PetEdited, AppError> {
    let pet = match pets_sea::find_by_id(conn, id).await? {
        Some(pet) => pet,
        None => return Ok(PetEdited::NotFound),
    };

    if patch.is_empty() {
        return Ok(PetEdited::Updated(pet));
    }

    let updated = pets_sea::update_pet(conn, pet, patch).await?;
    info!(pet_id = updated.id, "pet updated");
    Ok(PetEdited::Updated(updated))
}

/// Delete the pet with the given id.
pub async fn remove<C: ConnectionTrait>(conn: &C, id: i32) -> Result<PetRemoved, AppError> {
    let pet = match pets_sea::find_by_id(conn, id).await? {
        Some(pet) => pet,
        None => return Ok(PetRemoved::NotFound),
    };

    pets_sea::delete_pet(conn, pet).await?;
    info!(pet_id = id, "pet removed");
    Ok(PetRemoved::Removed)
}
