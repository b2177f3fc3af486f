use async_graphql::{Context, Object, Result};

use crate::adapters::pets_sea::{PetCreate, PetPatch};
use crate::db::txn::with_txn;
use crate::graphql::types::{
    Pet, PetDataInput, PetExists, PetNotFound, PetRemoveMessage, PetResponse,
};
use crate::services::pets;
use crate::services::pets::{PetAdded, PetEdited, PetRemoved};
use crate::state::app_state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register a pet. Returns PetExists when the microchip is already on
    /// record, in which case nothing is created.
    #[allow(clippy::too_many_arguments)]
    async fn add_pet(
        &self,
        ctx: &Context<'_>,
        name: String,
        birthday: String,
        domain: String,
        gender: String,
        breed: String,
        weight: f64,
        microchip: i32,
        photo: String,
    ) -> Result<PetResponse> {
        let state = ctx.data::<AppState>()?;
        let dto = PetCreate {
            name,
            birthday,
            domain,
            gender,
            breed,
            weight,
            microchip,
            photo,
        };

        let added = with_txn(state, |txn| {
            Box::pin(async move { pets::add(txn, dto).await })
        })
        .await?;

        Ok(match added {
            PetAdded::Created(model) => PetResponse::Pet(Pet::marshal(model)),
            PetAdded::DuplicateMicrochip => PetResponse::Exists(PetExists::default()),
        })
    }

    /// Apply the non-null fields of `edits` to the pet with the given id.
    async fn edit_pet(&self, ctx: &Context<'_>, id: i32, edits: PetDataInput) -> Result<PetResponse> {
        let state = ctx.data::<AppState>()?;
        let patch = PetPatch::from(edits);

        let edited = with_txn(state, |txn| {
            Box::pin(async move { pets::edit(txn, id, patch).await })
        })
        .await?;

        Ok(match edited {
            PetEdited::Updated(model) => PetResponse::Pet(Pet::marshal(model)),
            PetEdited::NotFound => PetResponse::NotFound(PetNotFound::default()),
        })
    }

    /// Delete the pet with the given id.
    async fn remove_pet(&self, ctx: &Context<'_>, id: i32) -> Result<PetResponse> {
        let state = ctx.data::<AppState>()?;

        let removed = with_txn(state, |txn| {
            Box::pin(async move { pets::remove(txn, id).await })
        })
        .await?;

        Ok(match removed {
            PetRemoved::Removed => PetResponse::Removed(PetRemoveMessage::default()),
            PetRemoved::NotFound => PetResponse::NotFound(PetNotFound::default()),
        })
    }
}
