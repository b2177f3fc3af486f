use async_graphql::{Context, Object, Result};

use crate::db::txn::with_txn;
use crate::graphql::types::{Pet, PetQueryInput};
use crate::services::pets;
use crate::state::app_state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every pet on record, ordered by name.
    async fn all_pets(&self, ctx: &Context<'_>) -> Result<Vec<Pet>> {
        let state = ctx.data::<AppState>()?;

        let rows = with_txn(state, |txn| {
            Box::pin(async move { pets::list_all(txn).await })
        })
        .await?;

        Ok(rows.into_iter().map(Pet::marshal).collect())
    }

    /// Pets whose name contains the search term, case-insensitively.
    /// Without a term this behaves exactly like all_pets.
    async fn search_pet(
        &self,
        ctx: &Context<'_>,
        query_input: Option<PetQueryInput>,
    ) -> Result<Vec<Pet>> {
        let state = ctx.data::<AppState>()?;
        let term = query_input.and_then(|input| input.termo);

        let rows = with_txn(state, |txn| {
            Box::pin(async move { pets::search(txn, term.as_deref()).await })
        })
        .await?;

        Ok(rows.into_iter().map(Pet::marshal).collect())
    }
}
