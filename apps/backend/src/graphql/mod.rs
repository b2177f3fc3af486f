//! GraphQL schema: one query root, one mutation root, no subscriptions.

use async_graphql::{EmptySubscription, Schema};

use crate::state::app_state::AppState;

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type PetSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> PetSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
