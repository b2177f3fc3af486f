//! SeaORM adapter for the pet table.

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::pets;

pub mod dto;

pub use dto::{PetCreate, PetPatch};

// Adapter functions return DbErr; the services layer maps to AppError.

pub async fn find_all_ordered<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<pets::Model>, sea_orm::DbErr> {
    pets::Entity::find()
        .order_by_asc(pets::Column::Name)
        .all(conn)
        .await
}

/// Case-insensitive substring match on name, ordered by name.
/// `lower()` keeps the predicate portable between Postgres and SQLite.
pub async fn find_by_name_contains<C: ConnectionTrait>(
    conn: &C,
    term: &str,
) -> Result<Vec<pets::Model>, sea_orm::DbErr> {
    let pattern = format!("%{}%", term.to_lowercase());
    pets::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((
                pets::Entity,
                pets::Column::Name,
            ))))
            .like(pattern),
        )
        .order_by_asc(pets::Column::Name)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<pets::Model>, sea_orm::DbErr> {
    pets::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_microchip<C: ConnectionTrait>(
    conn: &C,
    microchip: i32,
) -> Result<Option<pets::Model>, sea_orm::DbErr> {
    pets::Entity::find()
        .filter(pets::Column::Microchip.eq(microchip))
        .one(conn)
        .await
}

pub async fn insert_pet<C: ConnectionTrait>(
    conn: &C,
    dto: PetCreate,
) -> Result<pets::Model, sea_orm::DbErr> {
    let pet = pets::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        birthday: Set(dto.birthday),
        domain: Set(dto.domain),
        gender: Set(dto.gender),
        breed: Set(Some(dto.breed)),
        weight: Set(Some(dto.weight)),
        microchip: Set(Some(dto.microchip)),
        photo: Set(Some(dto.photo)),
    };

    pet.insert(conn).await
}

/// Apply the supplied fields of the patch to the row. The caller is expected
/// to skip the call entirely for an empty patch.
pub async fn update_pet<C: ConnectionTrait>(
    conn: &C,
    pet: pets::Model,
    patch: PetPatch,
) -> Result<pets::Model, sea_orm::DbErr> {
    let mut pet: pets::ActiveModel = pet.into();

    if let Some(name) = patch.name {
        pet.name = Set(name);
    }
    if let Some(birthday) = patch.birthday {
        pet.birthday = Set(birthday);
    }
    if let Some(domain) = patch.domain {
        pet.domain = Set(domain);
    }
    if let Some(gender) = patch.gender {
        pet.gender = Set(gender);
    }
    if let Some(breed) = patch.breed {
        pet.breed = Set(Some(breed));
    }
    if let Some(weight) = patch.weight {
        pet.weight = Set(Some(weight));
    }
    if let Some(microchip) = patch.microchip {
        pet.microchip = Set(Some(microchip));
    }
    if let Some(photo) = patch.photo {
        pet.photo = Set(Some(photo));
    }

    pet.update(conn).await
}

pub async fn delete_pet<C: ConnectionTrait>(
    conn: &C,
    pet: pets::Model,
) -> Result<(), sea_orm::DbErr> {
    pet.delete(conn).await.map(|_| ())
}
