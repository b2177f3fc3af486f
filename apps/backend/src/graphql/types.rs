//! Externally visible GraphQL types.

use async_graphql::{InputObject, SimpleObject, Union, ID};

use crate::adapters::pets_sea::PetPatch;
use crate::entities::pets;

// Fixed user-facing response texts.
pub const MSG_PET_EXISTS: &str = "Pet de mesmo nome já inserido na base";
pub const MSG_PET_NOT_FOUND: &str = "Não foi possível encontrar o pet";
pub const MSG_PET_REMOVED: &str = "Pet removido com sucesso";

/// A pet record as exposed to clients.
#[derive(SimpleObject, Debug, Clone)]
pub struct Pet {
    pub id: ID,
    pub name: String,
    pub birthday: String,
    pub domain: String,
    pub gender: String,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub microchip: Option<i32>,
    pub photo: Option<String>,
}

impl Pet {
    /// Marshal a stored row into its externally facing representation.
    pub fn marshal(model: pets::Model) -> Self {
        Self {
            id: ID(model.id.to_string()),
            name: model.name,
            birthday: model.birthday,
            domain: model.domain,
            gender: model.gender,
            breed: model.breed,
            weight: model.weight,
            microchip: model.microchip,
            photo: model.photo,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct PetExists {
    pub message: String,
}

impl Default for PetExists {
    fn default() -> Self {
        Self {
            message: MSG_PET_EXISTS.to_string(),
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct PetNotFound {
    pub message: String,
}

impl Default for PetNotFound {
    fn default() -> Self {
        Self {
            message: MSG_PET_NOT_FOUND.to_string(),
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct PetRemoveMessage {
    pub message: String,
}

impl Default for PetRemoveMessage {
    fn default() -> Self {
        Self {
            message: MSG_PET_REMOVED.to_string(),
        }
    }
}

/// Discriminated result of the write operations; clients must branch on the
/// returned variant rather than assume success.
#[derive(Union, Debug, Clone)]
pub enum PetResponse {
    Pet(Pet),
    Exists(PetExists),
    NotFound(PetNotFound),
    Removed(PetRemoveMessage),
}

/// Field-or-omit edit input; omitted fields leave stored values unchanged.
#[derive(InputObject, Debug, Clone, Default)]
pub struct PetDataInput {
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub domain: Option<String>,
    pub gender: Option<String>,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub microchip: Option<i32>,
    pub photo: Option<String>,
}

impl From<PetDataInput> for PetPatch {
    fn from(input: PetDataInput) -> Self {
        Self {
            name: input.name,
            birthday: input.birthday,
            domain: input.domain,
            gender: input.gender,
            breed: input.breed,
            weight: input.weight,
            microchip: input.microchip,
            photo: input.photo,
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct PetQueryInput {
    pub termo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Pet, PetDataInput};
    use crate::adapters::pets_sea::PetPatch;
    use crate::entities::pets;

    fn sample_row() -> pets::Model {
        pets::Model {
            id: 7,
            name: "Rex".to_string(),
            birthday: "2020-01-01".to_string(),
            domain: "dog".to_string(),
            gender: "M".to_string(),
            breed: Some("Lab".to_string()),
            weight: Some(30.0),
            microchip: Some(123),
            photo: Some("x.jpg".to_string()),
        }
    }

    #[test]
    fn marshal_stringifies_the_id() {
        let pet = Pet::marshal(sample_row());
        assert_eq!(pet.id.as_str(), "7");
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.microchip, Some(123));
    }

    #[test]
    fn empty_input_maps_to_empty_patch() {
        let patch = PetPatch::from(PetDataInput::default());
        assert!(patch.is_empty());
    }

    #[test]
    fn partial_input_keeps_only_supplied_fields() {
        let input = PetDataInput {
            weight: Some(9.5),
            ..PetDataInput::default()
        };
        let patch = PetPatch::from(input);
        assert_eq!(patch.weight, Some(9.5));
        assert!(patch.name.is_none());
        assert!(patch.microchip.is_none());
    }
}
