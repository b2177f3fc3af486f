//! DTOs for the pets_sea adapter.

/// DTO for creating a new pet record. All fields are required at the API
/// boundary even where the column itself is nullable.
#[derive(Debug, Clone)]
pub struct PetCreate {
    pub name: String,
    pub birthday: String,
    pub domain: String,
    pub gender: String,
    pub breed: String,
    pub weight: f64,
    pub microchip: i32,
    pub photo: String,
}

/// Field-or-omit patch for an existing pet. `None` leaves the stored value
/// unchanged; there is no way to clear a field.
#[derive(Debug, Clone, Default)]
pub struct PetPatch {
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub domain: Option<String>,
    pub gender: Option<String>,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub microchip: Option<i32>,
    pub photo: Option<String>,
}

impl PetPatch {
    /// True when no field is supplied; applying such a patch is a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.birthday.is_none()
            && self.domain.is_none()
            && self.gender.is_none()
            && self.breed.is_none()
            && self.weight.is_none()
            && self.microchip.is_none()
            && self.photo.is_none()
    }
}
