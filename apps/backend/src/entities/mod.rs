pub mod pets;

pub use pets::Entity as Pets;
pub use pets::Model as Pet;
