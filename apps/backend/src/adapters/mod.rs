pub mod pets_sea;
