use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enum for the pet table -----
#[derive(Iden)]
enum Pet {
    Table,
    Id,
    Name,
    Birthday,
    Domain,
    Gender,
    Breed,
    Weight,
    Microchip,
    Photo,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pet::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Pet::Birthday).string_len(10).not_null())
                    .col(ColumnDef::new(Pet::Domain).string_len(10).not_null())
                    .col(ColumnDef::new(Pet::Gender).string_len(1).not_null())
                    .col(ColumnDef::new(Pet::Breed).string_len(30))
                    .col(ColumnDef::new(Pet::Weight).double())
                    .col(ColumnDef::new(Pet::Microchip).integer())
                    .col(ColumnDef::new(Pet::Photo).text())
                    .to_owned(),
            )
            .await?;

        // Uniqueness backstop for microchip; NULLs are exempt on both backends.
        manager
            .create_index(
                Index::create()
                    .name("pet_unique_id")
                    .table(Pet::Table)
                    .col(Pet::Microchip)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}
