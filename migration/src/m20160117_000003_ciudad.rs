use sea_orm_migration::{prelude::*, schema::*};

static IDX_CIUDAD_PAIS: &str = "idx-ciudad-pais";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `pais` is indexed but not constrained, seeded cities point at arbitrary country IDs
        manager
            .create_table(
                Table::create()
                    .table(Ciudad::Table)
                    .if_not_exists()
                    .col(pk_auto(Ciudad::Id))
                    .col(string(Ciudad::Nombre))
                    .col(integer(Ciudad::Pais))
                    .col(string(Ciudad::CodigoPostal))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CIUDAD_PAIS)
                    .table(Ciudad::Table)
                    .col(Ciudad::Pais)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CIUDAD_PAIS)
                    .table(Ciudad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ciudad::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ciudad {
    Table,
    Id,
    Nombre,
    Pais,
    CodigoPostal,
}
