use sea_orm_migration::{prelude::*, schema::*};

static IDX_UNIVERSIDAD_PAIS: &str = "idx-universidad-pais";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Universidad::Table)
                    .if_not_exists()
                    .col(pk_auto(Universidad::Id))
                    .col(string(Universidad::Nombre))
                    .col(integer_null(Universidad::Pais))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_UNIVERSIDAD_PAIS)
                    .table(Universidad::Table)
                    .col(Universidad::Pais)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_UNIVERSIDAD_PAIS)
                    .table(Universidad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Universidad::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Universidad {
    Table,
    Id,
    Nombre,
    Pais,
}
