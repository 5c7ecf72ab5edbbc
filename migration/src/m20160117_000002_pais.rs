use sea_orm_migration::{prelude::*, schema::*};

use crate::m20160117_000001_continente::Continente;

static IDX_PAIS_CONTINENTE: &str = "idx-pais-continente";
static FK_PAIS_CONTINENTE: &str = "fk-pais-continente";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pais::Table)
                    .if_not_exists()
                    .col(pk_auto(Pais::Id))
                    .col(string(Pais::Nombre))
                    .col(integer(Pais::Continente))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PAIS_CONTINENTE)
                            .from(Pais::Table, Pais::Continente)
                            .to(Continente::Table, Continente::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAIS_CONTINENTE)
                    .table(Pais::Table)
                    .col(Pais::Continente)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PAIS_CONTINENTE)
                    .table(Pais::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pais::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pais {
    Table,
    Id,
    Nombre,
    Continente,
}
