use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20160118_000001_beneficio::Beneficio, m20160118_000002_pre_uach::PreUach};

static FK_ASISTENTE_BENEFICIO: &str = "asistente_beneficio_foreign";
static FK_ASISTENTE_PRE_UACH: &str = "asistente_pre_uach_foreign";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Constraints are declared inline so the table can also be created on SQLite,
        // which has no `ALTER TABLE ... ADD CONSTRAINT`
        manager
            .create_table(
                Table::create()
                    .table(Asistente::Table)
                    .if_not_exists()
                    .col(pk_auto(Asistente::Id))
                    .col(integer(Asistente::Beneficio))
                    .col(integer(Asistente::Postulante))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ASISTENTE_BENEFICIO)
                            .from(Asistente::Table, Asistente::Beneficio)
                            .to(Beneficio::Table, Beneficio::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ASISTENTE_PRE_UACH)
                            .from(Asistente::Table, Asistente::Postulante)
                            .to(PreUach::Table, PreUach::Postulante)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Asistente::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Asistente {
    Table,
    Id,
    Beneficio,
    Postulante,
}
