use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20160117_000003_ciudad::Ciudad, m20160117_000004_universidad::Universidad};

static IDX_CAMPUS_SEDE_UNIVERSIDAD: &str = "idx-campus_sede-universidad";
static IDX_CAMPUS_SEDE_CIUDAD: &str = "idx-campus_sede-ciudad";
static FK_CAMPUS_SEDE_UNIVERSIDAD: &str = "fk-campus_sede-universidad";
static FK_CAMPUS_SEDE_CIUDAD: &str = "fk-campus_sede-ciudad";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampusSede::Table)
                    .if_not_exists()
                    .col(pk_auto(CampusSede::Id))
                    .col(string(CampusSede::Nombre))
                    .col(string_null(CampusSede::Telefono))
                    .col(string_null(CampusSede::Fax))
                    .col(string_null(CampusSede::SitioWeb))
                    .col(integer(CampusSede::Universidad))
                    .col(integer(CampusSede::Ciudad))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CAMPUS_SEDE_UNIVERSIDAD)
                            .from(CampusSede::Table, CampusSede::Universidad)
                            .to(Universidad::Table, Universidad::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CAMPUS_SEDE_CIUDAD)
                            .from(CampusSede::Table, CampusSede::Ciudad)
                            .to(Ciudad::Table, Ciudad::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAMPUS_SEDE_UNIVERSIDAD)
                    .table(CampusSede::Table)
                    .col(CampusSede::Universidad)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAMPUS_SEDE_CIUDAD)
                    .table(CampusSede::Table)
                    .col(CampusSede::Ciudad)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAMPUS_SEDE_CIUDAD)
                    .table(CampusSede::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAMPUS_SEDE_UNIVERSIDAD)
                    .table(CampusSede::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CampusSede::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CampusSede {
    Table,
    Id,
    Nombre,
    Telefono,
    Fax,
    SitioWeb,
    Universidad,
    Ciudad,
}
