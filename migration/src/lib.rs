pub use sea_orm_migration::prelude::*;

mod m20160117_000001_continente;
mod m20160117_000002_pais;
mod m20160117_000003_ciudad;
mod m20160117_000004_universidad;
mod m20160117_000005_campus_sede;
mod m20160118_000001_beneficio;
mod m20160118_000002_pre_uach;
mod m20160118_000003_asistente;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20160117_000001_continente::Migration),
            Box::new(m20160117_000002_pais::Migration),
            Box::new(m20160117_000003_ciudad::Migration),
            Box::new(m20160117_000004_universidad::Migration),
            Box::new(m20160117_000005_campus_sede::Migration),
            Box::new(m20160118_000001_beneficio::Migration),
            Box::new(m20160118_000002_pre_uach::Migration),
            Box::new(m20160118_000003_asistente::Migration),
        ]
    }
}
