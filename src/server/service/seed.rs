//! Synthetic city data for development databases.

use rand::{seq::IndexedRandom, Rng};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::geografia::ciudad::{CiudadRepository, NewCiudad},
    error::Error,
};

/// Number of cities inserted when seeding is enabled at startup
pub const CIUDAD_SEED_COUNT: usize = 500;
/// Country IDs are drawn uniformly from `1..=MAX_PAIS_ID`
pub const MAX_PAIS_ID: i32 = 200;

const INSERT_BATCH_SIZE: usize = 100;

const PREFIJOS: &[&str] = &[
    "San", "Santa", "Puerto", "Villa", "Nueva", "Los", "Las", "El", "La", "Monte",
];
const RAICES: &[&str] = &[
    "Alegre", "Aurora", "Bonita", "Carmen", "Cruz", "Esperanza", "Fresia", "Hermosa",
    "Jardines", "Lagos", "Llanos", "Mar", "Montt", "Olivos", "Pinos", "Robles", "Rosario",
    "Sauces", "Valle", "Vientos",
];

/// Generates `count` random cities.
///
/// Names combine a prefix and a root, `pais` is uniform in `1..=MAX_PAIS_ID` and the
/// postal code always has seven digits.
pub fn generate_ciudades<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<NewCiudad> {
    (0..count)
        .map(|_| {
            let prefijo = PREFIJOS.choose(rng).copied().unwrap_or_default();
            let raiz = RAICES.choose(rng).copied().unwrap_or_default();

            NewCiudad {
                nombre: format!("{} {}", prefijo, raiz),
                pais: rng.random_range(1..=MAX_PAIS_ID),
                codigo_postal: rng.random_range(1_000_000..=9_999_999).to_string(),
            }
        })
        .collect()
}

pub struct CiudadSeeder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CiudadSeeder<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts `count` random cities in a single transaction.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of inserted cities
    /// - `Err(Error::DbErr)` - Insert failed, nothing was written
    pub async fn seed(&self, count: usize) -> Result<usize, Error> {
        // ThreadRng is not Send, so it must not live across an await
        let ciudades = generate_ciudades(&mut rand::rng(), count);

        let txn = self.db.begin().await?;
        let repo = CiudadRepository::new(&txn);

        let mut inserted = 0;
        for batch in ciudades.chunks(INSERT_BATCH_SIZE) {
            inserted += repo.create_many(batch.to_vec()).await?.len();
        }

        txn.commit().await?;

        tracing::info!("Seeded {} ciudades", inserted);

        Ok(inserted)
    }
}
