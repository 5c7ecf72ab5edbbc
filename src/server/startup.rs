use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    service::seed::{CiudadSeeder, CIUDAD_SEED_COUNT},
};

/// Install the tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seed the `ciudad` table when enabled in the configuration
pub async fn seed_database(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.seed_ciudades {
        return Ok(());
    }

    CiudadSeeder::new(db).seed(CIUDAD_SEED_COUNT).await?;

    Ok(())
}

/// Bind the listener and serve the router until the process stops
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let app = router::routes().with_state(AppState::from(db));

    let listener = TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
