use sea_orm::DatabaseConnection;

use crate::server::{config::Config, data::admin::AdminRepository, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts the configured admin account unless one with that username already exists.
///
/// Does nothing when no admin credentials are configured.
///
/// # Returns
/// - `Ok(())` - Admin present (inserted now or previously) or seeding not configured
/// - `Err(AppError::DbErr)` - Database error during lookup or insert
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(seed) = &config.admin_seed else {
        return Ok(());
    };

    let repo = AdminRepository::new(db);

    if repo.exists_by_username(&seed.username).await? {
        tracing::debug!("Admin '{}' already present", seed.username);
        return Ok(());
    }

    repo.create(&seed.username, &seed.password).await?;
    tracing::info!("Created admin account '{}'", seed.username);

    Ok(())
}
