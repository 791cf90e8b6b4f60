use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::setup_code::SetupCodeService,
};

/// Days of inactivity after which a login session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is current before
/// any request is served.
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

/// Builds the session layer backed by the application database.
///
/// Sessions live in the same Sqlite file as the application tables, in a table the
/// store creates on first run. Sessions expire after seven days without a request.
///
/// # Arguments
/// - `db` - Connected database whose pool the session store shares
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}

/// Creates the evidence upload directory if it does not exist yet.
pub async fn create_upload_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    tracing::info!("Storing uploads in {}", config.upload_dir.display());

    Ok(())
}

/// Generates and logs a setup code when no admin account exists.
///
/// The code is valid for 60 seconds and can be redeemed once at `POST /api/auth/setup`
/// to create the first admin. Nothing is generated once an admin exists.
///
/// # Arguments
/// - `db` - Database used to look for an existing admin
/// - `setup_code_service` - Holder the generated code is stored in
///
/// # Returns
/// - `Ok(())` - Admin exists, or a code was generated and logged
/// - `Err(AppError::DbErr)` - Failed to query users
pub async fn check_for_admin(
    db: &DatabaseConnection,
    setup_code_service: &SetupCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = setup_code_service.generate().await;

    tracing::info!("No admin account found. Create one within 60 seconds with this setup code:");
    tracing::info!("    {}", code);
    tracing::info!("POST /api/auth/setup {{\"code\", \"email\", \"password\"}}");

    Ok(())
}
