use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::{
    cookie::Key, service::SignedCookie, MemoryStore, SessionManagerLayer,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    model::app::AppState,
    router,
    service::user::UserService,
};

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

/// Configure signed cookie sessions backed by an in-process store
///
/// Without `SESSION_SECRET` a random key is generated, so sessions do not survive a restart.
pub fn session_layer(
    config: &Config,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    let key = match &config.session_secret {
        Some(secret) => Key::try_from(secret.as_bytes()).map_err(|e| {
            ConfigError::InvalidEnvValue {
                var: "SESSION_SECRET".to_string(),
                reason: e.to_string(),
            }
        })?,
        None => {
            tracing::warn!("SESSION_SECRET is not set, sessions will not survive a restart");

            Key::generate()
        }
    };

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    Ok(session)
}

/// Create the `admin` account on a deployment without admins
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    if let Some(admin) = UserService::new(db)
        .ensure_bootstrap_admin(config.admin_password.as_deref())
        .await?
    {
        tracing::info!(user_id = %admin.id, "Created bootstrap admin {}", admin.username);
    }

    Ok(())
}

/// Routes with state and the session layer applied
pub fn build_app(
    state: AppState,
    session: SessionManagerLayer<MemoryStore, SignedCookie>,
) -> axum::Router {
    router::routes().with_state(state).layer(session)
}
