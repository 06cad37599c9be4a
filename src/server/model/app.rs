use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::admin::AdminError};

/// Keys guarding the admin management page.
///
/// A missing key disables the matching operation entirely.
#[derive(Clone, Default)]
pub struct AdminKeys {
    pub access_key: Option<String>,
    pub delete_key: Option<String>,
}

impl AdminKeys {
    pub fn from_config(config: &Config) -> Self {
        Self {
            access_key: config.admin_access_key.clone(),
            delete_key: config.admin_delete_key.clone(),
        }
    }

    pub fn verify_access_key(&self, submitted: &str) -> Result<(), AdminError> {
        match &self.access_key {
            Some(key) if key == submitted.trim() => Ok(()),
            _ => Err(AdminError::AccessKeyInvalid),
        }
    }

    pub fn verify_delete_key(&self, submitted: &str) -> Result<(), AdminError> {
        match &self.delete_key {
            Some(key) if key == submitted.trim() => Ok(()),
            _ => Err(AdminError::DeleteKeyInvalid),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub admin_keys: AdminKeys,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            admin_keys: AdminKeys::default(),
        }
    }
}
