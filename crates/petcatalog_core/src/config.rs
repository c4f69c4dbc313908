//! Process environment configuration for bootstrap.
//!
//! # Invariants
//! - Blank or non-UTF-8 values count as absent.
//! - Values are trimmed, except `ADMIN_PASSWORD`, which is kept verbatim.
//! - An administrator seed exists only when both email and password are set.

use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const ADMIN_EMAIL_VAR: &str = "ADMIN_EMAIL";
pub const ADMIN_PASSWORD_VAR: &str = "ADMIN_PASSWORD";
pub const ADMIN_NAME_VAR: &str = "ADMIN_NAME";
pub const ADMIN_WHATSAPP_VAR: &str = "ADMIN_WHATSAPP";
pub const ADMIN_CITY_VAR: &str = "ADMIN_CITY";
pub const LOG_LEVEL_VAR: &str = "PETCATALOG_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "PETCATALOG_LOG_DIR";

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./data/petcatalog.db";
pub const DEFAULT_ADMIN_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_WHATSAPP: &str = "";
pub const DEFAULT_ADMIN_CITY: &str = "São Paulo";

/// Administrator account requested through the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSeedSettings {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub whatsapp: String,
    pub city: String,
}

impl Debug for AdminSeedSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeedSettings")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("whatsapp", &self.whatsapp)
            .field("city", &self.city)
            .finish()
    }
}

/// Everything the bootstrap entry point reads from its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSettings {
    pub database_url: String,
    pub admin: Option<AdminSeedSettings>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl BootstrapSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let read_secret = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let admin = match (read(ADMIN_EMAIL_VAR), read_secret(ADMIN_PASSWORD_VAR)) {
            (Some(email), Some(password)) => Some(AdminSeedSettings {
                email,
                password,
                full_name: read(ADMIN_NAME_VAR).unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
                whatsapp: read(ADMIN_WHATSAPP_VAR)
                    .unwrap_or_else(|| DEFAULT_ADMIN_WHATSAPP.to_string()),
                city: read(ADMIN_CITY_VAR).unwrap_or_else(|| DEFAULT_ADMIN_CITY.to_string()),
            }),
            _ => None,
        };

        Self {
            database_url: read(DATABASE_URL_VAR)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            admin,
            log_level: read(LOG_LEVEL_VAR),
            log_dir: read(LOG_DIR_VAR).map(PathBuf::from),
        }
    }
}
