//! Optional administrator account seeded on first run.

use crate::auth::{PasswordHashError, PasswordHasher};
use crate::config::AdminSeedSettings;
use crate::model::user::User;
use log::warn;

/// Builds the administrator record, hashing the configured password.
///
/// Returns `Ok(None)` when no administrator was configured, or when the
/// configured values do not form a valid account (for example an email
/// without `@`); such input counts as absent and the roster still seeds.
pub fn admin_user(
    settings: Option<&AdminSeedSettings>,
    hasher: &dyn PasswordHasher,
) -> Result<Option<User>, PasswordHashError> {
    let Some(settings) = settings else {
        return Ok(None);
    };

    let user = User {
        full_name: settings.full_name.clone(),
        email: settings.email.clone(),
        whatsapp: settings.whatsapp.clone(),
        city: settings.city.clone(),
        password: hasher.hash(&settings.password)?,
    };

    if let Err(err) = user.validate() {
        warn!(
            "event=seed_admin module=seed status=skipped reason=invalid_admin error={}",
            err
        );
        return Ok(None);
    }
    Ok(Some(user))
}
