//! Catalog user account.

use super::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// Account record as persisted in `users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub full_name: String,
    /// Natural key; the table enforces uniqueness.
    pub email: String,
    /// Contact handle, may be empty.
    pub whatsapp: String,
    pub city: String,
    /// Password digest produced by a `PasswordHasher`.
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Checks the fields required before persistence.
    ///
    /// `whatsapp` is allowed to be empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("full_name", &self.full_name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("city", &self.city)?;
        require_non_empty("password", &self.password)?;

        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ValidationError::InvalidEmail(self.email.clone())),
        }
    }
}
