use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

use crate::auth::{password, User};
use crate::error::AuthError;

/// Register a new account: hash the password, persist the record.
///
/// The users table enforces email uniqueness; a violation is reported as
/// `UserAlreadyExists` instead of a generic storage failure.
#[instrument(skip(db, plain), fields(email = %email))]
pub async fn register(db: &SqlitePool, email: &str, plain: &str) -> Result<User, AuthError> {
    let hash = password::hash_password(plain)?;

    match User::create(db, email, &hash).await {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            warn!("email already registered");
            Err(AuthError::UserAlreadyExists)
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            Err(AuthError::Internal(e.into()))
        }
    }
}

/// Verify submitted credentials against the stored hash.
///
/// Unknown email and wrong password both come back as `WrongCredentials`;
/// nothing in the result distinguishes the two.
#[instrument(skip(db, plain), fields(email = %email))]
pub async fn authenticate(db: &SqlitePool, email: &str, plain: &str) -> Result<User, AuthError> {
    let user = match User::find_by_email(db, email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!("login for unknown email");
            return Err(AuthError::WrongCredentials);
        }
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err(AuthError::Internal(e.into()));
        }
    };

    let ok = password::verify_password(plain, &user.password_hash)?;
    if !ok {
        warn!(user_id = user.id, "login with invalid password");
        return Err(AuthError::WrongCredentials);
    }

    Ok(user)
}
