use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,                    // assigned by the database
    pub email: String,              // login key, unique
    pub password_hash: String,      // Argon2 PHC string, never the plaintext
    pub created_at: OffsetDateTime, // set at insert
}
