use std::error::Error;

///
/// Result type for `DataLayer`s. All `DataLayer` implementations
/// should return this type.
///
pub type Result<T> = std::result::Result<T, DataLayerError>;

///
/// Result type for `DataLayer`s. Represents a generic returned error,
/// which allows different kinds of `DataLayer` implementation.
///
pub type DataLayerError = Box<dyn Error + Send + Sync>;

///
/// Outcome of an insert against a table with a uniqueness constraint.
/// `Duplicate` means another writer already holds the key, and the
/// caller should re-read instead of failing.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Insert<T> {
    Inserted(T),
    Duplicate,
}

///
/// Maps a sqlx insert result onto `Insert`, turning unique-constraint
/// violations into `Insert::Duplicate`. Every other error is propagated.
///
pub fn unique_insert<T>(res: std::result::Result<T, sqlx::Error>) -> Result<Insert<T>> {
    match res {
        Ok(value) => Ok(Insert::Inserted(value)),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(Insert::Duplicate),
        Err(e) => Err(e.into()),
    }
}
