use std::str::FromStr;

use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, SqlitePool};

use crate::data_layer_error::Result;

///
/// Connects to the SQLite database at `url`, creating it if missing,
/// and brings the schema up to date.
///
pub async fn connect(url: &str) -> Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let db = SqlitePoolOptions::new().connect_with(opts).await?;
    sqlx::migrate!("./migrations").run(&db).await?;

    Ok(db)
}

///
/// Single-connection in-memory database with the schema applied.
/// The connection is never recycled, since dropping it drops the data.
///
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&db).await.unwrap();
    db
}
