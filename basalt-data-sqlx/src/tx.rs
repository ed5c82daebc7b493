//! Transaction wrapper with explicit commit and rollback.

use crate::error::SqlxErrorExt;
use basalt_data::DataError;
use sqlx::{Database, Pool, Transaction};
use std::ops::{Deref, DerefMut};

/// A database transaction.
///
/// Dropping a `Tx` without committing rolls it back, so an early `?` return
/// leaves the database untouched.
///
/// # Example
///
/// ```ignore
/// let mut tx = Tx::begin(repo.pool()).await?;
/// sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
///     .bind(1i64)
///     .bind("alice")
///     .execute(tx.as_mut())
///     .await
///     .map_err(|e| e.into_data_error())?;
/// tx.commit().await?;
/// ```
pub struct Tx<'a, DB: Database>(Transaction<'a, DB>);

impl<DB: Database> Tx<'static, DB> {
    /// Begin a new transaction from the pool.
    pub async fn begin(pool: &Pool<DB>) -> Result<Self, DataError> {
        let tx = pool.begin().await.map_err(|e| e.into_data_error())?;
        Ok(Tx(tx))
    }
}

impl<'a, DB: Database> Tx<'a, DB> {
    pub async fn commit(self) -> Result<(), DataError> {
        self.0.commit().await.map_err(|e| e.into_data_error())
    }

    pub async fn rollback(self) -> Result<(), DataError> {
        self.0.rollback().await.map_err(|e| e.into_data_error())
    }

    /// Returns a mutable reference to the underlying connection.
    pub fn as_mut(&mut self) -> &mut <DB as Database>::Connection {
        &mut *self.0
    }
}

impl<'a, DB: Database> Deref for Tx<'a, DB> {
    type Target = Transaction<'a, DB>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, DB: Database> DerefMut for Tx<'a, DB> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
