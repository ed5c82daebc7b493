//! # basalt-data-sqlx — SQLx backend for the Basalt data layer
//!
//! This crate provides the [SQLx](https://github.com/launchbadge/sqlx)-specific
//! implementations for Basalt's data access layer. It depends on [`basalt_data`]
//! for the abstract traits and types, and adds the generic repository,
//! transaction utilities, connection configuration, and error bridging needed
//! to talk to a real database.
//!
//! # What's in this crate
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SqlxRepository`] | Generic repository implementing CRUD and paged search for any [`Entity`](basalt_data::Entity) |
//! | [`Tx`] | Transaction wrapper with explicit commit / rollback-on-drop |
//! | [`DatabaseConfig`] | Connection settings, deserializable or read from the environment |
//! | [`SqlxErrorExt`] | Extension trait to convert `sqlx::Error` → `DataError` (`.into_data_error()`) |
//! | [`SqlxResult<T>`] | Type alias for `Result<T, DataError>` |
//! | [`migration`] | Documentation module with guidance on using `sqlx::migrate!()` |
//!
//! # Feature flags
//!
//! Enable exactly one database driver:
//!
//! | Feature    | Driver |
//! |------------|--------|
//! | `sqlite`   | SQLite via `sqlx/sqlite` |
//! | `postgres` | PostgreSQL via `sqlx/postgres` |
//! | `mysql`    | MySQL via `sqlx/mysql` |
//!
//! # Quick start
//!
//! ```toml
//! [dependencies]
//! basalt-data-sqlx = { version = "0.1", features = ["sqlite"] }
//! ```
//!
//! ```ignore
//! use basalt_data_sqlx::prelude::*;
//! use sqlx::Sqlite;
//!
//! let pool = DatabaseConfig::from_env()?.connect::<Sqlite>().await?;
//! let repo = SqlxRepository::<User, Sqlite>::new(pool.clone());
//!
//! let user = repo.insert(&user).await?;
//! let page = repo
//!     .search(&SearchParams::default().with_term("alice").with_target("name"))
//!     .await?;
//! ```
//!
//! # Paged search
//!
//! [`SqlxRepository::search`](basalt_data::Repository::search) takes
//! [`SearchParams`](basalt_data::SearchParams) and returns a
//! [`Page`](basalt_data::Page):
//!
//! - without a term, it pages the whole table in the requested order;
//! - with a term and a target column, it keeps rows whose column is NULL or
//!   contains the term;
//! - with a term and no target, it matches the term against every column.
//!
//! Column names arriving in `target` and `sort` are resolved
//! case-insensitively against the entity's column list and rejected with
//! `DataError::InvalidQuery` when unknown.
//!
//! # Error bridging
//!
//! Due to Rust's orphan rules, `From<sqlx::Error> for DataError` can't be
//! implemented here. Use the [`SqlxErrorExt`] trait instead:
//!
//! ```ignore
//! use basalt_data_sqlx::SqlxErrorExt;
//!
//! let user = sqlx::query_as("SELECT ...")
//!     .fetch_one(&pool)
//!     .await
//!     .map_err(|e| e.into_data_error())?;
//! ```

pub mod config;
pub mod error;
pub mod migration;
pub mod repository;
pub mod tx;

pub use config::DatabaseConfig;
pub use error::{SqlxErrorExt, SqlxResult};
pub use repository::SqlxRepository;
pub use tx::Tx;

/// Re-exports of the most commonly used types from both `basalt-data` and this crate.
pub mod prelude {
    pub use crate::{DatabaseConfig, SqlxErrorExt, SqlxRepository, Tx};
    pub use basalt_data::prelude::*;
}
