//! Schema migration guidance.
//!
//! Basalt does not wrap migrations. Use `sqlx::migrate!()` directly with a
//! `migrations/` directory next to your `Cargo.toml`:
//!
//! ```ignore
//! sqlx::migrate!("./migrations").run(&pool).await?;
//! ```
//!
//! Requires the `migrate` feature on your application's own `sqlx`
//! dependency. Run the migrator once at startup, before handing the pool to
//! any [`SqlxRepository`](crate::SqlxRepository).
