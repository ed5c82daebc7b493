use crate::error::DataError;
use crate::page::Page;
use crate::search::SearchParams;
use std::future::Future;

/// Generic async repository trait for CRUD and paged search.
///
/// Uses RPITIT (return-position `impl Trait` in traits) rather than `async-trait`.
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    fn find_by_id(&self, id: &ID) -> impl Future<Output = Result<Option<T>, DataError>> + Send;
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;
    /// Paged, optionally filtered listing. See [`SearchParams`] for the
    /// filter and ordering knobs.
    fn search(&self, params: &SearchParams) -> impl Future<Output = Result<Page<T>, DataError>> + Send;
    fn insert(&self, entity: &T) -> impl Future<Output = Result<T, DataError>> + Send;
    fn update(&self, entity: &T) -> impl Future<Output = Result<T, DataError>> + Send;
    /// Returns whether a row with this id existed.
    fn delete(&self, id: &ID) -> impl Future<Output = Result<bool, DataError>> + Send;
    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send;
}
