use crate::error::SqlxErrorExt;
use basalt_data::{
    DataError, Entity, HasDialect, Page, QueryBuilder, Repository, SearchParams, SqlValue,
};
use sqlx::{ColumnIndex, Database, Decode, Encode, Executor, FromRow, IntoArguments, Pool, Type};
use std::marker::PhantomData;
use tracing::debug;

/// A generic SQL repository over an `sqlx::Pool<DB>`.
///
/// Implements [`Repository`] for any entity type that describes itself via
/// [`Entity`] and maps from rows via `sqlx::FromRow`. All statements are
/// produced by [`QueryBuilder`] with the dialect taken from the driver type.
///
/// # Example
///
/// ```ignore
/// let repo = SqlxRepository::<User, Sqlite>::new(pool.clone());
/// let user = repo.insert(&user).await?;
/// let page = repo.search(&SearchParams::default().with_term("alice")).await?;
/// ```
pub struct SqlxRepository<T, DB: Database> {
    pool: Pool<DB>,
    _marker: PhantomData<T>,
}

impl<T, DB: Database> SqlxRepository<T, DB> {
    pub fn new(pool: Pool<DB>) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Get the underlying pool reference.
    pub fn pool(&self) -> &Pool<DB> {
        &self.pool
    }

    /// Create a `QueryBuilder` pre-configured for this entity's table and the
    /// driver's dialect.
    pub fn query(&self) -> QueryBuilder
    where
        T: Entity,
        DB: HasDialect,
    {
        QueryBuilder::new(T::table_name()).dialect(DB::dialect())
    }
}

impl<T, DB: Database> Clone for SqlxRepository<T, DB> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, DB> SqlxRepository<T, DB>
where
    DB: Database + HasDialect,
    T: Entity + for<'r> FromRow<'r, DB::Row>,
    SqlValue: for<'q> Encode<'q, DB> + Type<DB>,
    for<'c> &'c mut DB::Connection: Executor<'c, Database = DB>,
    for<'q> <DB as Database>::Arguments<'q>: IntoArguments<'q, DB>,
{
    /// Run a caller-built query against this entity's table and map the rows.
    ///
    /// This is the open-ended listing operation; anything expressible with
    /// [`QueryBuilder`] conditions can be fetched through it.
    pub async fn find_by(&self, query: &QueryBuilder) -> Result<Vec<T>, DataError> {
        let (sql, args) = query.build_select(T::columns())?;
        debug!(table = T::table_name(), sql = %sql, "select");
        self.fetch_all(&sql, args).await
    }

    async fn fetch_all(&self, sql: &str, args: Vec<SqlValue>) -> Result<Vec<T>, DataError> {
        let mut query = sqlx::query_as::<DB, T>(sql);
        for value in args {
            query = query.bind(value);
        }
        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| e.into_data_error())
    }

    async fn fetch_optional(&self, sql: &str, args: Vec<SqlValue>) -> Result<Option<T>, DataError> {
        let mut query = sqlx::query_as::<DB, T>(sql);
        for value in args {
            query = query.bind(value);
        }
        query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| e.into_data_error())
    }

    async fn execute(&self, sql: &str, args: Vec<SqlValue>) -> Result<(), DataError> {
        let mut query = sqlx::query::<DB>(sql);
        for value in args {
            query = query.bind(value);
        }
        query
            .execute(&self.pool)
            .await
            .map_err(|e| e.into_data_error())?;
        Ok(())
    }
}

impl<T, DB> Repository<T, T::Id> for SqlxRepository<T, DB>
where
    DB: Database + HasDialect,
    T: Entity + for<'r> FromRow<'r, DB::Row>,
    T::Id: Clone + Into<SqlValue>,
    SqlValue: for<'q> Encode<'q, DB> + Type<DB>,
    i64: for<'r> Decode<'r, DB> + Type<DB>,
    usize: ColumnIndex<DB::Row>,
    for<'r> (i64,): FromRow<'r, DB::Row>,
    for<'c> &'c mut DB::Connection: Executor<'c, Database = DB>,
    for<'q> <DB as Database>::Arguments<'q>: IntoArguments<'q, DB>,
{
    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, DataError> {
        let (sql, args) = self
            .query()
            .where_eq(T::id_column(), id.clone())
            .build_select(T::columns())?;
        debug!(table = T::table_name(), sql = %sql, "find by id");
        self.fetch_optional(&sql, args).await
    }

    async fn find_all(&self) -> Result<Vec<T>, DataError> {
        let (sql, args) = self.query().build_select(T::columns())?;
        debug!(table = T::table_name(), sql = %sql, "find all");
        self.fetch_all(&sql, args).await
    }

    async fn search(&self, params: &SearchParams) -> Result<Page<T>, DataError> {
        let params = params.normalized();
        let sort_column = match params.sort.as_deref() {
            Some(name) => T::resolve_column(name)
                .ok_or_else(|| DataError::InvalidQuery(format!("unknown sort column: {name}")))?,
            None => T::id_column(),
        };

        let mut query = self
            .query()
            .order_by(sort_column, params.order.is_ascending());
        if let Some(term) = params.term.as_deref() {
            let pattern = format!("%{term}%");
            match params.target.as_deref() {
                Some(target) => {
                    let column = T::resolve_column(target).ok_or_else(|| {
                        DataError::InvalidQuery(format!("unknown search column: {target}"))
                    })?;
                    query = query.where_null_or_like(column, &pattern);
                }
                None => {
                    query = query.where_any_like(T::columns(), &pattern);
                }
            }
        }
        if params.limit > 0 {
            query = query.limit(params.limit).offset(params.offset());
        }

        let (sql, args) = query.build_select(T::columns())?;
        debug!(table = T::table_name(), sql = %sql, "search");
        let items = self.fetch_all(&sql, args).await?;
        // page math runs against the unfiltered table count
        let total = self.count().await?;
        Ok(Page::new(items, &params, total))
    }

    async fn insert(&self, entity: &T) -> Result<T, DataError> {
        let mut query = self.query();
        for (column, value) in T::columns().iter().copied().zip(entity.values()) {
            query = query.set(column, value);
        }
        let (sql, args) = query.build_insert()?;
        debug!(table = T::table_name(), sql = %sql, "insert");
        self.execute(&sql, args).await?;
        self.find_by_id(entity.id()).await?.ok_or_else(|| {
            DataError::NotFound(format!("{} row not readable after insert", T::table_name()))
        })
    }

    async fn update(&self, entity: &T) -> Result<T, DataError> {
        let id_column = T::id_column();
        let mut query = self.query().where_eq(id_column, entity.id().clone());
        for (column, value) in T::columns().iter().copied().zip(entity.values()) {
            if column != id_column {
                query = query.set(column, value);
            }
        }
        let (sql, args) = query.build_update()?;
        debug!(table = T::table_name(), sql = %sql, "update");
        self.execute(&sql, args).await?;
        self.find_by_id(entity.id()).await?.ok_or_else(|| {
            DataError::NotFound(format!("no {} row with the given id", T::table_name()))
        })
    }

    async fn delete(&self, id: &T::Id) -> Result<bool, DataError> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        let (sql, args) = self
            .query()
            .where_eq(T::id_column(), id.clone())
            .build_delete()?;
        debug!(table = T::table_name(), sql = %sql, "delete");
        self.execute(&sql, args).await?;
        Ok(true)
    }

    async fn count(&self) -> Result<u64, DataError> {
        let (sql, args) = self.query().build_count()?;
        let mut query = sqlx::query_scalar::<DB, i64>(&sql);
        for value in args {
            query = query.bind(value);
        }
        let total = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| e.into_data_error())?;
        Ok(total.max(0) as u64)
    }
}
