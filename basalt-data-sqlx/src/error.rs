use basalt_data::DataError;

/// Extension trait for converting `sqlx::Error` into `DataError`.
///
/// Rust's orphan rules keep `From<sqlx::Error> for DataError` out of this
/// crate, so call sites use `.into_data_error()` instead.
pub trait SqlxErrorExt {
    fn into_data_error(self) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_data_error(self) -> DataError {
        match self {
            sqlx::Error::RowNotFound => DataError::NotFound("row not found".into()),
            sqlx::Error::ColumnNotFound(column) => {
                DataError::InvalidQuery(format!("column not found: {column}"))
            }
            other => DataError::database(other),
        }
    }
}

/// Convenience alias for data-layer results using `DataError`.
pub type SqlxResult<T> = Result<T, DataError>;
