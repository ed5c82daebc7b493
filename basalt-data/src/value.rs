/// A dynamically typed SQL bind value.
///
/// Generic repositories cannot know entity field types at compile time, so
/// entities describe their fields as a list of `SqlValue`s (see
/// [`Entity::values`](crate::Entity::values)) and the query layer binds them
/// through the driver's native encoding for each variant.
///
/// # Example
///
/// ```ignore
/// let values: Vec<SqlValue> = vec![
///     1i64.into(),
///     "alice".into(),
///     true.into(),
///     Option::<String>::None.into(),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    /// Whether this value is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_impl {
    use super::SqlValue;
    use sqlx::encode::{Encode, IsNull};
    use sqlx::error::BoxDynError;
    use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
    use sqlx::{Database, Type};

    impl Type<Sqlite> for SqlValue {
        fn type_info() -> SqliteTypeInfo {
            <String as Type<Sqlite>>::type_info()
        }

        fn compatible(_ty: &SqliteTypeInfo) -> bool {
            true
        }
    }

    impl<'q> Encode<'q, Sqlite> for SqlValue {
        fn encode_by_ref(
            &self,
            buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
        ) -> Result<IsNull, BoxDynError> {
            match self {
                SqlValue::Null => Ok(IsNull::Yes),
                SqlValue::Bool(v) => <bool as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
                SqlValue::Int(v) => <i64 as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
                SqlValue::Float(v) => <f64 as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
                SqlValue::Text(v) => <String as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
            }
        }

        fn produces(&self) -> Option<SqliteTypeInfo> {
            Some(match self {
                SqlValue::Null | SqlValue::Text(_) => <String as Type<Sqlite>>::type_info(),
                SqlValue::Bool(_) => <bool as Type<Sqlite>>::type_info(),
                SqlValue::Int(_) => <i64 as Type<Sqlite>>::type_info(),
                SqlValue::Float(_) => <f64 as Type<Sqlite>>::type_info(),
            })
        }
    }
}

#[cfg(feature = "postgres")]
mod postgres_impl {
    use super::SqlValue;
    use sqlx::encode::{Encode, IsNull};
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgTypeInfo, Postgres};
    use sqlx::{Database, Type};

    impl Type<Postgres> for SqlValue {
        fn type_info() -> PgTypeInfo {
            <String as Type<Postgres>>::type_info()
        }

        fn compatible(_ty: &PgTypeInfo) -> bool {
            true
        }
    }

    impl<'q> Encode<'q, Postgres> for SqlValue {
        fn encode_by_ref(
            &self,
            buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
        ) -> Result<IsNull, BoxDynError> {
            match self {
                SqlValue::Null => Ok(IsNull::Yes),
                SqlValue::Bool(v) => <bool as Encode<'q, Postgres>>::encode_by_ref(v, buf),
                SqlValue::Int(v) => <i64 as Encode<'q, Postgres>>::encode_by_ref(v, buf),
                SqlValue::Float(v) => <f64 as Encode<'q, Postgres>>::encode_by_ref(v, buf),
                SqlValue::Text(v) => <String as Encode<'q, Postgres>>::encode_by_ref(v, buf),
            }
        }

        fn produces(&self) -> Option<PgTypeInfo> {
            Some(match self {
                SqlValue::Null | SqlValue::Text(_) => <String as Type<Postgres>>::type_info(),
                SqlValue::Bool(_) => <bool as Type<Postgres>>::type_info(),
                SqlValue::Int(_) => <i64 as Type<Postgres>>::type_info(),
                SqlValue::Float(_) => <f64 as Type<Postgres>>::type_info(),
            })
        }
    }
}

#[cfg(feature = "mysql")]
mod mysql_impl {
    use super::SqlValue;
    use sqlx::encode::{Encode, IsNull};
    use sqlx::error::BoxDynError;
    use sqlx::mysql::{MySql, MySqlTypeInfo};
    use sqlx::{Database, Type};

    impl Type<MySql> for SqlValue {
        fn type_info() -> MySqlTypeInfo {
            <String as Type<MySql>>::type_info()
        }

        fn compatible(_ty: &MySqlTypeInfo) -> bool {
            true
        }
    }

    impl<'q> Encode<'q, MySql> for SqlValue {
        fn encode_by_ref(
            &self,
            buf: &mut <MySql as Database>::ArgumentBuffer<'q>,
        ) -> Result<IsNull, BoxDynError> {
            match self {
                SqlValue::Null => Ok(IsNull::Yes),
                SqlValue::Bool(v) => <bool as Encode<'q, MySql>>::encode_by_ref(v, buf),
                SqlValue::Int(v) => <i64 as Encode<'q, MySql>>::encode_by_ref(v, buf),
                SqlValue::Float(v) => <f64 as Encode<'q, MySql>>::encode_by_ref(v, buf),
                SqlValue::Text(v) => <String as Encode<'q, MySql>>::encode_by_ref(v, buf),
            }
        }

        fn produces(&self) -> Option<MySqlTypeInfo> {
            Some(match self {
                SqlValue::Null | SqlValue::Text(_) => <String as Type<MySql>>::type_info(),
                SqlValue::Bool(_) => <bool as Type<MySql>>::type_info(),
                SqlValue::Int(_) => <i64 as Type<MySql>>::type_info(),
                SqlValue::Float(_) => <f64 as Type<MySql>>::type_info(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(SqlValue::from(true), SqlValue::Bool(true));
        assert_eq!(SqlValue::from(7i32), SqlValue::Int(7));
        assert_eq!(SqlValue::from(7i64), SqlValue::Int(7));
        assert_eq!(SqlValue::from(1.5f64), SqlValue::Float(1.5));
        assert_eq!(SqlValue::from("a"), SqlValue::Text("a".into()));
        assert_eq!(SqlValue::from(String::from("a")), SqlValue::Text("a".into()));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(SqlValue::from(Some(3i64)), SqlValue::Int(3));
        assert_eq!(SqlValue::from(Option::<i64>::None), SqlValue::Null);
        assert!(SqlValue::from(Option::<String>::None).is_null());
    }
}
