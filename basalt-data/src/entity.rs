use crate::value::SqlValue;

/// Trait describing a database entity: table name, id column, column list,
/// and the current field values.
///
/// Intended to be implemented manually per entity type.
///
/// # Example
///
/// ```ignore
/// impl Entity for User {
///     type Id = i64;
///     fn table_name() -> &'static str { "users" }
///     fn id_column() -> &'static str { "id" }
///     fn columns() -> &'static [&'static str] { &["id", "name", "email"] }
///     fn id(&self) -> &i64 { &self.id }
///     fn values(&self) -> Vec<SqlValue> {
///         vec![self.id.into(), self.name.clone().into(), self.email.clone().into()]
///     }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    type Id: Send + Sync + 'static;

    fn table_name() -> &'static str;
    fn id_column() -> &'static str;

    /// All column names, in declaration order. Must contain [`id_column`](Self::id_column).
    fn columns() -> &'static [&'static str];

    fn id(&self) -> &Self::Id;

    /// Current field values, one per entry of [`columns`](Self::columns), in the same order.
    fn values(&self) -> Vec<SqlValue>;

    /// Resolve a caller-supplied column name against [`columns`](Self::columns),
    /// ignoring ASCII case. Returns `None` when no column matches.
    ///
    /// Search and sort parameters arrive as free-form strings; resolving them
    /// here keeps unvalidated identifiers out of generated SQL.
    fn resolve_column(name: &str) -> Option<&'static str> {
        Self::columns()
            .iter()
            .find(|col| col.eq_ignore_ascii_case(name))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget {
        id: i64,
        label: String,
    }

    impl Entity for Widget {
        type Id = i64;

        fn table_name() -> &'static str {
            "widgets"
        }

        fn id_column() -> &'static str {
            "id"
        }

        fn columns() -> &'static [&'static str] {
            &["id", "label"]
        }

        fn id(&self) -> &i64 {
            &self.id
        }

        fn values(&self) -> Vec<SqlValue> {
            vec![self.id.into(), self.label.clone().into()]
        }
    }

    #[test]
    fn test_resolve_column_exact() {
        assert_eq!(Widget::resolve_column("label"), Some("label"));
    }

    #[test]
    fn test_resolve_column_ignores_case() {
        assert_eq!(Widget::resolve_column("LABEL"), Some("label"));
        assert_eq!(Widget::resolve_column("Id"), Some("id"));
    }

    #[test]
    fn test_resolve_column_unknown() {
        assert_eq!(Widget::resolve_column("nope"), None);
        assert_eq!(Widget::resolve_column(""), None);
    }

    #[test]
    fn test_values_match_columns() {
        let w = Widget {
            id: 3,
            label: "bolt".into(),
        };
        assert_eq!(w.values().len(), Widget::columns().len());
    }
}
