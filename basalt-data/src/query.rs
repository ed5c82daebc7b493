use crate::value::SqlValue;

/// A fluent builder for the SQL statements the repository layer needs:
/// SELECT, COUNT, INSERT, UPDATE, and DELETE.
///
/// Every identifier passing through the builder is validated against a
/// conservative pattern before it reaches the statement text; bind values
/// always travel as placeholders.
///
/// # Example
///
/// ```ignore
/// let (sql, args) = QueryBuilder::new("users")
///     .where_eq("email", "a@b.com")
///     .order_by("id", true)
///     .limit(10)
///     .build_select(&["id", "name", "email"])?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Generic SQL using `?` placeholders (default).
    Generic,
    /// SQLite-style `?` placeholders.
    Sqlite,
    /// MySQL-style `?` placeholders with backtick quoting.
    MySql,
    /// Postgres-style `$1, $2, ...` placeholders.
    Postgres,
}

impl Dialect {
    fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Generic | Dialect::Sqlite | Dialect::MySql => "?".to_string(),
        }
    }

    fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Generic | Dialect::Sqlite | Dialect::Postgres => '"',
        }
    }

    /// Render a cast of `expr` to the dialect's character type, for substring
    /// matching against columns of any type.
    fn text_cast(self, expr: &str) -> String {
        match self {
            Dialect::MySql => format!("CAST({expr} AS CHAR)"),
            Dialect::Generic | Dialect::Sqlite | Dialect::Postgres => {
                format!("CAST({expr} AS TEXT)")
            }
        }
    }
}

/// Trait mapping an `sqlx` driver type to its [`Dialect`].
///
/// Lets generic code pick the placeholder and quoting style from the database
/// type parameter alone.
pub trait HasDialect: sqlx::Database {
    fn dialect() -> Dialect;
}

#[cfg(feature = "sqlite")]
impl HasDialect for sqlx::Sqlite {
    fn dialect() -> Dialect {
        Dialect::Sqlite
    }
}

#[cfg(feature = "postgres")]
impl HasDialect for sqlx::Postgres {
    fn dialect() -> Dialect {
        Dialect::Postgres
    }
}

#[cfg(feature = "mysql")]
impl HasDialect for sqlx::MySql {
    fn dialect() -> Dialect {
        Dialect::MySql
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// Validate identifiers and emit them bare (default).
    Bare,
    /// Validate identifiers and quote them using the dialect quoting style.
    Quoted,
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    conditions: Vec<Condition>,
    sets: Vec<(String, SqlValue)>,
    order: Vec<(String, bool)>,
    limit_val: Option<u64>,
    offset_val: Option<u64>,
    dialect: Dialect,
    policy: IdentifierPolicy,
}

#[derive(Debug, Clone)]
enum Condition {
    Eq(String, SqlValue),
    NotEq(String, SqlValue),
    Like(String, String),
    Gt(String, SqlValue),
    Lt(String, SqlValue),
    In(String, Vec<SqlValue>),
    IsNull(String),
    IsNotNull(String),
    /// `(col IS NULL OR CAST(col AS TEXT) LIKE pattern)`, a substring filter
    /// that also passes rows with no value in the column.
    NullOrLike(String, String),
    /// `(CAST(c1 AS TEXT) LIKE pattern OR CAST(c2 AS TEXT) LIKE pattern ...)`
    AnyLike(Vec<String>, String),
}

impl QueryBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            conditions: Vec::new(),
            sets: Vec::new(),
            order: Vec::new(),
            limit_val: None,
            offset_val: None,
            dialect: Dialect::Generic,
            policy: IdentifierPolicy::Bare,
        }
    }

    /// Create a new builder with an explicit SQL dialect.
    pub fn new_with_dialect(table: &str, dialect: Dialect) -> Self {
        Self::new(table).dialect(dialect)
    }

    /// Set the SQL dialect (affects placeholder style, quoting, and casts).
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Configure identifier quoting behavior.
    pub fn identifier_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn where_eq(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.conditions
            .push(Condition::Eq(column.to_string(), value.into()));
        self
    }

    pub fn where_not_eq(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.conditions
            .push(Condition::NotEq(column.to_string(), value.into()));
        self
    }

    pub fn where_like(mut self, column: &str, pattern: &str) -> Self {
        self.conditions
            .push(Condition::Like(column.to_string(), pattern.to_string()));
        self
    }

    pub fn where_gt(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.conditions
            .push(Condition::Gt(column.to_string(), value.into()));
        self
    }

    pub fn where_lt(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.conditions
            .push(Condition::Lt(column.to_string(), value.into()));
        self
    }

    pub fn where_in<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        self.conditions.push(Condition::In(
            column.to_string(),
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn where_null(mut self, column: &str) -> Self {
        self.conditions.push(Condition::IsNull(column.to_string()));
        self
    }

    pub fn where_not_null(mut self, column: &str) -> Self {
        self.conditions
            .push(Condition::IsNotNull(column.to_string()));
        self
    }

    /// Substring filter over one column that also passes rows where the
    /// column is NULL.
    pub fn where_null_or_like(mut self, column: &str, pattern: &str) -> Self {
        self.conditions.push(Condition::NullOrLike(
            column.to_string(),
            pattern.to_string(),
        ));
        self
    }

    /// Substring filter matching when any of `columns` contains the pattern.
    pub fn where_any_like(mut self, columns: &[&str], pattern: &str) -> Self {
        self.conditions.push(Condition::AnyLike(
            columns.iter().map(|c| c.to_string()).collect(),
            pattern.to_string(),
        ));
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order.push((column.to_string(), ascending));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit_val = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset_val = Some(offset);
        self
    }

    /// Stage a column assignment for INSERT or UPDATE.
    pub fn set(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.sets.push((column.to_string(), value.into()));
        self
    }

    /// Build a SELECT statement returning `(sql, bind_values)`.
    pub fn build_select(&self, columns: &[&str]) -> Result<(String, Vec<SqlValue>), QueryError> {
        if columns.is_empty() {
            return Err(QueryError::EmptyStatement("SELECT needs at least one column"));
        }
        let table = self.ident(&self.table, false, "table")?;
        let columns = self.column_list(columns)?;

        let mut sql = format!("SELECT {columns} FROM {table}");
        let mut args = Vec::new();
        let mut placeholder_idx = 1usize;
        self.append_where(&mut sql, &mut args, &mut placeholder_idx)?;
        self.append_order(&mut sql)?;
        self.append_limit_offset(&mut sql);
        Ok((sql, args))
    }

    /// Build a COUNT statement returning `(sql, bind_values)`.
    pub fn build_count(&self) -> Result<(String, Vec<SqlValue>), QueryError> {
        let table = self.ident(&self.table, false, "table")?;
        let mut sql = format!("SELECT COUNT(*) FROM {table}");
        let mut args = Vec::new();
        let mut placeholder_idx = 1usize;
        self.append_where(&mut sql, &mut args, &mut placeholder_idx)?;
        Ok((sql, args))
    }

    /// Build an INSERT statement from the staged [`set`](Self::set) assignments.
    pub fn build_insert(&self) -> Result<(String, Vec<SqlValue>), QueryError> {
        if self.sets.is_empty() {
            return Err(QueryError::EmptyStatement("INSERT needs at least one value"));
        }
        let table = self.ident(&self.table, false, "table")?;
        let mut columns = Vec::with_capacity(self.sets.len());
        let mut placeholders = Vec::with_capacity(self.sets.len());
        let mut args = Vec::with_capacity(self.sets.len());
        for (idx, (column, value)) in self.sets.iter().enumerate() {
            columns.push(self.ident(column, false, "column")?);
            placeholders.push(self.dialect.placeholder(idx + 1));
            args.push(value.clone());
        }
        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        );
        Ok((sql, args))
    }

    /// Build an UPDATE statement from the staged assignments and conditions.
    ///
    /// An UPDATE without a WHERE clause is refused; a full-table update must
    /// be written by hand.
    pub fn build_update(&self) -> Result<(String, Vec<SqlValue>), QueryError> {
        if self.sets.is_empty() {
            return Err(QueryError::EmptyStatement("UPDATE needs at least one assignment"));
        }
        if self.conditions.is_empty() {
            return Err(QueryError::EmptyStatement("UPDATE needs a WHERE clause"));
        }
        let table = self.ident(&self.table, false, "table")?;
        let mut assignments = Vec::with_capacity(self.sets.len());
        let mut args = Vec::with_capacity(self.sets.len());
        let mut placeholder_idx = 1usize;
        for (column, value) in &self.sets {
            let column = self.ident(column, false, "column")?;
            let placeholder = self.dialect.placeholder(placeholder_idx);
            placeholder_idx += 1;
            assignments.push(format!("{column} = {placeholder}"));
            args.push(value.clone());
        }
        let mut sql = format!("UPDATE {table} SET {}", assignments.join(", "));
        self.append_where(&mut sql, &mut args, &mut placeholder_idx)?;
        Ok((sql, args))
    }

    /// Build a DELETE statement from the staged conditions.
    ///
    /// A DELETE without a WHERE clause is refused.
    pub fn build_delete(&self) -> Result<(String, Vec<SqlValue>), QueryError> {
        if self.conditions.is_empty() {
            return Err(QueryError::EmptyStatement("DELETE needs a WHERE clause"));
        }
        let table = self.ident(&self.table, false, "table")?;
        let mut sql = format!("DELETE FROM {table}");
        let mut args = Vec::new();
        let mut placeholder_idx = 1usize;
        self.append_where(&mut sql, &mut args, &mut placeholder_idx)?;
        Ok((sql, args))
    }

    fn append_where(
        &self,
        sql: &mut String,
        args: &mut Vec<SqlValue>,
        placeholder_idx: &mut usize,
    ) -> Result<(), QueryError> {
        if self.conditions.is_empty() {
            return Ok(());
        }
        sql.push_str(" WHERE ");
        let mut first = true;
        for cond in &self.conditions {
            if !first {
                sql.push_str(" AND ");
            }
            first = false;
            match cond {
                Condition::Eq(col, val) => {
                    let col = self.ident(col, false, "column")?;
                    let placeholder = self.next_placeholder(placeholder_idx);
                    sql.push_str(&format!("{col} = {placeholder}"));
                    args.push(val.clone());
                }
                Condition::NotEq(col, val) => {
                    let col = self.ident(col, false, "column")?;
                    let placeholder = self.next_placeholder(placeholder_idx);
                    sql.push_str(&format!("{col} != {placeholder}"));
                    args.push(val.clone());
                }
                Condition::Like(col, pat) => {
                    let col = self.ident(col, false, "column")?;
                    let placeholder = self.next_placeholder(placeholder_idx);
                    sql.push_str(&format!("{col} LIKE {placeholder}"));
                    args.push(pat.clone().into());
                }
                Condition::Gt(col, val) => {
                    let col = self.ident(col, false, "column")?;
                    let placeholder = self.next_placeholder(placeholder_idx);
                    sql.push_str(&format!("{col} > {placeholder}"));
                    args.push(val.clone());
                }
                Condition::Lt(col, val) => {
                    let col = self.ident(col, false, "column")?;
                    let placeholder = self.next_placeholder(placeholder_idx);
                    sql.push_str(&format!("{col} < {placeholder}"));
                    args.push(val.clone());
                }
                Condition::In(col, vals) => {
                    let col = self.ident(col, false, "column")?;
                    let placeholders: Vec<_> = vals
                        .iter()
                        .map(|_| self.next_placeholder(placeholder_idx))
                        .collect();
                    sql.push_str(&format!("{col} IN ({})", placeholders.join(", ")));
                    args.extend(vals.iter().cloned());
                }
                Condition::IsNull(col) => {
                    let col = self.ident(col, false, "column")?;
                    sql.push_str(&format!("{col} IS NULL"));
                }
                Condition::IsNotNull(col) => {
                    let col = self.ident(col, false, "column")?;
                    sql.push_str(&format!("{col} IS NOT NULL"));
                }
                Condition::NullOrLike(col, pat) => {
                    let col = self.ident(col, false, "column")?;
                    let cast = self.dialect.text_cast(&col);
                    let placeholder = self.next_placeholder(placeholder_idx);
                    sql.push_str(&format!("({col} IS NULL OR {cast} LIKE {placeholder})"));
                    args.push(pat.clone().into());
                }
                Condition::AnyLike(cols, pat) => {
                    if cols.is_empty() {
                        return Err(QueryError::EmptyStatement(
                            "an any-column match needs at least one column",
                        ));
                    }
                    let mut clauses = Vec::with_capacity(cols.len());
                    for col in cols {
                        let col = self.ident(col, false, "column")?;
                        let cast = self.dialect.text_cast(&col);
                        let placeholder = self.next_placeholder(placeholder_idx);
                        clauses.push(format!("{cast} LIKE {placeholder}"));
                        args.push(pat.clone().into());
                    }
                    sql.push_str(&format!("({})", clauses.join(" OR ")));
                }
            }
        }
        Ok(())
    }

    fn append_order(&self, sql: &mut String) -> Result<(), QueryError> {
        if self.order.is_empty() {
            return Ok(());
        }
        sql.push_str(" ORDER BY ");
        let mut clauses = Vec::with_capacity(self.order.len());
        for (col, asc) in &self.order {
            let col = self.ident(col, false, "column")?;
            if *asc {
                clauses.push(format!("{col} ASC"));
            } else {
                clauses.push(format!("{col} DESC"));
            }
        }
        sql.push_str(&clauses.join(", "));
        Ok(())
    }

    fn append_limit_offset(&self, sql: &mut String) {
        if let Some(limit) = self.limit_val {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset_val {
            sql.push_str(&format!(" OFFSET {offset}"));
        }
    }

    fn next_placeholder(&self, placeholder_idx: &mut usize) -> String {
        let placeholder = self.dialect.placeholder(*placeholder_idx);
        *placeholder_idx += 1;
        placeholder
    }

    fn column_list(&self, columns: &[&str]) -> Result<String, QueryError> {
        let mut out = Vec::with_capacity(columns.len());
        for col in columns {
            out.push(self.ident(col, true, "column")?);
        }
        Ok(out.join(", "))
    }

    fn ident(&self, ident: &str, allow_star: bool, kind: &'static str) -> Result<String, QueryError> {
        if !is_valid_identifier(ident, allow_star) {
            return Err(QueryError::InvalidIdentifier {
                kind,
                ident: ident.to_string(),
            });
        }
        match self.policy {
            IdentifierPolicy::Quoted => Ok(quote_identifier(ident, self.dialect, allow_star)),
            IdentifierPolicy::Bare => Ok(ident.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum QueryError {
    InvalidIdentifier { kind: &'static str, ident: String },
    EmptyStatement(&'static str),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidIdentifier { kind, ident } => {
                write!(f, "Invalid {kind} identifier: {ident}")
            }
            QueryError::EmptyStatement(msg) => write!(f, "Incomplete statement: {msg}"),
        }
    }
}

impl std::error::Error for QueryError {}

fn is_valid_identifier(ident: &str, allow_star: bool) -> bool {
    if ident.is_empty() {
        return false;
    }
    let parts: Vec<&str> = ident.split('.').collect();
    for (idx, part) in parts.iter().enumerate() {
        if allow_star && *part == "*" {
            return idx + 1 == parts.len();
        }
        if !is_valid_segment(part) {
            return false;
        }
    }
    true
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn quote_identifier(ident: &str, dialect: Dialect, allow_star: bool) -> String {
    let quote = dialect.quote_char();
    let parts: Vec<&str> = ident.split('.').collect();
    let last_idx = parts.len().saturating_sub(1);
    parts
        .into_iter()
        .enumerate()
        .map(|(idx, part)| {
            if allow_star && part == "*" && idx == last_idx {
                part.to_string()
            } else {
                format!("{quote}{part}{quote}")
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_select() {
        let (sql, args) = QueryBuilder::new("users").build_select(&["*"]).unwrap();
        assert_eq!(sql, "SELECT * FROM users");
        assert!(args.is_empty());
    }

    #[test]
    fn test_where_eq() {
        let (sql, args) = QueryBuilder::new("users")
            .where_eq("email", "a@b.com")
            .build_select(&["*"])
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE email = ?");
        assert_eq!(args, vec![SqlValue::Text("a@b.com".into())]);
    }

    #[test]
    fn test_complex_query() {
        let (sql, args) = QueryBuilder::new("users")
            .where_eq("status", "active")
            .where_like("name", "%alice%")
            .order_by("id", true)
            .limit(10)
            .offset(20)
            .build_select(&["id", "name"])
            .unwrap();
        assert_eq!(
            sql,
            "SELECT id, name FROM users WHERE status = ? AND name LIKE ? ORDER BY id ASC LIMIT 10 OFFSET 20"
        );
        assert_eq!(
            args,
            vec![
                SqlValue::Text("active".into()),
                SqlValue::Text("%alice%".into())
            ]
        );
    }

    #[test]
    fn test_count_query() {
        let (sql, args) = QueryBuilder::new("users")
            .where_eq("active", true)
            .build_count()
            .unwrap();
        assert_eq!(sql, "SELECT COUNT(*) FROM users WHERE active = ?");
        assert_eq!(args, vec![SqlValue::Bool(true)]);
    }

    #[test]
    fn test_postgres_placeholders() {
        let (sql, args) = QueryBuilder::new_with_dialect("users", Dialect::Postgres)
            .where_eq("status", "active")
            .where_in("role", ["admin", "user"])
            .build_select(&["*"])
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM users WHERE status = $1 AND role IN ($2, $3)"
        );
        assert_eq!(
            args,
            vec![
                SqlValue::Text("active".into()),
                SqlValue::Text("admin".into()),
                SqlValue::Text("user".into())
            ]
        );
    }

    #[test]
    fn test_quoted_identifiers() {
        let (sql, args) = QueryBuilder::new("users")
            .dialect(Dialect::Postgres)
            .identifier_policy(IdentifierPolicy::Quoted)
            .where_eq("users.email", "a@b.com")
            .order_by("users.id", true)
            .build_select(&["users.id", "users.email"])
            .unwrap();
        assert_eq!(
            sql,
            "SELECT \"users\".\"id\", \"users\".\"email\" FROM \"users\" WHERE \"users\".\"email\" = $1 ORDER BY \"users\".\"id\" ASC"
        );
        assert_eq!(args, vec![SqlValue::Text("a@b.com".into())]);
    }

    #[test]
    fn test_invalid_identifier() {
        let err = QueryBuilder::new("users;drop")
            .build_select(&["*"])
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidIdentifier { .. }));

        let err = QueryBuilder::new("users")
            .where_eq("e mail", "x")
            .build_select(&["*"])
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_insert() {
        let (sql, args) = QueryBuilder::new_with_dialect("users", Dialect::Postgres)
            .set("id", 1i64)
            .set("name", "alice")
            .set("active", true)
            .build_insert()
            .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO users (id, name, active) VALUES ($1, $2, $3)"
        );
        assert_eq!(
            args,
            vec![
                SqlValue::Int(1),
                SqlValue::Text("alice".into()),
                SqlValue::Bool(true)
            ]
        );
    }

    #[test]
    fn test_insert_without_values() {
        let err = QueryBuilder::new("users").build_insert().unwrap_err();
        assert!(matches!(err, QueryError::EmptyStatement(_)));
    }

    #[test]
    fn test_update_shares_placeholder_numbering() {
        let (sql, args) = QueryBuilder::new_with_dialect("users", Dialect::Postgres)
            .set("name", "bob")
            .set("active", false)
            .where_eq("id", 7i64)
            .build_update()
            .unwrap();
        assert_eq!(sql, "UPDATE users SET name = $1, active = $2 WHERE id = $3");
        assert_eq!(
            args,
            vec![
                SqlValue::Text("bob".into()),
                SqlValue::Bool(false),
                SqlValue::Int(7)
            ]
        );
    }

    #[test]
    fn test_update_requires_where() {
        let err = QueryBuilder::new("users")
            .set("name", "bob")
            .build_update()
            .unwrap_err();
        assert!(matches!(err, QueryError::EmptyStatement(_)));
    }

    #[test]
    fn test_delete() {
        let (sql, args) = QueryBuilder::new("users")
            .where_eq("id", 7i64)
            .build_delete()
            .unwrap();
        assert_eq!(sql, "DELETE FROM users WHERE id = ?");
        assert_eq!(args, vec![SqlValue::Int(7)]);
    }

    #[test]
    fn test_delete_requires_where() {
        let err = QueryBuilder::new("users").build_delete().unwrap_err();
        assert!(matches!(err, QueryError::EmptyStatement(_)));
    }

    #[test]
    fn test_null_or_like() {
        let (sql, args) = QueryBuilder::new("users")
            .where_null_or_like("email", "%gmail%")
            .build_select(&["*"])
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM users WHERE (email IS NULL OR CAST(email AS TEXT) LIKE ?)"
        );
        assert_eq!(args, vec![SqlValue::Text("%gmail%".into())]);
    }

    #[test]
    fn test_any_like() {
        let (sql, args) = QueryBuilder::new_with_dialect("users", Dialect::Postgres)
            .where_any_like(&["name", "email"], "%ali%")
            .build_select(&["*"])
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM users WHERE (CAST(name AS TEXT) LIKE $1 OR CAST(email AS TEXT) LIKE $2)"
        );
        assert_eq!(
            args,
            vec![
                SqlValue::Text("%ali%".into()),
                SqlValue::Text("%ali%".into())
            ]
        );
    }

    #[test]
    fn test_any_like_mysql_cast() {
        let (sql, _) = QueryBuilder::new_with_dialect("users", Dialect::MySql)
            .where_any_like(&["name"], "%x%")
            .build_select(&["*"])
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM users WHERE (CAST(name AS CHAR) LIKE ?)"
        );
    }

    #[test]
    fn test_select_requires_columns() {
        let err = QueryBuilder::new("users").build_select(&[]).unwrap_err();
        assert!(matches!(err, QueryError::EmptyStatement(_)));
    }
}
