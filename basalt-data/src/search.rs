use serde::{Deserialize, Serialize};

/// Result ordering for paged searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortOrder {
    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// Parameters for a paged search, deserializable from query strings or JSON.
///
/// Pages are 1-based. A `limit` of 0 disables pagination and returns the
/// whole result set.
///
/// # Example
///
/// ```ignore
/// let params = SearchParams::default()
///     .with_term("gmail")
///     .with_target("email")
///     .with_order(SortOrder::Descending);
/// let page = repo.search(&params).await?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub page: u64,
    pub limit: u64,
    pub order: SortOrder,
    /// Substring to search for. SQL wildcard characters (`%`, `_`) in the
    /// term keep their LIKE meaning, and matching case-sensitivity follows
    /// the database's LIKE behavior.
    pub term: Option<String>,
    /// Column to search in; `None` searches every column.
    pub target: Option<String>,
    /// Column to sort by; `None` sorts by the entity's id column.
    pub sort: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            order: SortOrder::Ascending,
            term: None,
            target: None,
            sort: None,
        }
    }
}

impl SearchParams {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Copy of the parameters with out-of-range and empty inputs normalized:
    /// `page` is clamped to 1 and blank strings are treated as absent.
    pub fn normalized(&self) -> Self {
        let clean = |s: &Option<String>| s.as_deref().filter(|s| !s.is_empty()).map(String::from);
        Self {
            page: self.page.max(1),
            limit: self.limit,
            order: self.order,
            term: clean(&self.term),
            target: clean(&self.target),
            sort: clean(&self.sort),
        }
    }

    /// Number of rows to skip for the requested page. Call on normalized
    /// parameters; a raw `page` of 0 is treated as page 1.
    pub fn offset(&self) -> u64 {
        (self.page.max(1) - 1) * self.limit
    }
}
