//! Pagination and filter parameters for list endpoints.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Query parameters for one page request: index, size, sort order, and
/// any resource-specific filters, rendered in a stable order.
///
/// Values the API accepts here are plain tokens, ISO dates, and numeric
/// ids, so no percent-encoding is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: i64,
    pub size: i64,
    pub sort: &'static str,
    filters: Vec<(&'static str, String)>,
}

impl ListQuery {
    pub fn new(page: i64, size: i64, sort: &'static str) -> Self {
        Self {
            page,
            size,
            sort,
            filters: Vec::new(),
        }
    }

    /// Append a filter parameter.
    #[must_use]
    pub fn filter(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.filters.push((key, value.into()));
        self
    }

    /// Append a filter parameter only when a value is present and
    /// non-blank, matching how the original UI omitted cleared filters.
    #[must_use]
    pub fn filter_opt(self, key: &'static str, value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => self.filter(key, v),
            None => self,
        }
    }

    /// Render as a query string, `?` included.
    pub fn to_query(&self) -> String {
        let mut out = format!("?page={}&size={}&sort={}", self.page, self.size, self.sort);
        for (key, value) in &self.filters {
            out.push('&');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}
