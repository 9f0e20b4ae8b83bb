use std::fmt;

pub mod compiler;

/// A compiled WHERE predicate; empty when the filter tree rendered to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlFilter {
    predicate: Option<String>,
}

impl SqlFilter {
    pub fn new() -> Self {
        SqlFilter { predicate: None }
    }

    pub fn with_predicate(predicate: impl Into<String>) -> Self {
        let predicate = predicate.into();
        SqlFilter {
            predicate: (!predicate.is_empty()).then_some(predicate),
        }
    }

    pub fn predicate(&self) -> Option<&str> {
        self.predicate.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.predicate.is_none()
    }

    /// Render " WHERE ..." or empty string if no predicate.
    pub fn to_sql(&self) -> String {
        self.predicate
            .as_ref()
            .map(|p| format!(" WHERE {p}"))
            .unwrap_or_default()
    }
}

impl fmt::Display for SqlFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.predicate().unwrap_or_default())
    }
}
