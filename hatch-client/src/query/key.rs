//! Query keys

use std::fmt;

/// Hierarchical cache key, e.g. `["projects", "abc", "detail"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Whether `prefix` matches the leading parts of this key
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Keys for project queries
pub mod project_keys {
    use super::QueryKey;

    /// Prefix shared by every project query
    pub fn all() -> QueryKey {
        QueryKey::new(["projects"])
    }

    pub fn detail(project_ref: &str) -> QueryKey {
        QueryKey::new(["projects", project_ref, "detail"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_layout() {
        let key = project_keys::detail("abc");
        assert_eq!(key.parts(), ["projects", "abc", "detail"]);
        assert_eq!(key.to_string(), "[projects, abc, detail]");
    }

    #[test]
    fn test_prefix_matching() {
        let key = project_keys::detail("abc");
        assert!(key.starts_with(&project_keys::all()));
        assert!(key.starts_with(&key));
        assert!(!project_keys::all().starts_with(&key));
        assert!(!key.starts_with(&project_keys::detail("xyz")));
    }
}
