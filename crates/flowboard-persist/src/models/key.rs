use std::fmt;

/// Identifies a stored snapshot: a concrete id or the most recently saved one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FlowKey {
    #[default]
    Latest,
    Id(String),
}

impl FlowKey {
    pub const LATEST: &'static str = "latest";

    pub fn id(id: impl Into<String>) -> Self {
        FlowKey::Id(id.into())
    }

    /// `"latest"` maps to [`FlowKey::Latest`], anything else is an id
    pub fn parse(value: &str) -> Self {
        if value == Self::LATEST {
            FlowKey::Latest
        } else {
            FlowKey::Id(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FlowKey::Latest => Self::LATEST,
            FlowKey::Id(id) => id,
        }
    }
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FlowKey {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for FlowKey {
    fn from(value: String) -> Self {
        if value == Self::LATEST {
            FlowKey::Latest
        } else {
            FlowKey::Id(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_alias() {
        assert_eq!(FlowKey::parse("latest"), FlowKey::Latest);
        assert_eq!(FlowKey::default(), FlowKey::Latest);
        assert_eq!(FlowKey::Latest.to_string(), "latest");
    }

    #[test]
    fn test_id_key() {
        let key: FlowKey = "3f1c".into();
        assert_eq!(key, FlowKey::id("3f1c"));
        assert_eq!(key.as_str(), "3f1c");
    }
}
