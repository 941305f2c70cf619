use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an entry-point node, carried in `data.type`.
///
/// Categories only drive presentation. Any string the registry does not know
/// resolves to [`NodeCategory::Util`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Frontend,
    Backend,
    Shared,
    Config,
    Docker,
    Deployment,
    #[default]
    Util,
}

/// Display attributes for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub background_color: &'static str,
    pub border_color: &'static str,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 7] = [
        NodeCategory::Frontend,
        NodeCategory::Backend,
        NodeCategory::Shared,
        NodeCategory::Config,
        NodeCategory::Docker,
        NodeCategory::Deployment,
        NodeCategory::Util,
    ];

    /// Exact lookup, `None` for strings outside the registry
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Lookup with fallback to the default category
    pub fn from_type(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Frontend => "frontend",
            NodeCategory::Backend => "backend",
            NodeCategory::Shared => "shared",
            NodeCategory::Config => "config",
            NodeCategory::Docker => "docker",
            NodeCategory::Deployment => "deployment",
            NodeCategory::Util => "util",
        }
    }

    pub fn style(&self) -> NodeStyle {
        let (background_color, border_color) = match self {
            NodeCategory::Frontend => ("#D4F1F9", "#05445E"),
            NodeCategory::Backend => ("#FFE6E6", "#800000"),
            NodeCategory::Shared => ("#FFF2CC", "#9C6500"),
            NodeCategory::Config => ("#E6F5D0", "#2E6E00"),
            NodeCategory::Docker => ("#E1D5E7", "#6C0099"),
            NodeCategory::Deployment => ("#FFCCFF", "#990099"),
            NodeCategory::Util => ("#DAE8FC", "#0050EF"),
        };
        NodeStyle {
            background_color,
            border_color,
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_parse() {
        for category in NodeCategory::ALL {
            assert_eq!(NodeCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_util() {
        assert_eq!(NodeCategory::parse("database"), None);
        assert_eq!(NodeCategory::from_type("database"), NodeCategory::Util);
        assert_eq!(NodeCategory::from_type(""), NodeCategory::Util);
    }

    #[test]
    fn test_style_lookup() {
        let style = NodeCategory::Backend.style();
        assert_eq!(style.background_color, "#FFE6E6");
        assert_eq!(style.border_color, "#800000");
        assert_eq!(
            NodeCategory::from_type("nonsense").style(),
            NodeCategory::Util.style()
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&NodeCategory::Deployment).unwrap();
        assert_eq!(json, "\"deployment\"");
    }
}
