use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Project classification shown as a badge and used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Visualization,
    Analysis,
    Dashboard,
}

impl Category {
    /// All categories in tab order
    pub const ALL: [Category; 3] = [
        Category::Visualization,
        Category::Analysis,
        Category::Dashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Visualization => "visualization",
            Category::Analysis => "analysis",
            Category::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visualization" => Ok(Category::Visualization),
            "analysis" => Ok(Category::Analysis),
            "dashboard" => Ok(Category::Dashboard),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

/// Gallery filter: everything, or a single category
///
/// Serialized as a plain string (`"all"`, `"analysis"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter tabs in display order
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Visualization),
        CategoryFilter::Only(Category::Analysis),
        CategoryFilter::Only(Category::Dashboard),
    ];

    /// Whether a project in `category` passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(Category::Visualization) => "Visualization",
            CategoryFilter::Only(Category::Analysis) => "Analysis",
            CategoryFilter::Only(Category::Dashboard) => "Dashboards",
        }
    }

    /// Position of this filter in [`CategoryFilter::TABS`]
    pub fn tab_index(&self) -> usize {
        match self {
            CategoryFilter::All => 0,
            CategoryFilter::Only(Category::Visualization) => 1,
            CategoryFilter::Only(Category::Analysis) => 2,
            CategoryFilter::Only(Category::Dashboard) => 3,
        }
    }

    pub fn next(&self) -> Self {
        Self::TABS[(self.tab_index() + 1) % Self::TABS.len()]
    }

    pub fn previous(&self) -> Self {
        Self::TABS[(self.tab_index() + Self::TABS.len() - 1) % Self::TABS.len()]
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| Error::InvalidFilterValue(s.to_string()))
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tab_by_name() {
        for tab in CategoryFilter::TABS {
            assert_eq!(tab.as_str().parse::<CategoryFilter>(), Ok(tab));
        }
    }

    #[test]
    fn rejects_unknown_filter_value() {
        let err = "reports".parse::<CategoryFilter>().unwrap_err();
        assert_eq!(err, Error::InvalidFilterValue("reports".to_string()));
    }

    #[test]
    fn filter_names_are_case_sensitive() {
        assert!("Analysis".parse::<CategoryFilter>().is_err());
        assert!("ALL".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn all_matches_every_category() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn single_category_matches_only_itself() {
        let filter = CategoryFilter::Only(Category::Analysis);
        assert!(filter.matches(Category::Analysis));
        assert!(!filter.matches(Category::Dashboard));
        assert!(!filter.matches(Category::Visualization));
    }

    #[test]
    fn tab_cycling_wraps_around() {
        assert_eq!(
            CategoryFilter::Only(Category::Dashboard).next(),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::All.previous(),
            CategoryFilter::Only(Category::Dashboard)
        );
    }

    #[test]
    fn filter_serializes_as_plain_string() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Visualization)).unwrap();
        assert_eq!(json, "\"visualization\"");

        let back: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, CategoryFilter::All);

        assert!(serde_json::from_str::<CategoryFilter>("\"charts\"").is_err());
    }
}
