use serde::{Deserialize, Serialize};
use std::fmt;

use super::Category;

/// Catalog entry identifier, stable for the whole session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Immutable portfolio catalog entry
///
/// The detail-only fields (`objectives`, `methodology`, `findings`,
/// `conclusion`, links) default to empty so gallery-only records load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub methodology: String,
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(default)]
    pub conclusion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
}

impl Project {
    /// Minimal gallery entry; detail fields start empty
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            image: image.into(),
            tools: Vec::new(),
            objectives: Vec::new(),
            methodology: String::new(),
            findings: Vec::new(),
            conclusion: String::new(),
            link: None,
            download_link: None,
        }
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_objectives<I, S>(mut self, objectives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objectives = objectives.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_methodology(mut self, methodology: impl Into<String>) -> Self {
        self.methodology = methodology.into();
        self
    }

    pub fn with_findings<I, S>(mut self, findings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.findings = findings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_conclusion(mut self, conclusion: impl Into<String>) -> Self {
        self.conclusion = conclusion.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_download_link(mut self, download_link: impl Into<String>) -> Self {
        self.download_link = Some(download_link.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_record_loads_without_detail_fields() {
        let json = r#"{
            "id": "1",
            "title": "E-commerce Sales Dashboard",
            "description": "Sales trends",
            "category": "dashboard",
            "image": "https://example.com/a.jpg",
            "tools": ["Tableau", "SQL", "Excel"]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, ProjectId::new("1"));
        assert_eq!(project.category, Category::Dashboard);
        assert_eq!(project.tools, vec!["Tableau", "SQL", "Excel"]);
        assert!(project.objectives.is_empty());
        assert!(project.methodology.is_empty());
        assert_eq!(project.download_link, None);
    }

    #[test]
    fn download_link_uses_camel_case_key() {
        let project = Project::new("7", "T", "D", Category::Analysis, "img")
            .with_download_link("/files/report.pdf");
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["downloadLink"], "/files/report.pdf");
        assert!(value.get("link").is_none());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let json = r#"{"id":"1","title":"T","description":"D","category":"charts","image":"i"}"#;
        assert!(serde_json::from_str::<Project>(json).is_err());
    }

    #[test]
    fn duplicate_tools_keep_their_order() {
        let project = Project::new("1", "T", "D", Category::Analysis, "i")
            .with_tools(["Python", "SQL", "Python"]);
        assert_eq!(project.tools, vec!["Python", "SQL", "Python"]);
    }

    #[test]
    fn toml_record_loads() {
        let raw = r#"
            id = "9"
            title = "Churn model"
            description = "Predicts churn"
            category = "analysis"
            image = "https://example.com/c.jpg"
            tools = ["R"]
            downloadLink = "/files/churn.pdf"
        "#;
        let project: Project = toml::from_str(raw).unwrap();
        assert_eq!(project.download_link.as_deref(), Some("/files/churn.pdf"));
    }
}
