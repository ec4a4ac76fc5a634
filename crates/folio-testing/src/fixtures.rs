//! Catalog fixtures.
//!
//! The scenario catalog has six projects, ids "1" to "6", with categories
//! `[dashboard, analysis, visualization, analysis, dashboard, visualization]`.

use anyhow::Result;
use folio_types::{Category, Project};
use std::path::Path;

pub const SCENARIO_CATEGORIES: [Category; 6] = [
    Category::Dashboard,
    Category::Analysis,
    Category::Visualization,
    Category::Analysis,
    Category::Dashboard,
    Category::Visualization,
];

pub fn scenario_projects() -> Vec<Project> {
    SCENARIO_CATEGORIES
        .into_iter()
        .enumerate()
        .map(|(i, category)| {
            let n = i + 1;
            Project::new(
                n.to_string(),
                format!("Project {}", n),
                format!("Scenario project number {}", n),
                category,
                format!("https://img.example.com/{}.png", n),
            )
            .with_tools(scenario_tools(n))
            .with_objectives([format!("Objective for {}", n)])
            .with_methodology(format!("Method for {}", n))
            .with_findings([format!("Finding {}a", n), format!("Finding {}b", n)])
            .with_conclusion(format!("Conclusion for {}", n))
        })
        .collect()
}

/// Project n carries n tools, so cards exercise the "+N" badge
fn scenario_tools(n: usize) -> Vec<String> {
    ["Python", "SQL", "Tableau", "R", "Excel", "Power BI"]
        .into_iter()
        .take(n)
        .map(String::from)
        .collect()
}

/// Write `projects` as a JSON array
pub fn write_json_catalog(path: &Path, projects: &[Project]) -> Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(projects)?)?;
    Ok(())
}

/// Write `projects` as a TOML document with `[[projects]]` tables
pub fn write_toml_catalog(path: &Path, projects: &[Project]) -> Result<()> {
    let mut document = toml::Table::new();
    document.insert(
        "projects".to_string(),
        toml::Value::try_from(projects)?,
    );
    std::fs::write(path, toml::to_string(&document)?)?;
    Ok(())
}
