//! Assertions over the JSON envelope printed with `--format json`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Ids of the gallery cards, in display order
pub fn visible_ids(json: &Value) -> Result<Vec<String>> {
    let projects = json["content"]["projects"]
        .as_array()
        .context("Expected 'content.projects' array in JSON")?;

    projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            project["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Project {} missing id", i))
        })
        .collect()
}

/// Assert the gallery shows exactly `expected`, in order
pub fn assert_visible_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = visible_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected visible ids {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Assert the active filter tab
pub fn assert_active_filter(json: &Value, expected: &str) -> Result<()> {
    let active = json["content"]["active_filter"]
        .as_str()
        .context("Expected 'content.active_filter' in JSON")?;

    if active != expected {
        anyhow::bail!("Expected active filter {}, got {}", expected, active);
    }
    Ok(())
}

/// Assert which project the detail view shows and on which section
pub fn assert_detail(json: &Value, expected_id: &str, expected_section: &str) -> Result<()> {
    let content = &json["content"];
    let id = content["id"]
        .as_str()
        .context("Expected 'content.id' in JSON")?;
    let section = content["active_section"]
        .as_str()
        .context("Expected 'content.active_section' in JSON")?;

    if id != expected_id || section != expected_section {
        anyhow::bail!(
            "Expected detail {} on {}, got {} on {}",
            expected_id,
            expected_section,
            id,
            section
        );
    }
    Ok(())
}
