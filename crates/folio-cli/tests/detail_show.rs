//! `folio show`: detail view, sections, and the fallback project.

use assert_cmd::cargo::cargo_bin_cmd;
use folio_testing::{TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn test_show_starts_at_overview() {
    let world = TestWorld::new().with_scenario_catalog();

    let json = world.run_json(&["show", "3"]).unwrap();

    assertions::assert_detail(&json, "3", "overview").unwrap();
    assert_eq!(json["content"]["fell_back"], false);
    assert_eq!(
        json["content"]["body"],
        serde_json::json!({
            "section": "overview",
            "description": "Scenario project number 3",
            "objectives": ["Objective for 3"],
        })
    );
}

#[test]
fn test_show_findings_section() {
    let world = TestWorld::new().with_scenario_catalog();

    let json = world
        .run_json(&["show", "3", "--section", "findings"])
        .unwrap();

    assertions::assert_detail(&json, "3", "findings").unwrap();
    assert_eq!(
        json["content"]["body"]["items"],
        serde_json::json!(["Finding 3a", "Finding 3b"])
    );
}

#[test]
fn test_unknown_id_falls_back_to_showcase() {
    let world = TestWorld::new().with_scenario_catalog();

    let json = world.run_json(&["show", "does-not-exist"]).unwrap();

    assertions::assert_detail(&json, "showcase", "overview").unwrap();
    assert_eq!(json["content"]["fell_back"], true);
    assert_eq!(json["content"]["requested_id"], "does-not-exist");
    assert_eq!(json["badge"]["level"], "warning");

    let links: Vec<&str> = json["content"]["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["label"].as_str().unwrap())
        .collect();
    assert_eq!(links, vec!["View Project", "Download Report"]);
}

#[test]
fn test_showcase_id_outside_user_catalog_is_a_fallback() {
    let world = TestWorld::new().with_scenario_catalog();

    let json = world.run_json(&["show", "showcase"]).unwrap();

    assertions::assert_detail(&json, "showcase", "overview").unwrap();
    assert_eq!(json["content"]["fell_back"], true);
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_configured_default_project_is_fallback() {
    let world = TestWorld::new()
        .with_scenario_catalog()
        .with_config_line("default_project = \"5\"");

    let json = world.run_json(&["show", "nope"]).unwrap();

    assertions::assert_detail(&json, "5", "overview").unwrap();
    assert_eq!(json["content"]["fell_back"], true);
}

#[test]
fn test_missing_default_project_keeps_showcase() {
    let world = TestWorld::new()
        .with_scenario_catalog()
        .with_config_line("default_project = \"404\"");

    let json = world.run_json(&["show", "nope"]).unwrap();
    assertions::assert_detail(&json, "showcase", "overview").unwrap();
}

#[test]
fn test_plain_detail_output() {
    let world = TestWorld::new().with_scenario_catalog();

    let mut cmd = cargo_bin_cmd!("folio");
    world
        .configure_command(&mut cmd)
        .args(["show", "2", "--section", "methodology"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Project 2  [analysis]"))
        .stdout(predicate::str::contains(
            "Overview  [Methodology]  Findings  Conclusion",
        ))
        .stdout(predicate::str::contains("Method for 2"))
        .stdout(predicate::str::contains("folio show 2 --section findings"));
}

#[test]
fn test_unknown_section_is_rejected() {
    let world = TestWorld::new().with_scenario_catalog();

    let mut cmd = cargo_bin_cmd!("folio");
    world
        .configure_command(&mut cmd)
        .args(["show", "2", "--section", "appendix"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("appendix"));
}
