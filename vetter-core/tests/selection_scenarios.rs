use std::io::Write;

use vetter_common::{DependencyMetadata, ModuleComponentIdentifier, SelectionConfig};
use vetter_core::{ComponentSelection, ComponentSelectionRules, RuleVerdict, SelectionPass};

fn request() -> DependencyMetadata {
    DependencyMetadata::new("com.example:lib:[1.0,2.0)".parse().unwrap())
}

fn candidate() -> ModuleComponentIdentifier {
    "com.example:lib:1.5".parse().unwrap()
}

#[test]
fn untouched_candidate_is_accepted() {
    let metadata = request();
    let selection = ComponentSelection::new(&metadata, candidate());
    assert!(!selection.is_rejected());
}

#[test]
fn exclusion_rule_rejects_candidate() {
    let metadata = request();
    let mut selection = ComponentSelection::new(&metadata, candidate());
    selection.reject("excluded by exclusion rule");
    assert!(selection.is_rejected());
    assert_eq!(selection.rejection_reason(), Some("excluded by exclusion rule"));
}

#[test]
fn two_rules_in_sequence_keep_last_reason() {
    let mut rules = ComponentSelectionRules::new();
    rules
        .all(|_| RuleVerdict::Reject("reason A".to_string()))
        .all(|_| RuleVerdict::Reject("reason B".to_string()));

    let metadata = request();
    let mut selection = ComponentSelection::new(&metadata, candidate());
    rules.apply(&mut selection);
    assert_eq!(selection.rejection_reason(), Some("reason B"));
}

#[test]
fn config_loaded_from_env_drives_a_pass() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
rejected_qualifiers = ["SNAPSHOT"]

[[reject]]
module = "com.example:lib"
versions = "[1.3,1.4]"
reason = "regression in 1.3.x"
"#,
    )
    .unwrap();
    std::env::set_var("VETTER_RULES", file.path());

    let config = SelectionConfig::load().unwrap();
    let rules = ComponentSelectionRules::from_config(&config).unwrap();
    let metadata = request();
    let offered = ["1.2", "1.3.2", "1.5-SNAPSHOT", "1.5"]
        .into_iter()
        .map(|v| ModuleComponentIdentifier::new("com.example", "lib", v));

    let report = SelectionPass::new(&rules).evaluate(&metadata, offered);

    let accepted: Vec<String> = report.accepted().map(ToString::to_string).collect();
    assert_eq!(accepted, ["com.example:lib:1.2", "com.example:lib:1.5"]);
    let reasons: Vec<&str> = report
        .rejected()
        .filter_map(|v| v.rejection_reason.as_deref())
        .collect();
    assert_eq!(reasons[0], "regression in 1.3.x");
    assert!(reasons[1].contains("SNAPSHOT"));
}
