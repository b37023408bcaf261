//! Golden tests: run every filter over the cases in fixtures/golden.json.
//!
//! Each case names a filter type, a configuration (same keys as the TOML
//! config file), the input lines and the words expected across all lines.

use std::path::PathBuf;

use serde::Deserialize;
use tmspell_core::FilterType;
use tmspell_filter::{FilterConfig, new_filter};

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    filter: FilterType,
    config: FilterConfig,
    lines: Vec<String>,
    words: Vec<String>,
}

fn load_cases() -> Vec<Case> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/golden.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[test]
fn golden_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let mut filter = new_filter(case.filter, &case.config);
        let mut got = Vec::new();
        for text in &case.lines {
            let line: Vec<char> = text.chars().collect();
            got.extend(filter.words(&line).map(|w| w.text(&line)));
        }
        if got != case.words {
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                case.name, case.words, got
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} golden cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn config_from_toml_matches_json() {
    let toml = r#"
        boundary-characters = "'"
        tex-command-filter = "emph p"
    "#;
    let config = FilterConfig::from_toml_str(toml).unwrap();
    let json: FilterConfig =
        serde_json::from_str(r#"{ "boundary-characters": "'", "tex-command-filter": "emph p" }"#)
            .unwrap();
    assert_eq!(config, json);
}
