//! Unit tests for game definition validation
//!
//! Covers the required layout, accumulated field errors and their paths,
//! filler categories in both forms, and the goal warning.

use apmcc_schemas::{
    parse_str, DefinitionValidator, ErrorKind, Format, Outcome, SchemaValidator, ValidationReport,
    ValidationWarning, NO_GOAL_WARNING,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::path::Path;

fn validate(definition: &Value) -> ValidationReport {
    DefinitionValidator::new().validate(definition)
}

fn validate_yaml(source: &str) -> ValidationReport {
    let value = parse_str(source, Format::Yaml, Path::new("test.yaml")).unwrap();
    validate(&value)
}

fn error_paths(report: &ValidationReport) -> Vec<&str> {
    report.errors.iter().map(|e| e.path.as_str()).collect()
}

fn game() -> Value {
    json!({
        "name": "Game",
        "progression_items": ["Key"],
        "chapters": [{"name": "Ch1", "challenges": [{"name": "Boss", "goal": true}]}]
    })
}

#[cfg(test)]
mod well_formed_definitions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_definition_with_goal() {
        let report = validate(&game());
        assert_eq!(report.outcome(), Outcome::Valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_minimal_definition_without_goal() {
        let report = validate(&json!({
            "name": "Game",
            "progression_items": ["Key"],
            "chapters": [{"name": "Ch1", "challenges": [{"name": "Boss"}]}]
        }));

        assert_eq!(report.outcome(), Outcome::Valid);
        assert_eq!(report.warnings, vec![ValidationWarning::general(NO_GOAL_WARNING)]);
        assert!(report.warnings[0].message.contains("goal"));
    }

    #[test]
    fn test_full_yaml_definition() {
        let report = validate_yaml(
            r#"
name: Tower Climb
description: Clear every floor
progression_items:
  - Floor Key
  - Lantern
chapters:
  - name: Ground Floor
    challenges:
      - name: Open the gate
      - name: Defeat the warden
        priority: true
  - name: Rooftop
    challenges:
      - name: Skip the bonus room
        excluded: true
      - name: Beat the tower lord
        goal: true
        excluded: false
filler_item_categories:
  Junk:
    Coin: 5
    Pebble: 0.25
  Traps:
    weight: 2
    include_confirmation_locations: true
    items:
      - Slowness
      - name: Darkness
        weight: 0.5
"#,
        );

        assert_eq!(report, ValidationReport::default());
    }

    #[test]
    fn test_bundled_sample_definition() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../definitions/tower_climb.yaml");
        let document = apmcc_schemas::DefinitionLoader::new().load(&path).unwrap();

        let report = validate(&document.value);
        assert_eq!(report, ValidationReport::default());
        assert_eq!(
            DefinitionValidator::new().validate_strict(&document.value),
            ValidationReport::default()
        );
    }

    #[test]
    fn test_empty_progression_items_is_accepted() {
        let mut definition = game();
        definition["progression_items"] = json!([]);
        let report = validate(&definition);
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_conflicting_flags_are_not_rejected() {
        let mut definition = game();
        definition["chapters"][0]["challenges"][0]["excluded"] = json!(true);
        definition["chapters"][0]["challenges"][0]["priority"] = json!(true);
        assert!(validate(&definition).is_valid());
    }

    #[test]
    fn test_unknown_keys_tolerated_in_standard_mode() {
        let mut definition = game();
        definition["author"] = json!("someone");
        definition["chapters"][0]["color"] = json!("red");
        assert!(validate(&definition).is_valid());
    }
}

#[cfg(test)]
mod structural_errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_non_mapping_roots() {
        for root in [json!(null), json!("Game"), json!(42), json!([1, 2]), json!(true)] {
            let report = validate(&root);
            assert_eq!(report.errors.len(), 1, "root: {}", root);
            assert_eq!(report.errors[0].path, "$");
            assert_eq!(report.errors[0].kind, ErrorKind::Structural);
            assert!(report.warnings.is_empty());
        }
    }

    #[test]
    fn test_empty_yaml_document() {
        let report = validate_yaml("");
        assert_eq!(error_paths(&report), vec!["$"]);
    }

    #[test]
    fn test_root_sequence_from_yaml() {
        let report = validate_yaml("- name: Game\n- name: Other\n");
        assert_eq!(error_paths(&report), vec!["$"]);
        assert_eq!(report.errors[0].violation.as_ref().unwrap().actual, "sequence");
    }
}

#[cfg(test)]
mod field_errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chapter_without_challenges() {
        let report = validate(&json!({
            "name": "Game",
            "progression_items": ["Key"],
            "chapters": [{"name": "Ch1", "challenges": []}]
        }));

        assert_eq!(report.outcome(), Outcome::Invalid);
        assert_eq!(error_paths(&report), vec!["chapters[0].challenges"]);
        assert_eq!(report.errors[0].kind, ErrorKind::Empty);
        assert_eq!(report.errors[0].message, "must contain at least one challenge");
    }

    #[test]
    fn test_negative_filler_weight() {
        let mut definition = game();
        definition["filler_item_categories"] = json!({"Junk": {"Coin": -1}});

        let report = validate(&definition);
        assert_eq!(error_paths(&report), vec!["filler_item_categories.Junk.Coin"]);
        assert_eq!(report.errors[0].kind, ErrorKind::NonPositive);
        assert_eq!(report.errors[0].message, "weight must be positive");
    }

    #[test]
    fn test_zero_and_non_numeric_weights() {
        let mut definition = game();
        definition["filler_item_categories"] = json!({"Junk": {"Coin": 0, "Gem": "heavy", "Ore": 3}});

        let report = validate(&definition);
        assert_eq!(
            error_paths(&report),
            vec!["filler_item_categories.Junk.Coin", "filler_item_categories.Junk.Gem"]
        );
        assert_eq!(report.errors[0].kind, ErrorKind::NonPositive);
        assert_eq!(report.errors[1].kind, ErrorKind::WrongType);
    }

    #[test]
    fn test_empty_chapters() {
        let mut definition = game();
        definition["chapters"] = json!([]);

        let report = validate(&definition);
        assert_eq!(error_paths(&report), vec!["chapters"]);
        assert_eq!(report.errors[0].message, "must contain at least one chapter");
        // nothing left to carry a goal
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_missing_required_fields() {
        let report = validate(&json!({"description": "nothing else"}));
        assert_eq!(error_paths(&report), vec!["name", "progression_items", "chapters"]);
        assert!(report.errors.iter().all(|e| e.kind == ErrorKind::MissingField));
    }

    #[test]
    fn test_wrong_types_at_top_level() {
        let report = validate(&json!({
            "name": "",
            "progression_items": "Key",
            "chapters": {"name": "Ch1"},
            "description": 5
        }));

        assert_eq!(
            error_paths(&report),
            vec!["name", "description", "progression_items", "chapters"]
        );
        assert_eq!(report.errors[0].kind, ErrorKind::Empty);
        assert!(report.errors[1..].iter().all(|e| e.kind == ErrorKind::WrongType));
    }

    #[test]
    fn test_duplicate_progression_items_warn() {
        let mut definition = game();
        definition["progression_items"] = json!(["Key", "Lamp", "Key", "Key"]);

        let report = validate(&definition);
        assert_eq!(report.outcome(), Outcome::Valid);
        assert_eq!(
            report.warnings,
            vec![
                ValidationWarning::at("progression_items[2]", "duplicate progression item 'Key'"),
                ValidationWarning::at("progression_items[3]", "duplicate progression item 'Key'"),
            ]
        );
    }

    #[test]
    fn test_bad_progression_items() {
        let mut definition = game();
        definition["progression_items"] = json!(["Key", "", 3, "  "]);

        let report = validate(&definition);
        assert_eq!(
            error_paths(&report),
            vec!["progression_items[1]", "progression_items[2]", "progression_items[3]"]
        );
    }

    #[test]
    fn test_yaml_1_1_booleans_are_not_flags() {
        let report = validate_yaml(
            r#"
name: Game
progression_items: [Key]
chapters:
  - name: Ch1
    challenges:
      - name: Boss
        goal: yes
      - name: Mini
        priority: "true"
      - name: Side
        excluded: 1
"#,
        );

        assert_eq!(
            error_paths(&report),
            vec![
                "chapters[0].challenges[0].goal",
                "chapters[0].challenges[1].priority",
                "chapters[0].challenges[2].excluded",
            ]
        );
        assert!(report.errors.iter().all(|e| e.kind == ErrorKind::WrongType));
        assert_eq!(report.warnings, vec![ValidationWarning::general(NO_GOAL_WARNING)]);
    }

    #[test]
    fn test_chapter_and_challenge_shapes() {
        let report = validate(&json!({
            "name": "Game",
            "progression_items": [],
            "chapters": [
                "Ch1",
                {"challenges": [{"goal": true}, "Boss"]},
                {"name": "Ch3"}
            ]
        }));

        assert_eq!(
            error_paths(&report),
            vec![
                "chapters[0]",
                "chapters[1].name",
                "chapters[1].challenges[0].name",
                "chapters[1].challenges[1]",
                "chapters[2].challenges",
            ]
        );
        // the nameless challenge still flags a goal
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_filler_categories_must_be_mappings() {
        let mut definition = game();
        definition["filler_item_categories"] = json!({"Junk": ["Coin"], "Gems": {"Ruby": 1}});
        let report = validate(&definition);
        assert_eq!(error_paths(&report), vec!["filler_item_categories.Junk"]);

        definition["filler_item_categories"] = json!(["Junk"]);
        let report = validate(&definition);
        assert_eq!(error_paths(&report), vec!["filler_item_categories"]);
    }
}

#[cfg(test)]
mod structured_filler_categories {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structured_category_errors() {
        let mut definition = game();
        definition["filler_item_categories"] = json!({
            "Traps": {
                "items": ["Slow", "", {"name": "Dark", "weight": 0}, {"weight": 2}, 7],
                "weight": -3,
                "include_confirmation_locations": "yes"
            }
        });

        let report = validate(&definition);
        assert_eq!(
            error_paths(&report),
            vec![
                "filler_item_categories.Traps.items[1]",
                "filler_item_categories.Traps.items[2].weight",
                "filler_item_categories.Traps.items[3].name",
                "filler_item_categories.Traps.items[4]",
                "filler_item_categories.Traps.weight",
                "filler_item_categories.Traps.include_confirmation_locations",
            ]
        );
    }

    #[test]
    fn test_structured_category_needs_items() {
        let mut definition = game();
        definition["filler_item_categories"] = json!({"Traps": {"items": []}});

        let report = validate(&definition);
        assert_eq!(error_paths(&report), vec!["filler_item_categories.Traps.items"]);
        assert_eq!(report.errors[0].message, "must contain at least one item");
    }
}

#[cfg(test)]
mod strict_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_keys_rejected_at_every_level() {
        let definition = json!({
            "name": "Game",
            "version": 1,
            "progression_items": ["Key"],
            "chapters": [{
                "name": "Ch1",
                "color": "red",
                "challenges": [{"name": "Boss", "goal": true, "hidden": false}]
            }],
            "filler_item_categories": {
                "Traps": {"items": [{"name": "Slow", "rarity": 2}], "stack": true}
            }
        });

        let report = DefinitionValidator::new().validate_strict(&definition);
        assert_eq!(
            error_paths(&report),
            vec![
                "chapters[0].challenges[0].hidden",
                "chapters[0].color",
                "filler_item_categories.Traps.items[0].rarity",
                "filler_item_categories.Traps.stack",
                "version",
            ]
        );
        assert!(report.errors.iter().all(|e| e.kind == ErrorKind::UnknownField));
    }

    #[test]
    fn test_well_formed_definition_passes_strict() {
        let report = DefinitionValidator::new().validate_strict(&game());
        assert_eq!(report, ValidationReport::default());
    }
}

#[cfg(test)]
mod document_order {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_errors_follow_document_order() {
        let report = validate_yaml(
            r#"
filler_item_categories:
  Zeta:
    Last: -1
  Alpha:
    First: 0
chapters:
  - name: Ch1
    challenges: []
  - name: ""
    challenges:
      - name: Boss
        goal: "no"
progression_items: [""]
"#,
        );

        assert_eq!(
            error_paths(&report),
            vec![
                "name",
                "progression_items[0]",
                "chapters[0].challenges",
                "chapters[1].name",
                "chapters[1].challenges[0].goal",
                "filler_item_categories.Zeta.Last",
                "filler_item_categories.Alpha.First",
            ]
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let value = json!({"name": 1, "chapters": [{"challenges": [{}]}]});
        let validator = DefinitionValidator::new();
        assert_eq!(validator.validate(&value), validator.validate(&value));
    }
}

#[cfg(test)]
mod field_paths {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_containing_dots_get_distinct_paths() {
        let report = validate_yaml(
            r#"
name: Game
progression_items: [Key]
chapters:
  - name: Ch1
    challenges:
      - name: Boss
        goal: true
filler_item_categories: {Junk.Coin: {Gem: -1}, Junk: {Coin.Gem: -1}}
"#,
        );

        assert_eq!(
            error_paths(&report),
            vec![
                r#"filler_item_categories["Junk.Coin"].Gem"#,
                r#"filler_item_categories.Junk["Coin.Gem"]"#,
            ]
        );
        assert!(report.errors.iter().all(|e| e.message == "weight must be positive"));
    }

    #[test]
    fn test_item_names_with_punctuation() {
        let mut definition = game();
        definition["filler_item_categories"] = json!({
            "Junk": {"Mr. Saturn": 0, "1.5x Speed": 2, "": 1, "Plain": "heavy"}
        });

        let report = validate(&definition);
        assert_eq!(
            error_paths(&report),
            vec![
                r#"filler_item_categories.Junk["Mr. Saturn"]"#,
                "filler_item_categories.Junk.Plain",
            ]
        );
        assert_eq!(report.errors[1].message, "weight must be a number");
    }

    #[test]
    fn test_field_names_in_messages_use_the_raw_key() {
        let mut definition = game();
        definition["filler_item_categories"] = json!({"Junk.Box": {"items": [{"name": 7}]}});

        let report = validate(&definition);
        assert_eq!(
            error_paths(&report),
            vec![r#"filler_item_categories["Junk.Box"].items[0].name"#]
        );
        assert_eq!(report.errors[0].message, "name must be a string");
    }
}
