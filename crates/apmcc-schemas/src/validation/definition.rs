//! Game definition validation
//!
//! A single top-down pass over the parsed document. Every field is checked
//! independently and failures are accumulated rather than returned early, so
//! one run reports every problem in the file. Errors come out in document
//! order: the top-level fields in the order `name`, `progression_items`,
//! `chapters`, `filler_item_categories`, sequence entries ascending and
//! mapping entries in file order.
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

use crate::validation::base::{SchemaValidator, ValidationContext, ValidationHelpers};
use crate::validation::error::{
    ErrorKind, ValidationError, ValidationReport, ValidationResult, ValidationWarning,
};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Warning raised when no challenge is flagged as the goal
pub const NO_GOAL_WARNING: &str = "no goal challenge found";

const DEFINITION_FIELDS: &[&str] = &[
    "name",
    "description",
    "progression_items",
    "chapters",
    "filler_item_categories",
];
const CHAPTER_FIELDS: &[&str] = &["name", "challenges"];
const CHALLENGE_FLAGS: &[&str] = &["goal", "excluded", "priority"];
const CHALLENGE_FIELDS: &[&str] = &["name", "goal", "excluded", "priority"];
const STRUCTURED_CATEGORY_FIELDS: &[&str] = &["items", "weight", "include_confirmation_locations"];
const FILLER_ITEM_FIELDS: &[&str] = &["name", "weight"];

/// Validator for chapter/challenge game definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionValidator;

/// Mutable state of one validation pass
#[derive(Default)]
struct Pass {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
    goal_found: bool,
}

impl Pass {
    /// Keep the value on success, accumulate the error on failure
    fn record<T>(&mut self, result: ValidationResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.push(error);
                None
            }
        }
    }

    fn extend(&mut self, errors: Vec<ValidationError>) {
        self.errors.extend(errors);
    }
}

impl DefinitionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Required non-empty `name` of the mapping at `ctx`
    fn check_name(&self, object: &Map<String, Value>, ctx: &ValidationContext, pass: &mut Pass) {
        if let Some(name) = pass.record(ValidationHelpers::require(object, "name", ctx)) {
            pass.record(ValidationHelpers::non_empty_string(name, &ctx.child("name")));
        }
    }

    fn check_description(&self, root: &Map<String, Value>, ctx: &ValidationContext, pass: &mut Pass) {
        match root.get("description") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => pass.extend(vec![ValidationError::new(
                ctx.child("description").path,
                ErrorKind::WrongType,
                "description must be a string",
            )
            .with_violation("string", ValidationHelpers::type_name(other))]),
        }
    }

    fn check_progression_items(&self, root: &Map<String, Value>, ctx: &ValidationContext, pass: &mut Pass) {
        let Some(value) = pass.record(ValidationHelpers::require(root, "progression_items", ctx)) else {
            return;
        };

        let items_ctx = ctx.child("progression_items");
        let Some(items) = pass.record(ValidationHelpers::sequence(value, &items_ctx)) else {
            return;
        };

        let mut seen = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            let item_ctx = items_ctx.child_index(index);
            match item {
                Value::String(text) if !text.trim().is_empty() => {
                    if !seen.insert(text.as_str()) {
                        pass.warnings.push(ValidationWarning::at(
                            item_ctx.path,
                            format!("duplicate progression item '{}'", text),
                        ));
                    }
                }
                _ => pass.extend(vec![ValidationError::new(
                    item_ctx.path,
                    ErrorKind::WrongType,
                    "progression item must be a non-empty string",
                )
                .with_violation("non-empty string", describe(item))]),
            }
        }
    }

    fn check_chapters(&self, root: &Map<String, Value>, ctx: &ValidationContext, pass: &mut Pass) {
        let Some(value) = pass.record(ValidationHelpers::require(root, "chapters", ctx)) else {
            return;
        };

        let chapters_ctx = ctx.child("chapters");
        let Some(chapters) = pass.record(ValidationHelpers::non_empty_sequence(value, "chapter", &chapters_ctx))
        else {
            return;
        };

        for (index, chapter) in chapters.iter().enumerate() {
            self.check_chapter(chapter, &chapters_ctx.child_index(index), pass);
        }
    }

    fn check_chapter(&self, value: &Value, ctx: &ValidationContext, pass: &mut Pass) {
        let Some(chapter) = pass.record(expect_mapping(value, "chapter", ctx)) else {
            return;
        };

        self.check_name(chapter, ctx, pass);

        if let Some(challenges) = pass.record(ValidationHelpers::require(chapter, "challenges", ctx)) {
            let challenges_ctx = ctx.child("challenges");
            if let Some(challenges) =
                pass.record(ValidationHelpers::non_empty_sequence(challenges, "challenge", &challenges_ctx))
            {
                for (index, challenge) in challenges.iter().enumerate() {
                    self.check_challenge(challenge, &challenges_ctx.child_index(index), pass);
                }
            }
        }

        pass.extend(ValidationHelpers::unknown_fields(chapter, CHAPTER_FIELDS, ctx));
    }

    fn check_challenge(&self, value: &Value, ctx: &ValidationContext, pass: &mut Pass) {
        let Some(challenge) = pass.record(expect_mapping(value, "challenge", ctx)) else {
            return;
        };

        self.check_name(challenge, ctx, pass);

        for flag in CHALLENGE_FLAGS {
            let Some(value) = challenge.get(*flag) else {
                continue;
            };
            let is_set = pass.record(ValidationHelpers::boolean(value, &ctx.child(flag)));
            if *flag == "goal" && is_set == Some(true) {
                pass.goal_found = true;
            }
        }

        pass.extend(ValidationHelpers::unknown_fields(challenge, CHALLENGE_FIELDS, ctx));
    }

    fn check_filler_categories(&self, root: &Map<String, Value>, ctx: &ValidationContext, pass: &mut Pass) {
        let value = match root.get("filler_item_categories") {
            None | Some(Value::Null) => return,
            Some(value) => value,
        };

        let categories_ctx = ctx.child("filler_item_categories");
        let Some(categories) = pass.record(ValidationHelpers::mapping(value, &categories_ctx)) else {
            return;
        };

        for (name, category) in categories {
            let category_ctx = categories_ctx.child(name);
            let Some(category) = pass.record(expect_mapping(category, "filler item category", &category_ctx))
            else {
                continue;
            };

            if category.contains_key("items") {
                self.check_structured_category(category, &category_ctx, pass);
            } else {
                for (item, weight) in category {
                    pass.record(ValidationHelpers::positive_weight(weight, &category_ctx.child(item)));
                }
            }
        }
    }

    fn check_structured_category(&self, category: &Map<String, Value>, ctx: &ValidationContext, pass: &mut Pass) {
        let items_ctx = ctx.child("items");
        if let Some(items) = category.get("items") {
            if let Some(items) = pass.record(ValidationHelpers::non_empty_sequence(items, "item", &items_ctx)) {
                for (index, item) in items.iter().enumerate() {
                    self.check_filler_item(item, &items_ctx.child_index(index), pass);
                }
            }
        }

        if let Some(weight) = category.get("weight") {
            pass.record(ValidationHelpers::positive_weight(weight, &ctx.child("weight")));
        }

        if let Some(flag) = category.get("include_confirmation_locations") {
            pass.record(ValidationHelpers::boolean(flag, &ctx.child("include_confirmation_locations")));
        }

        pass.extend(ValidationHelpers::unknown_fields(category, STRUCTURED_CATEGORY_FIELDS, ctx));
    }

    fn check_filler_item(&self, value: &Value, ctx: &ValidationContext, pass: &mut Pass) {
        match value {
            Value::String(_) => {
                pass.record(ValidationHelpers::non_empty_string(value, ctx));
            }
            Value::Object(item) => {
                self.check_name(item, ctx, pass);
                if let Some(weight) = item.get("weight") {
                    pass.record(ValidationHelpers::positive_weight(weight, &ctx.child("weight")));
                }
                pass.extend(ValidationHelpers::unknown_fields(item, FILLER_ITEM_FIELDS, ctx));
            }
            other => pass.extend(vec![ValidationError::new(
                &ctx.path,
                ErrorKind::WrongType,
                "filler item must be an item name or a mapping with a name",
            )
            .with_violation("string or mapping", ValidationHelpers::type_name(other))]),
        }
    }
}

impl SchemaValidator for DefinitionValidator {
    type Input = Value;

    fn validate_with_context(&self, input: &Value, context: &ValidationContext) -> ValidationReport {
        let Some(root) = input.as_object() else {
            let error = ValidationError::new(
                &context.path,
                ErrorKind::Structural,
                "definition must be a mapping at the top level",
            )
            .with_violation("mapping", ValidationHelpers::type_name(input));
            return ValidationReport {
                errors: vec![error],
                warnings: Vec::new(),
            };
        };

        let mut pass = Pass::default();
        self.check_name(root, context, &mut pass);
        self.check_description(root, context, &mut pass);
        self.check_progression_items(root, context, &mut pass);
        self.check_chapters(root, context, &mut pass);
        self.check_filler_categories(root, context, &mut pass);
        pass.extend(ValidationHelpers::unknown_fields(root, DEFINITION_FIELDS, context));

        if !pass.goal_found {
            pass.warnings.push(ValidationWarning::general(NO_GOAL_WARNING));
        }

        ValidationReport {
            errors: pass.errors,
            warnings: pass.warnings,
        }
    }
}

fn expect_mapping<'a>(
    value: &'a Value,
    what: &str,
    ctx: &ValidationContext,
) -> ValidationResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        ValidationError::new(&ctx.path, ErrorKind::WrongType, format!("{} must be a mapping", what))
            .with_violation("mapping", ValidationHelpers::type_name(value))
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "empty string",
        other => ValidationHelpers::type_name(other),
    }
}
