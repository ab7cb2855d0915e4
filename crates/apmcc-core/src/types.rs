//! Typed domain model for game definitions
//!
//! These types are built from a parsed document tree that has already passed
//! validation. Building them from an unvalidated tree is allowed but reports
//! the first shape mismatch only; use the schemas crate for full diagnostics.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default weight for filler categories and items that do not declare one
pub const DEFAULT_WEIGHT: f64 = 1.0;

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// A single task within a chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Challenge name, unique within its chapter by convention
    pub name: String,

    /// Completing this challenge completes the game
    #[serde(default)]
    pub goal: bool,

    /// The randomizer should never place progression here
    #[serde(default)]
    pub excluded: bool,

    /// The randomizer should prefer progression here
    #[serde(default)]
    pub priority: bool,
}

/// An ordered unit of progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter name
    pub name: String,

    /// Challenges in document order
    #[serde(default)]
    pub challenges: Vec<Challenge>,
}

impl Chapter {
    /// Challenges flagged as goal
    pub fn goal_challenges(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter().filter(|c| c.goal)
    }

    /// Challenges flagged as excluded
    pub fn excluded_challenges(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter().filter(|c| c.excluded)
    }

    /// Challenges flagged as priority
    pub fn priority_challenges(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter().filter(|c| c.priority)
    }
}

/// A weighted non-progression item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillerItem {
    pub name: String,
    pub weight: f64,
}

/// A weighted pool of filler items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillerItemCategory {
    /// Category name (the mapping key in the definition file)
    pub name: String,

    /// Relative weight of the whole category
    pub weight: f64,

    /// Whether receiving each item should also be a location
    pub include_confirmation_locations: bool,

    /// Items in document order
    pub items: Vec<FillerItem>,
}

/// The complete game definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameDefinition {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Items required to advance between chapters
    pub progression_items: Vec<String>,

    pub chapters: Vec<Chapter>,

    pub filler_item_categories: Vec<FillerItemCategory>,
}

/// Headline numbers for a definition, used for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionSummary {
    pub name: String,
    pub chapter_count: usize,
    pub challenge_count: usize,
    pub goal_count: usize,
    pub progression_items: Vec<String>,
    pub filler_categories: Vec<String>,
}

#[derive(Deserialize)]
struct RawDefinition {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    progression_items: Vec<String>,
    #[serde(default)]
    chapters: Vec<Chapter>,
    #[serde(default)]
    filler_item_categories: Option<Map<String, Value>>,
}

// `items` wins: a mapping holding an `items` key is the structured form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Structured {
        items: Vec<RawFillerItem>,
        #[serde(default = "default_weight")]
        weight: f64,
        #[serde(default)]
        include_confirmation_locations: bool,
    },
    WeightTable(Map<String, Value>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFillerItem {
    Name(String),
    Detailed {
        name: String,
        #[serde(default = "default_weight")]
        weight: f64,
    },
}

impl From<RawFillerItem> for FillerItem {
    fn from(raw: RawFillerItem) -> Self {
        match raw {
            RawFillerItem::Name(name) => FillerItem {
                name,
                weight: DEFAULT_WEIGHT,
            },
            RawFillerItem::Detailed { name, weight } => FillerItem { name, weight },
        }
    }
}

impl FillerItemCategory {
    fn from_raw(name: &str, value: &Value) -> Result<Self> {
        let raw: RawCategory = serde_json::from_value(value.clone()).map_err(|e| Error::Definition {
            message: format!("filler category '{}' has an unexpected shape", name),
            source: Some(e.into()),
        })?;

        match raw {
            RawCategory::Structured {
                items,
                weight,
                include_confirmation_locations,
            } => Ok(Self {
                name: name.to_string(),
                weight,
                include_confirmation_locations,
                items: items.into_iter().map(FillerItem::from).collect(),
            }),
            RawCategory::WeightTable(table) => {
                let items = table
                    .iter()
                    .map(|(item, weight)| {
                        weight
                            .as_f64()
                            .map(|weight| FillerItem {
                                name: item.clone(),
                                weight,
                            })
                            .ok_or_else(|| {
                                Error::definition(format!(
                                    "weight of '{}' in filler category '{}' is not a number",
                                    item, name
                                ))
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(Self {
                    name: name.to_string(),
                    weight: DEFAULT_WEIGHT,
                    include_confirmation_locations: false,
                    items,
                })
            }
        }
    }
}

impl GameDefinition {
    /// Build a typed definition from a parsed document tree
    pub fn from_value(value: &Value) -> Result<Self> {
        let raw: RawDefinition = serde_json::from_value(value.clone()).map_err(|e| Error::Definition {
            message: "document does not match the definition layout".to_string(),
            source: Some(e.into()),
        })?;

        let filler_item_categories = raw
            .filler_item_categories
            .iter()
            .flatten()
            .map(|(name, category)| FillerItemCategory::from_raw(name, category))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            definition = %raw.name,
            chapters = raw.chapters.len(),
            filler_categories = filler_item_categories.len(),
            "Built typed game definition"
        );

        Ok(Self {
            name: raw.name,
            description: raw.description,
            progression_items: raw.progression_items,
            chapters: raw.chapters,
            filler_item_categories,
        })
    }

    /// Total number of challenges across all chapters
    pub fn total_challenges(&self) -> usize {
        self.chapters.iter().map(|c| c.challenges.len()).sum()
    }

    /// All goal challenges across all chapters, in document order
    pub fn goal_challenges(&self) -> Vec<&Challenge> {
        self.chapters.iter().flat_map(Chapter::goal_challenges).collect()
    }

    /// All excluded challenges across all chapters, in document order
    pub fn excluded_challenges(&self) -> Vec<&Challenge> {
        self.chapters.iter().flat_map(Chapter::excluded_challenges).collect()
    }

    /// All priority challenges across all chapters, in document order
    pub fn priority_challenges(&self) -> Vec<&Challenge> {
        self.chapters.iter().flat_map(Chapter::priority_challenges).collect()
    }

    /// All filler items from all categories
    pub fn all_filler_items(&self) -> Vec<&FillerItem> {
        self.filler_item_categories
            .iter()
            .flat_map(|c| c.items.iter())
            .collect()
    }

    pub fn summary(&self) -> DefinitionSummary {
        DefinitionSummary {
            name: self.name.clone(),
            chapter_count: self.chapters.len(),
            challenge_count: self.total_challenges(),
            goal_count: self.goal_challenges().len(),
            progression_items: self.progression_items.clone(),
            filler_categories: self
                .filler_item_categories
                .iter()
                .map(|c| c.name.clone())
                .collect(),
        }
    }
}
