//! apmcc Core - Domain model for chapter/challenge game definitions
//!
//! This crate provides the typed representation of a game definition:
//! chapters of challenges, progression items and weighted filler pools.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror` and `anyhow`
//! - **Core Types**: `GameDefinition`, `Chapter`, `Challenge`, filler categories
//! - **Generation**: placeholder entry point for turning a definition into a game
//!
//! # Example
//!
//! ```
//! use apmcc_core::GameDefinition;
//! use serde_json::json;
//!
//! let definition = GameDefinition::from_value(&json!({
//!     "name": "Game",
//!     "progression_items": ["Key"],
//!     "chapters": [{"name": "Ch1", "challenges": [{"name": "Boss", "goal": true}]}]
//! })).unwrap();
//!
//! assert_eq!(definition.total_challenges(), 1);
//! assert_eq!(definition.goal_challenges().len(), 1);
//! ```

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Challenge, Chapter, DefinitionSummary, FillerItem, FillerItemCategory, GameDefinition,
    DEFAULT_WEIGHT,
};

/// Placeholder generate function
///
/// The output format of a generated game has not been designed yet, so this
/// always reports the feature as unsupported.
pub fn generate(definition: &GameDefinition) -> Result<()> {
    tracing::debug!(definition = %definition.name, "Generation requested");
    Err(Error::Unsupported {
        message: "Game generation is not yet implemented".to_string(),
        feature: Some("generate".to_string()),
    })
}
