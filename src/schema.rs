//! The option schema: the JSON document hyprcc builds its UI from.
//!
//! The document maps category names to [`Category`] objects.  Order
//! matters: tabs and sub-category cards are displayed in file order, so
//! both levels are read into an [`IndexMap`], which keeps insertion order.
//!
//! # Example
//!
//! ```json
//! {
//!   "general": {
//!     "icon": "preferences-system",
//!     "options": [
//!       {
//!         "name": "general.border_size",
//!         "description": "size of the border around windows",
//!         "type": "int",
//!         "default": "1"
//!       }
//!     ],
//!     "sub_categories": {
//!       "snap": [
//!         {
//!           "name": "general.snap.enabled",
//!           "description": "enable snapping for floating windows",
//!           "type": "bool",
//!           "default": "false"
//!         }
//!       ]
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Declared type of an option, as written in the schema's `"type"` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionType {
    Bool,
    Float,
    Int,
    Color,
    Gradient,
    /// Any type hyprcc has no editor for (strings, vec2, …).
    Other(String),
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Bool => write!(f, "bool"),
            OptionType::Float => write!(f, "float"),
            OptionType::Int => write!(f, "int"),
            OptionType::Color => write!(f, "color"),
            OptionType::Gradient => write!(f, "gradient"),
            OptionType::Other(s) => write!(f, "{}", s),
        }
    }
}

impl<'de> Deserialize<'de> for OptionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "bool" => OptionType::Bool,
            "float" => OptionType::Float,
            "int" => OptionType::Int,
            "color" => OptionType::Color,
            "gradient" => OptionType::Gradient,
            _ => OptionType::Other(s),
        })
    }
}

/// One configurable setting as described by the schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionDescriptor {
    /// Dotted/underscored key, e.g. `general.border_size`.  Unique per schema.
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    /// Always a string in the schema; parsed per type by the factory.
    pub default: String,
}

/// One top-level category; becomes one tab.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Category {
    /// Icon name shown next to the tab title.
    #[serde(default)]
    pub icon: Option<String>,
    /// Options listed directly on the tab.
    #[serde(default)]
    pub options: Vec<OptionDescriptor>,
    /// Nested groups, each rendered as a card below the top-level options.
    #[serde(default)]
    pub sub_categories: IndexMap<String, Vec<OptionDescriptor>>,
}

impl Category {
    /// Every option in this category, top-level first, then each
    /// sub-category in order.
    pub fn all_options(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options
            .iter()
            .chain(self.sub_categories.values().flatten())
    }
}

/// A loaded schema: categories in document order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub categories: IndexMap<String, Category>,
}

/// Errors from loading a schema or turning it into controls.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("option {0:?} is defined more than once")]
    DuplicateOption(String),
    #[error("option {option:?}: default {value:?} is not a valid {expected}")]
    InvalidDefault {
        option: String,
        expected: OptionType,
        value: String,
    },
}

impl Schema {
    /// Load and validate a schema from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json)?;
        schema.check_unique_names()?;
        Ok(schema)
    }

    /// Every option in the schema, in display order.
    pub fn options(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.categories.values().flat_map(Category::all_options)
    }

    fn check_unique_names(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for option in self.options() {
            if !seen.insert(option.name.as_str()) {
                return Err(SchemaError::DuplicateOption(option.name.clone()));
            }
        }
        Ok(())
    }
}
