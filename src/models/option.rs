use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One allowed value of a categorical appointment field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl ConfigurableOption {
    pub fn new(value: &str, label: &str, color: Option<&str>) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            color: color.map(str::to_string),
            disabled: false,
        }
    }
}

/// Host-supplied taxonomy. An empty list means "use the built-in defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    #[serde(default)]
    pub statuses: Vec<ConfigurableOption>,
    #[serde(default)]
    pub priorities: Vec<ConfigurableOption>,
    #[serde(default)]
    pub types: Vec<ConfigurableOption>,
}

impl TaxonomyConfig {
    pub fn field(&self, field: TaxonomyField) -> &[ConfigurableOption] {
        match field {
            TaxonomyField::Statuses => &self.statuses,
            TaxonomyField::Priorities => &self.priorities,
            TaxonomyField::Types => &self.types,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TaxonomyField {
    Statuses,
    Priorities,
    Types,
}

impl TaxonomyField {
    pub const ALL: [TaxonomyField; 3] = [
        TaxonomyField::Statuses,
        TaxonomyField::Priorities,
        TaxonomyField::Types,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomyField::Statuses => "statuses",
            TaxonomyField::Priorities => "priorities",
            TaxonomyField::Types => "types",
        }
    }

    /// Singular name, as used for the matching appointment field.
    pub fn singular(&self) -> &'static str {
        match self {
            TaxonomyField::Statuses => "status",
            TaxonomyField::Priorities => "priority",
            TaxonomyField::Types => "type",
        }
    }
}
