//! Property editors a renderer advertises for its shapes.

use serde::{Deserialize, Serialize};

/// Property descriptor a renderer exposes for editing in the properties panel.
///
/// `name` is the appearance key the editor writes when the user changes the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Configurable {
    /// Numeric value picked on a slider between `min` and `max`.
    Slider { name: String, label: String, min: f64, max: f64 },
    /// Numeric value typed into a field, within `min..=max`.
    Number { name: String, label: String, min: f64, max: f64 },
    /// One string out of `options`.
    Selection { name: String, label: String, options: Vec<String> },
    /// Color string.
    Color { name: String, label: String },
    /// Boolean flag.
    Toggle { name: String, label: String },
}

impl Configurable {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Slider { name, .. }
            | Self::Number { name, .. }
            | Self::Selection { name, .. }
            | Self::Color { name, .. }
            | Self::Toggle { name, .. } => name,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Slider { label, .. }
            | Self::Number { label, .. }
            | Self::Selection { label, .. }
            | Self::Color { label, .. }
            | Self::Toggle { label, .. } => label,
        }
    }

    /// Whether `value` is acceptable for this property.
    #[must_use]
    pub fn accepts(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::Slider { min, max, .. } | Self::Number { min, max, .. } => {
                value.as_f64().is_some_and(|number| number >= *min && number <= *max)
            }
            Self::Selection { options, .. } => value.as_str().is_some_and(|option| options.iter().any(|o| o == option)),
            Self::Color { .. } => value.is_string() || value.is_u64(),
            Self::Toggle { .. } => value.is_boolean(),
        }
    }
}
