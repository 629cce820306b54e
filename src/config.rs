//! Editor configuration parsed from JSON.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, ActionKind, merge_actions};
use crate::consts;
use crate::geometry::Vec2;
use crate::history::HistoryPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub history_capacity: usize,
    pub ignored_actions: Vec<ActionKind>,
    pub merge_actions: bool,
    pub canvas_size: Vec2,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: consts::DEFAULT_HISTORY_CAPACITY,
            ignored_actions: vec![ActionKind::SelectItems, ActionKind::SelectDiagram],
            merge_actions: true,
            canvas_size: Vec2::new(consts::DEFAULT_CANVAS_WIDTH, consts::DEFAULT_CANVAS_HEIGHT),
        }
    }
}

impl EditorConfig {
    /// Build typed editor config from a JSON object.
    ///
    /// Every field is optional:
    /// - `historyCapacity`: default 50, at least 1
    /// - `ignoredActions`: action kinds kept out of the history, default `selectItems` and `selectDiagram`
    /// - `mergeActions`: fold consecutive drags and style tweaks into one entry, default true
    /// - `canvasSize`: `{x, y}`, default 1000 x 1000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for unparsable input and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero capacity or a negative or non-finite canvas size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid("historyCapacity must be at least 1".into()));
        }
        if !self.canvas_size.is_finite() || self.canvas_size.x < 0.0 || self.canvas_size.y < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "canvasSize must be finite and non-negative, got {}x{}",
                self.canvas_size.x, self.canvas_size.y
            )));
        }
        Ok(())
    }

    /// History policy for [`Action`]s described by this config.
    #[must_use]
    pub fn history_policy(&self) -> HistoryPolicy<Action> {
        let ignored = self.ignored_actions.clone();
        let policy = HistoryPolicy::new().with_ignore(move |action: &Action| ignored.contains(&action.kind()));
        if self.merge_actions { policy.with_merge(merge_actions) } else { policy }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
