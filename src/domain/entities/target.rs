//! Target entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::Rotation;

/// A deployment destination (device or simulator profile).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Target {
    pub name: String,
    pub description: String,
    /// SDK platform tag passed with `-p`
    pub platform: String,
    /// Literal shell command that erases the device
    pub wipe_command: String,
    pub format_flag: bool,
    pub format_str: String,
    pub rotation_flag: bool,
    /// Negative values mean "flag without a value"
    pub rotation_value: i32,
    /// Keys this version does not know; written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Target {
    /// Zero-valued target with only the name set (used by `target add`).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_platform(&self) -> bool {
        !self.platform.trim().is_empty()
    }

    pub fn has_wipe_command(&self) -> bool {
        !self.wipe_command.trim().is_empty()
    }

    /// Rotation override requested by this target.
    ///
    /// `Ok(None)` when the flag is off or no value is given; `Err(value)` when
    /// the value is outside 0/90/180/270.
    pub fn rotation(&self) -> Result<Option<Rotation>, i32> {
        if !self.rotation_flag || self.rotation_value < 0 {
            return Ok(None);
        }
        Rotation::try_from(self.rotation_value).map(Some)
    }
}
