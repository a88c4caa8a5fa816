use crate::payload::{BLUE_ICON, GRAY_ICON, TAB_IDENTIFIERS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which state of a tab an icon represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRole {
    Inactive,
    Active,
}

impl IconRole {
    /// Suffix appended to the tab identifier in the output file name.
    pub fn file_suffix(self) -> &'static str {
        match self {
            IconRole::Inactive => "",
            IconRole::Active => "_active",
        }
    }
}

impl fmt::Display for IconRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconRole::Inactive => write!(f, "inactive"),
            IconRole::Active => write!(f, "active"),
        }
    }
}

/// Everything one materialization run needs.
#[derive(Debug, Clone)]
pub struct MaterializeConfig {
    pub target_directory: PathBuf,
    pub identifiers: Vec<String>,
    /// Base64 text of the inactive (gray) icon.
    pub inactive_payload: String,
    /// Base64 text of the active (blue) icon.
    pub active_payload: String,
}

impl MaterializeConfig {
    /// The fixed tab bar deployment: four tabs, gray and blue icons.
    pub fn tabbar(target_directory: impl Into<PathBuf>) -> Self {
        Self {
            target_directory: target_directory.into(),
            identifiers: TAB_IDENTIFIERS.iter().map(|s| s.to_string()).collect(),
            inactive_payload: GRAY_ICON.to_string(),
            active_payload: BLUE_ICON.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenIcon {
    pub identifier: String,
    pub role: IconRole,
    pub file_name: String,
    pub size_bytes: u64,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterializeReport {
    pub directory: PathBuf,
    pub files: Vec<WrittenIcon>,
}
