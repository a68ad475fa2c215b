//! Serializable view of a registry's configuration

use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time copy of the overrides and targets of a
/// [`Registry`](crate::core::Registry), for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_from: Option<String>,
    pub root_level: LogLevel,
    pub root_target: String,
    /// Level override per logger name
    pub levels: BTreeMap<String, LogLevel>,
    /// Target name per logger name
    pub targets: BTreeMap<String, String>,
    pub open_targets: usize,
    pub target_capacity: usize,
}

impl RegistrySnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
